use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{IssueTokenRequest, TokenResponse};
use crate::modules::classes::model::{
    Class, ClassStatus, CreateClassRequest, EnrollRequest, FeedbackRequest, UpdateClassRequest,
    UpdateStatusRequest,
};
use crate::modules::payments::model::{
    Payment, PaymentIntentRequest, PaymentIntentResponse, RecordPaymentRequest,
};
use crate::modules::selections::model::{SelectClassRequest, Selection};
use crate::modules::users::model::{
    PromoteRequest, RoleCheckResponse, StudentIncrementRequest, UpsertUserRequest, User, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::upsert_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_role,
        crate::modules::users::controller::check_role,
        crate::modules::users::controller::get_instructors,
        crate::modules::users::controller::get_popular_instructors,
        crate::modules::users::controller::promote_user,
        crate::modules::users::controller::increment_students,
        crate::modules::classes::controller::get_approved_classes,
        crate::modules::classes::controller::get_popular_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::get_all_classes,
        crate::modules::classes::controller::get_instructor_classes,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::update_class_status,
        crate::modules::classes::controller::update_class_feedback,
        crate::modules::classes::controller::enroll_class,
        crate::modules::selections::controller::get_selections,
        crate::modules::selections::controller::select_class,
        crate::modules::selections::controller::cancel_selection,
        crate::modules::selections::controller::remove_paid_selection,
        crate::modules::payments::controller::create_intent,
        crate::modules::payments::controller::get_payment_history,
        crate::modules::payments::controller::record_payment,
    ),
    components(
        schemas(
            IssueTokenRequest,
            TokenResponse,
            ErrorResponse,
            User,
            UserRole,
            UpsertUserRequest,
            PromoteRequest,
            StudentIncrementRequest,
            RoleCheckResponse,
            Class,
            ClassStatus,
            CreateClassRequest,
            UpdateClassRequest,
            UpdateStatusRequest,
            FeedbackRequest,
            EnrollRequest,
            Selection,
            SelectClassRequest,
            Payment,
            PaymentIntentRequest,
            PaymentIntentResponse,
            RecordPaymentRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Identity token issuance"),
        (name = "Users", description = "User records and role management"),
        (name = "Classes", description = "Class listing, moderation and enrollment"),
        (name = "Selections", description = "Classes picked for later payment"),
        (name = "Payments", description = "Payment intents and history")
    ),
    info(
        title = "CoachDen API",
        version = "0.1.0",
        description = "REST API for a coaching class enrollment platform, built with Rust, Axum and PostgreSQL.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
