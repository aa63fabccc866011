use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{ensure_role, ensure_self};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::model::{
    Class, CreateClassRequest, EnrollRequest, FeedbackRequest, UpdateClassRequest,
    UpdateStatusRequest,
};
use crate::modules::classes::service::ClassService;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List approved classes
#[utoipa::path(
    get,
    path = "/api/classes",
    responses((status = 200, description = "Approved classes", body = Vec<Class>)),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_approved_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_approved(&state.db).await?;
    Ok(Json(classes))
}

/// Top approved classes by enrollment
#[utoipa::path(
    get,
    path = "/api/classes/popular",
    responses((status = 200, description = "Six most enrolled classes", body = Vec<Class>)),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_popular_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::popular(&state.db).await?;
    Ok(Json(classes))
}

/// Fetch one class
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "The class", body = Class),
        (status = 404, description = "Class missing", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::find(&state.db, id).await?;
    Ok(Json(class))
}

/// List every class regardless of status (admin only)
#[utoipa::path(
    get,
    path = "/api/classes/all/{email}",
    params(("email" = String, Path, description = "Authenticated caller's own email")),
    responses(
        (status = 200, description = "All classes", body = Vec<Class>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_all_classes(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Class>>, AppError> {
    ensure_self(&auth_user, &email)?;
    ensure_role(&state.db, &auth_user, UserRole::Admin).await?;

    let classes = ClassService::list_all(&state.db).await?;
    Ok(Json(classes))
}

/// List an instructor's own classes
#[utoipa::path(
    get,
    path = "/api/classes/instructor/{email}",
    params(("email" = String, Path, description = "Authenticated instructor's own email")),
    responses(
        (status = 200, description = "Classes owned by the instructor", body = Vec<Class>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_instructor_classes(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Class>>, AppError> {
    ensure_self(&auth_user, &email)?;
    ensure_role(&state.db, &auth_user, UserRole::Instructor).await?;

    let classes = ClassService::list_by_instructor(&state.db, &email).await?;
    Ok(Json(classes))
}

/// Create a class (instructor only, starts pending)
#[utoipa::path(
    post,
    path = "/api/classes/instructor/{email}",
    params(("email" = String, Path, description = "Authenticated instructor's own email")),
    request_body = CreateClassRequest,
    responses(
        (status = 200, description = "Created class", body = Class),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateClassRequest>,
) -> Result<Json<Class>, AppError> {
    ensure_self(&auth_user, &email)?;
    ensure_role(&state.db, &auth_user, UserRole::Instructor).await?;

    let class = ClassService::create(&state.db, dto).await?;
    Ok(Json(class))
}

/// Edit a class (owning instructor only)
#[utoipa::path(
    patch,
    path = "/api/classes/{id}",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = UpdateClassRequest,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Class missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn update_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClassRequest>,
) -> Result<Json<Class>, AppError> {
    ensure_self(&auth_user, &dto.instructor_email)?;
    ensure_role(&state.db, &auth_user, UserRole::Instructor).await?;

    let class = ClassService::update(&state.db, id, dto).await?;
    Ok(Json(class))
}

/// Approve or deny a class (admin only)
#[utoipa::path(
    patch,
    path = "/api/classes/{id}/status",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Class missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn update_class_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<Class>, AppError> {
    ensure_self(&auth_user, &dto.email)?;
    ensure_role(&state.db, &auth_user, UserRole::Admin).await?;

    let class = ClassService::set_status(&state.db, id, dto.status).await?;
    Ok(Json(class))
}

/// Leave feedback on a class (admin only)
#[utoipa::path(
    patch,
    path = "/api/classes/{id}/feedback",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Class missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn update_class_feedback(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<FeedbackRequest>,
) -> Result<Json<Class>, AppError> {
    ensure_self(&auth_user, &dto.email)?;
    ensure_role(&state.db, &auth_user, UserRole::Admin).await?;

    let class = ClassService::set_feedback(&state.db, id, &dto.feedback).await?;
    Ok(Json(class))
}

/// Take a seat in a class
#[utoipa::path(
    patch,
    path = "/api/classes/{id}/enroll",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 400, description = "No seats available", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn enroll_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<EnrollRequest>,
) -> Result<Json<Class>, AppError> {
    ensure_self(&auth_user, &dto.email)?;

    let class = ClassService::enroll(&state.db, id).await?;
    Ok(Json(class))
}
