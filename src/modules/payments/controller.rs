use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::ensure_self;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::payments::model::{
    Payment, PaymentIntentRequest, PaymentIntentResponse, RecordPaymentRequest,
};
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::payments::create_payment_intent;
use crate::validator::ValidatedJson;

/// Create a payment intent at the processor
#[utoipa::path(
    post,
    path = "/api/payments/intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Client secret for the card flow", body = PaymentIntentResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 502, description = "Payment processor failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn create_intent(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let amount_cents = (dto.price * 100.0).round() as i64;
    let client_secret = create_payment_intent(&state.payments_config, amount_cents).await?;

    Ok(Json(PaymentIntentResponse { client_secret }))
}

/// The caller's payment history, newest first
#[utoipa::path(
    get,
    path = "/api/payments/history/{email}",
    params(("email" = String, Path, description = "Authenticated caller's own email")),
    responses(
        (status = 200, description = "Payments for the email", body = Vec<Payment>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payment_history(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Payment>>, AppError> {
    ensure_self(&auth_user, &email)?;

    let payments = PaymentService::history(&state.db, &email).await?;
    Ok(Json(payments))
}

/// Record a settled payment
#[utoipa::path(
    put,
    path = "/api/payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Stored payment", body = Payment),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn record_payment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RecordPaymentRequest>,
) -> Result<Json<Payment>, AppError> {
    ensure_self(&auth_user, &dto.email)?;

    let payment = PaymentService::record(&state.db, dto).await?;
    Ok(Json(payment))
}
