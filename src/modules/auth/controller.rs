use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{IssueTokenRequest, TokenResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::validator::ValidatedJson;

/// Standard error body returned by every failing endpoint.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

/// Issue an identity token
///
/// Signs whatever identity the caller submits; the payload is not checked
/// against any credential store. Privilege still comes from the user store
/// on every request, so a token by itself grants nothing beyond identity.
#[utoipa::path(
    post,
    path = "/api/auth/token",
    request_body = IssueTokenRequest,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = create_access_token(&dto.email, dto.name.as_deref(), &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
