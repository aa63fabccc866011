use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::ensure_self;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::selections::model::{OwnerEmailParams, SelectClassRequest, Selection};
use crate::modules::selections::service::SelectionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List the caller's selected classes
#[utoipa::path(
    get,
    path = "/api/selections/{email}",
    params(("email" = String, Path, description = "Authenticated caller's own email")),
    responses(
        (status = 200, description = "Selections for the email", body = Vec<Selection>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn get_selections(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Selection>>, AppError> {
    ensure_self(&auth_user, &email)?;

    let selections = SelectionService::list_for_user(&state.db, &email).await?;
    Ok(Json(selections))
}

/// Select a class for later payment
#[utoipa::path(
    put,
    path = "/api/selections/{email}",
    params(("email" = String, Path, description = "Authenticated caller's own email")),
    request_body = SelectClassRequest,
    responses(
        (status = 200, description = "Stored selection", body = Selection),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn select_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
    ValidatedJson(dto): ValidatedJson<SelectClassRequest>,
) -> Result<Json<Selection>, AppError> {
    ensure_self(&auth_user, &email)?;

    let selection = SelectionService::upsert(&state.db, &email, dto).await?;
    Ok(Json(selection))
}

/// Cancel a selection
#[utoipa::path(
    delete,
    path = "/api/selections/cancel/{id}",
    params(
        ("id" = Uuid, Path, description = "Selection id"),
        ("email" = String, Query, description = "Authenticated caller's own email")
    ),
    responses(
        (status = 204, description = "Selection removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Selection missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn cancel_selection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerEmailParams>,
) -> Result<StatusCode, AppError> {
    ensure_self(&auth_user, &params.email)?;

    SelectionService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Drop the selection for a class after its payment settled
#[utoipa::path(
    delete,
    path = "/api/selections/by-class/{class_id}",
    params(
        ("class_id" = Uuid, Path, description = "Class id"),
        ("email" = String, Query, description = "Authenticated caller's own email")
    ),
    responses(
        (status = 204, description = "Selection removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Selection missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn remove_paid_selection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_id): Path<Uuid>,
    Query(params): Query<OwnerEmailParams>,
) -> Result<StatusCode, AppError> {
    ensure_self(&auth_user, &params.email)?;

    SelectionService::delete_by_class(&state.db, class_id, &params.email).await?;
    Ok(StatusCode::NO_CONTENT)
}
