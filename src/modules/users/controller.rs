use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{ensure_role, ensure_self, lookup_role};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    PromoteRequest, RoleCheckResponse, StudentIncrementRequest, UpsertUserRequest, User, UserRole,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Upsert a user by email (first-login registration)
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "User created or updated", body = User),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn upsert_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpsertUserRequest>,
) -> Result<Json<User>, AppError> {
    let user = UserService::upsert_user(&state.db, dto).await?;
    Ok(Json(user))
}

/// List every user record (admin only, own email in the path)
#[utoipa::path(
    get,
    path = "/api/users/{email}",
    params(("email" = String, Path, description = "Authenticated caller's own email")),
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<User>>, AppError> {
    ensure_self(&auth_user, &email)?;
    ensure_role(&state.db, &auth_user, UserRole::Admin).await?;

    let users = UserService::list_users(&state.db).await?;
    Ok(Json(users))
}

/// Stored role of an email
#[utoipa::path(
    get,
    path = "/api/users/{email}/role",
    params(("email" = String, Path, description = "Email to look up")),
    responses(
        (status = 200, description = "Stored role, `user` when unknown", body = UserRole)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserRole>, AppError> {
    let role = UserService::role_of(&state.db, &email).await?;
    Ok(Json(role))
}

/// Check whether the caller holds a role
///
/// Probing someone else's email answers `matches: false` without touching
/// the store; probing your own email reads the stored role fresh.
#[utoipa::path(
    get,
    path = "/api/users/{email}/role/{role}",
    params(
        ("email" = String, Path, description = "Email being probed"),
        ("role" = String, Path, description = "One of `user`, `instructor`, `admin`")
    ),
    responses(
        (status = 200, description = "Whether the stored role matches", body = RoleCheckResponse),
        (status = 400, description = "Unknown role name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn check_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((email, role)): Path<(String, String)>,
) -> Result<Json<RoleCheckResponse>, AppError> {
    let role: UserRole = role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown role: {role}")))?;

    if auth_user.email() != email {
        return Ok(Json(RoleCheckResponse {
            role,
            matches: false,
        }));
    }

    let stored = lookup_role(&state.db, &email).await?.unwrap_or_default();
    Ok(Json(RoleCheckResponse {
        role,
        matches: stored == role,
    }))
}

/// List all instructors
#[utoipa::path(
    get,
    path = "/api/users/instructors",
    responses((status = 200, description = "All instructors", body = Vec<User>)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_instructors(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_instructors(&state.db).await?;
    Ok(Json(users))
}

/// Top instructors by enrolled student count
#[utoipa::path(
    get,
    path = "/api/users/instructors/popular",
    responses((status = 200, description = "Six most popular instructors", body = Vec<User>)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_popular_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::popular_instructors(&state.db).await?;
    Ok(Json(users))
}

/// Promote a user to instructor or admin (admin only)
#[utoipa::path(
    patch,
    path = "/api/users/promote/{id}/{role}",
    params(
        ("id" = Uuid, Path, description = "Target user id"),
        ("role" = String, Path, description = "`instructor` or `admin`")
    ),
    request_body = PromoteRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Role cannot be promoted to", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Target user missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, role)): Path<(Uuid, String)>,
    ValidatedJson(dto): ValidatedJson<PromoteRequest>,
) -> Result<Json<User>, AppError> {
    ensure_self(&auth_user, &dto.email)?;

    let role: UserRole = role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown role: {role}")))?;
    if role == UserRole::User {
        return Err(AppError::BadRequest(
            "cannot promote to the base role".to_string(),
        ));
    }

    ensure_role(&state.db, &auth_user, UserRole::Admin).await?;

    let user = UserService::promote(&state.db, id, role).await?;
    Ok(Json(user))
}

/// Record one more enrolled student for an instructor
#[utoipa::path(
    patch,
    path = "/api/users/students/increment",
    request_body = StudentIncrementRequest,
    responses(
        (status = 200, description = "Updated instructor record", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Instructor missing", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn increment_students(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<StudentIncrementRequest>,
) -> Result<Json<User>, AppError> {
    let user = UserService::increment_students(&state.db, &dto.email).await?;
    Ok(Json(user))
}
