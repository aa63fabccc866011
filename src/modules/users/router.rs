use crate::modules::users::controller::{
    check_role, get_instructors, get_popular_instructors, get_role, get_users,
    increment_students, promote_user, upsert_user,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, put},
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", put(upsert_user))
        .route("/instructors", get(get_instructors))
        .route("/instructors/popular", get(get_popular_instructors))
        .route("/students/increment", patch(increment_students))
        .route("/promote/{id}/{role}", patch(promote_user))
        .route("/{email}", get(get_users))
        .route("/{email}/role", get(get_role))
        .route("/{email}/role/{role}", get(check_role))
}
