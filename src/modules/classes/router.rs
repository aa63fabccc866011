use crate::modules::classes::controller::{
    create_class, enroll_class, get_all_classes, get_approved_classes, get_class,
    get_instructor_classes, get_popular_classes, update_class, update_class_feedback,
    update_class_status,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_approved_classes))
        .route("/popular", get(get_popular_classes))
        .route("/all/{email}", get(get_all_classes))
        .route(
            "/instructor/{email}",
            get(get_instructor_classes).post(create_class),
        )
        .route("/{id}", get(get_class).patch(update_class))
        .route("/{id}/status", patch(update_class_status))
        .route("/{id}/feedback", patch(update_class_feedback))
        .route("/{id}/enroll", patch(enroll_class))
}
