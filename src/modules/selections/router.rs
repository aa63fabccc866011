use crate::modules::selections::controller::{
    cancel_selection, get_selections, remove_paid_selection, select_class,
};
use crate::state::AppState;
use axum::{Router, routing::delete, routing::get};

pub fn init_selections_router() -> Router<AppState> {
    Router::new()
        .route("/cancel/{id}", delete(cancel_selection))
        .route("/by-class/{class_id}", delete(remove_paid_selection))
        .route("/{email}", get(get_selections).put(select_class))
}
