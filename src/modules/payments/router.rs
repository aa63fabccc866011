use crate::modules::payments::controller::{create_intent, get_payment_history, record_payment};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/", put(record_payment))
        .route("/intent", post(create_intent))
        .route("/history/{email}", get(get_payment_history))
}
