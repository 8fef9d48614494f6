use crate::api::models::AppState;
use crate::api::orders::handlers::submit_daig_order_handler;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders/daig", post(submit_daig_order_handler))
}
