use crate::api::inquiry::handlers::submit_inquiry_handler;
use crate::api::models::AppState;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/inquiry", post(submit_inquiry_handler))
}
