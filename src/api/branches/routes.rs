use crate::api::branches::handlers::list_branches_handler;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/branches", get(list_branches_handler))
}
