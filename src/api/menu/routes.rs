use crate::api::menu::handlers::list_menu_handler;
use crate::api::models::AppState;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/menu", get(list_menu_handler))
}
