use axum::Json;

use crate::schemas::MenuItem;
use crate::seed;

/// The menu is fixed content, served straight from the seed data.
pub async fn list_menu_handler() -> Json<Vec<MenuItem>> {
    Json(seed::menu_items())
}
