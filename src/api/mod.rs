pub mod branches;
pub mod inquiry;
pub mod menu;
pub mod models;
pub mod orders;
pub mod reviews;

// Re-exports
pub use models::*;

use axum::{Json, Router, extract::State, routing::get};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::storage::truncated;

/// Build the full application router. The browser frontend is served from a
/// different origin, hence the permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/test", get(store_report_handler))
        .merge(menu::routes())
        .merge(orders::routes())
        .merge(reviews::routes())
        .merge(branches::routes())
        .merge(inquiry::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// Root + store report handlers (simple, keep here)

pub async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Al Rehman Biryani API is running" }))
}

/// Store diagnostics for uptime checks. Always 200; the store's condition is
/// described in the body rather than the status code.
pub async fn store_report_handler(State(state): State<AppState>) -> Json<StoreReport> {
    let mut report = StoreReport {
        backend: "✅ Running".to_string(),
        database: "⚠️ Available but not initialized".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if !state.store.is_connected() {
        return Json(report);
    }

    report.database = "✅ Available".to_string();
    report.database_url = Some(if state.config.database_url.is_some() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    });
    report.database_name = Some(state.config.database_name.clone());

    match state.store.collection_names().await {
        Ok(mut names) => {
            names.truncate(10);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
        }
        Err(err) => {
            report.database = format!(
                "⚠️ Connected but Error: {}",
                truncated(&err.to_string(), 80)
            );
        }
    }

    Json(report)
}
