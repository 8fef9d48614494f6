use crate::api::models::*;
use crate::schemas::Branch;
use crate::seed;
use axum::{Json, extract::State};
use mongodb::bson::doc;
use tracing::info;

pub async fn list_branches_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Branch>>, AppError> {
    let branches: Vec<Branch> = state.store.find_many("branch", doc! {}, None).await?;

    if branches.is_empty() {
        info!("No stored branches, serving fallback content");
        return Ok(Json(seed::fallback_branches()));
    }

    Ok(Json(branches))
}
