use crate::api::models::*;
use crate::schemas::DaigOrderPayload;
use axum::{Json, extract::State};
use tracing::info;

pub async fn submit_daig_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<DaigOrderPayload>,
) -> Result<Json<SubmitResponse>, AppError> {
    // Validate
    let order = payload.validate().map_err(AppError::Validation)?;

    info!(name = %order.name, quantity = %order.quantity, "Accepting daig order");

    let id = state.store.insert_one("daigorder", &order).await?;

    info!(%id, "Daig order stored");

    Ok(Json(SubmitResponse::ok(id)))
}
