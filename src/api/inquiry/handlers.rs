use crate::api::models::*;
use crate::schemas::InquiryPayload;
use axum::{Json, extract::State};
use tracing::info;

pub async fn submit_inquiry_handler(
    State(state): State<AppState>,
    Json(payload): Json<InquiryPayload>,
) -> Result<Json<SubmitResponse>, AppError> {
    // Validate
    let inquiry = payload.validate().map_err(AppError::Validation)?;

    info!(name = %inquiry.name, "Accepting inquiry");

    let id = state.store.insert_one("inquiry", &inquiry).await?;

    info!(%id, "Inquiry stored");

    Ok(Json(SubmitResponse::ok(id)))
}
