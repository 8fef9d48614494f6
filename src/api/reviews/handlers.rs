use crate::api::models::*;
use crate::schemas::Review;
use crate::seed;
use axum::{
    Json,
    extract::{Query, State},
};
use mongodb::bson::doc;
use tracing::info;

pub async fn list_reviews_handler(
    State(state): State<AppState>,
    Query(params): Query<ListReviewsParams>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews: Vec<Review> = state
        .store
        .find_many("review", doc! {}, Some(params.limit))
        .await?;

    if reviews.is_empty() {
        info!("No stored reviews, serving fallback content");
        return Ok(Json(seed::fallback_reviews()));
    }

    Ok(Json(reviews))
}
