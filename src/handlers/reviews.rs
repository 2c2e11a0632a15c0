use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::{parse_json, post_only, route_with_slash};
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::DealerId;
use crate::service::AppState;

pub fn router() -> Router<AppState> {
    let router = route_with_slash(Router::new(), "/reviews/dealer/:dealer_id", get(get_dealer_reviews));
    route_with_slash(router, "/add_review", post(add_review).fallback(post_only))
}

async fn get_dealer_reviews(
    State(state): State<AppState>,
    Path(dealer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let dealer_id = DealerId::parse(&dealer_id).ok_or(AppError::BadRequest)?;
    let reviews = state.reviews.dealer_reviews(dealer_id).await?;
    Ok(Json(json!({ "status": 200, "reviews": reviews })))
}

async fn add_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let Some((_, session)) = state.sessions.current(&headers).await else {
        return Err(AppError::Forbidden);
    };

    let review: Value = parse_json(&body).map_err(|e| {
        tracing::error!("{} Error posting review: {}", API_NAME, e);
        AppError::ReviewPost
    })?;

    state.reviews.add_review(&review).await?;
    tracing::info!("{} Review posted by '{}'", API_NAME, session.username);

    Ok(Json(json!({ "status": 200 })))
}
