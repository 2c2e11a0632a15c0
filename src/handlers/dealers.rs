use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;

use super::route_with_slash;
use crate::error::AppError;
use crate::models::DealerId;
use crate::service::AppState;

pub fn router() -> Router<AppState> {
    let router = route_with_slash(Router::new(), "/get_dealers", get(get_dealerships));
    let router = route_with_slash(router, "/get_dealers/:state", get(get_dealerships_by_state));
    route_with_slash(router, "/dealer/:dealer_id", get(get_dealer_details))
}

async fn get_dealerships(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let dealers = state.dealers.dealers(None).await?;
    Ok(Json(json!({ "status": 200, "dealers": dealers })))
}

async fn get_dealerships_by_state(
    State(state): State<AppState>,
    Path(dealer_state): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let dealers = state.dealers.dealers(Some(&dealer_state)).await?;
    Ok(Json(json!({ "status": 200, "dealers": dealers })))
}

async fn get_dealer_details(
    State(state): State<AppState>,
    Path(dealer_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let dealer_id = DealerId::parse(&dealer_id).ok_or(AppError::BadRequest)?;
    let dealer = state.dealers.dealer(dealer_id).await?;
    Ok(Json(json!({ "status": 200, "dealer": [dealer] })))
}
