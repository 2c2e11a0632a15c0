use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;

use super::route_with_slash;
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::service::AppState;

pub fn router() -> Router<AppState> {
    route_with_slash(Router::new(), "/get_cars", get(get_cars))
}

async fn get_cars(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let listings = state.cars.listings().await?;
    tracing::info!("{} Returning {} car models", API_NAME, listings.len());

    Ok(Json(json!({ "CarModels": listings })))
}
