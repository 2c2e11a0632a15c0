pub mod auth;
pub mod cars;
pub mod dealers;
pub mod health;
pub mod reviews;

use axum::{routing::MethodRouter, Router};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::service::AppState;

/// Every endpoint, relative to the mount point.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(cars::router())
        .merge(dealers::router())
        .merge(reviews::router())
        .merge(health::router())
}

/// Parses a raw request body so that malformed JSON maps to a 400.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Serves `path` with and without a trailing slash.
fn route_with_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{}/", path), method_router)
}

async fn post_only() -> AppError {
    AppError::MethodNotAllowed
}
