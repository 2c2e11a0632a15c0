pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
pub mod upstream;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use service::AppState;

/// The full application, with every endpoint mounted under `/djangoapp`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/djangoapp", handlers::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
