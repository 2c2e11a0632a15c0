use axum::{
    body::Bytes,
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{AppendHeaders, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::{parse_json, post_only, route_with_slash};
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{LoginRequest, RegistrationRequest};
use crate::service::session::{expired_session_cookie, session_cookie};
use crate::service::AppState;

pub fn router() -> Router<AppState> {
    let router = route_with_slash(Router::new(), "/login", post(login_user).fallback(post_only));
    let router = route_with_slash(router, "/logout", get(logout_request).post(logout_request));
    route_with_slash(router, "/register", post(registration).fallback(post_only))
}

async fn login_user(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request: LoginRequest = parse_json(&body)?;
    let (username, password) = request
        .credentials()
        .ok_or_else(|| AppError::Validation("Username and password required".to_string()))?;

    let user = state.auth.login(username, password).await?;
    let session_id = state.sessions.create(&user).await;

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(session_id).to_string())]),
        Json(json!({ "userName": user.username, "status": "Authenticated" })),
    )
        .into_response())
}

async fn logout_request(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some((id, session)) = state.sessions.current(&headers).await {
        state.sessions.remove(&id).await;
        tracing::info!("{} User '{}' logged out", API_NAME, session.username);
    }

    (
        AppendHeaders([(SET_COOKIE, expired_session_cookie().to_string())]),
        Json(json!({ "status": "Logged Out" })),
    )
        .into_response()
}

async fn registration(State(state): State<AppState>, body: Bytes) -> Result<Json<serde_json::Value>, AppError> {
    let request: RegistrationRequest = parse_json(&body)?;
    let user = state.auth.register(&request).await?;

    Ok(Json(json!({ "userName": user.username, "status": "Registered" })))
}
