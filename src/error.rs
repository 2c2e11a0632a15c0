use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request")]
    BadRequest,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Authentication failed for user '{0}'")]
    Unauthenticated(String),

    #[error("Unauthorized")]
    Forbidden,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Error in posting review")]
    ReviewPost,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Json(_) | AppError::Validation(_) | AppError::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unauthenticated(_) | AppError::ReviewPost => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Upstream(_) | AppError::Repository(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = status.as_u16();

        let body = match self {
            AppError::Repository(e) => {
                tracing::error!("Repository error: {}", e);
                json!({ "error": format!("Database error: {}", e), "status": code })
            }
            AppError::Json(e) => {
                tracing::warn!("JSON error: {}", e);
                json!({ "error": "Invalid JSON", "status": code })
            }
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                json!({ "error": msg, "status": code })
            }
            AppError::BadRequest => {
                tracing::warn!("Bad request");
                json!({ "status": code, "message": "Bad Request" })
            }
            AppError::MethodNotAllowed => {
                json!({ "error": "Only POST method is allowed" })
            }
            AppError::Unauthenticated(username) => {
                tracing::warn!("Failed login attempt for username '{}'", username);
                json!({ "userName": username, "status": "Failed" })
            }
            AppError::Forbidden => {
                tracing::warn!("Rejected anonymous request");
                json!({ "status": code, "message": "Unauthorized" })
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                json!({ "status": code, "message": msg })
            }
            AppError::ReviewPost => {
                json!({ "status": code, "message": "Error in posting review" })
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                json!({ "error": format!("Internal server error: {}", e), "status": code })
            }
        };

        (status, Json(body)).into_response()
    }
}
