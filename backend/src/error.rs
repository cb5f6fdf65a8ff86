use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::session::SessionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{collection} with identifier \"{identifier}\" not found")]
    NotFound {
        collection: String,
        identifier: String,
    },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            // Internal detail stays in the logs, not on the wire.
            AppError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({ "success": false, "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials
            | SessionError::InvalidToken(_)
            | SessionError::TokenReuse => AppError::Unauthorized,
            SessionError::EmailExists => AppError::BadRequest(err.to_string()),
            SessionError::Internal(message) => AppError::Internal(anyhow::anyhow!(message)),
        }
    }
}
