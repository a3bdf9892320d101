use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-handling errors. Client-attributable variants carry their short
/// message into the response body; server-side variants respond with a
/// generic message and keep the detail in the log sink.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid file path")]
    InvalidPath,
    #[error("File not found")]
    NotFound,
    #[error("Cannot download a directory")]
    NotAFile,
    // Normally produced by axum's method routing, not constructed directly.
    #[allow(dead_code)]
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Could not parse form: {0}")]
    BadForm(String),
    #[error("Error accessing file: {0}")]
    AccessError(String),
    #[error("Could not create file on server: {0}")]
    CreateError(String),
    #[error("Could not save file: {0}")]
    WriteError(String),
    #[error("Could not read directory: {0}")]
    DirectoryUnreadable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid file path"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "File not found"),
            AppError::NotAFile => (StatusCode::BAD_REQUEST, "Cannot download a directory"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            AppError::BadForm(detail) => {
                tracing::warn!(%detail, "malformed form");
                (StatusCode::BAD_REQUEST, "Could not parse form")
            }
            AppError::AccessError(detail) => {
                tracing::error!(%detail, "error accessing file");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error accessing file")
            }
            AppError::CreateError(detail) => {
                tracing::error!(%detail, "could not create file");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not create file on server",
                )
            }
            AppError::WriteError(detail) => {
                tracing::error!(%detail, "could not save file");
                (StatusCode::INTERNAL_SERVER_ERROR, "Could not save file")
            }
            AppError::DirectoryUnreadable(detail) => {
                tracing::error!(%detail, "could not read directory");
                (StatusCode::INTERNAL_SERVER_ERROR, "Could not read directory")
            }
        };

        (status, body).into_response()
    }
}
