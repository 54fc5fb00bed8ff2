//! Content Error Types
//!
//! This module provides content-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Guard failures from
//! the auth crate pass through unchanged so their wire codes survive.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use auth::AuthError;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Question uuid does not resolve (QUES-001); the message depends on
    /// the operation that failed to resolve it
    #[error("{0}")]
    QuestionNotFound(&'static str),

    /// Answer uuid does not resolve (ANS-001)
    #[error("Entered answer uuid does not exist")]
    AnswerNotFound,

    /// User uuid does not resolve (USR-001)
    #[error("User with entered uuid does not exist")]
    UserNotFound,

    /// Session or authorization failure from the auth guards
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// Stable, client-visible error code
    pub fn code(&self) -> &'static str {
        match self {
            ContentError::QuestionNotFound(_) => "QUES-001",
            ContentError::AnswerNotFound => "ANS-001",
            ContentError::UserNotFound => "USR-001",
            ContentError::Auth(err) => err.code(),
            ContentError::Database(_) | ContentError::Internal(_) => "GEN-001",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::QuestionNotFound(_)
            | ContentError::AnswerNotFound
            | ContentError::UserNotFound => ErrorKind::NotFound,
            ContentError::Auth(err) => err.kind(),
            ContentError::Database(_) | ContentError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.code(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            // Auth errors keep their own logging and rendering
            ContentError::Auth(err) => err.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}
