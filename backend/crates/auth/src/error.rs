//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Every client-visible
//! variant carries the stable wire code expected by existing clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::header::BasicAuthError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup with a username that already exists (SGR-001)
    #[error("Try any other Username, this Username has already been taken")]
    UserNameTaken,

    /// Signup with an email that already exists (SGR-002)
    #[error("This user has already been registered, try with any other emailId")]
    EmailTaken,

    /// Signup without a usable password (SGR-003)
    #[error("Password is required for registration")]
    PasswordRequired,

    /// Signout with a token that has no live session (SGR-001)
    #[error("User is not Signed in")]
    NotSignedIn,

    /// Signin with an unknown username (ATH-001)
    #[error("This username does not exist")]
    UnknownUserName,

    /// Signin with a wrong password (ATH-002)
    #[error("Password failed")]
    PasswordFailed,

    /// Protected call with a token that was never issued (ATHR-001)
    #[error("User has not signed in")]
    SessionMissing,

    /// Protected call on a signed-out or expired session (ATHR-002);
    /// the message names the operation the caller attempted
    #[error("{0}")]
    SessionEnded(String),

    /// Caller lacks authority over the resource (ATHR-003)
    #[error("{0}")]
    Forbidden(&'static str),

    /// Authorization header that could not be parsed (GEN-001)
    #[error("Unexpected Authorization header format")]
    MalformedAuthorization,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable, client-visible error code
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::UserNameTaken | AuthError::NotSignedIn => "SGR-001",
            AuthError::EmailTaken => "SGR-002",
            AuthError::PasswordRequired => "SGR-003",
            AuthError::UnknownUserName => "ATH-001",
            AuthError::PasswordFailed => "ATH-002",
            AuthError::SessionMissing => "ATHR-001",
            AuthError::SessionEnded(_) => "ATHR-002",
            AuthError::Forbidden(_) => "ATHR-003",
            AuthError::MalformedAuthorization
            | AuthError::Database(_)
            | AuthError::Internal(_) => "GEN-001",
        }
    }

    /// Get the ErrorKind for this error
    ///
    /// `SGR-001` maps to two statuses: 409 when signup collides, 401 when
    /// signout finds no live session. The variants keep them apart.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken | AuthError::EmailTaken | AuthError::PasswordRequired => {
                ErrorKind::Conflict
            }
            AuthError::NotSignedIn
            | AuthError::UnknownUserName
            | AuthError::PasswordFailed => ErrorKind::Unauthorized,
            AuthError::SessionMissing
            | AuthError::SessionEnded(_)
            | AuthError::Forbidden(_) => ErrorKind::Forbidden,
            AuthError::MalformedAuthorization
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::PasswordFailed | AuthError::UnknownUserName => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Forbidden(msg) => {
                tracing::warn!(message = %msg, "Authorization denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<BasicAuthError> for AuthError {
    fn from(_: BasicAuthError) -> Self {
        AuthError::MalformedAuthorization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(AuthError::UserNameTaken.code(), "SGR-001");
        assert_eq!(AuthError::EmailTaken.code(), "SGR-002");
        assert_eq!(AuthError::PasswordRequired.code(), "SGR-003");
        assert_eq!(AuthError::NotSignedIn.code(), "SGR-001");
        assert_eq!(AuthError::UnknownUserName.code(), "ATH-001");
        assert_eq!(AuthError::PasswordFailed.code(), "ATH-002");
        assert_eq!(AuthError::SessionMissing.code(), "ATHR-001");
        assert_eq!(AuthError::SessionEnded(String::new()).code(), "ATHR-002");
        assert_eq!(AuthError::Forbidden("nope").code(), "ATHR-003");
        assert_eq!(AuthError::MalformedAuthorization.code(), "GEN-001");
    }

    #[test]
    fn test_shared_code_disambiguated_by_status() {
        // SGR-001 is reused across signup (409) and signout (401).
        assert_eq!(AuthError::UserNameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::NotSignedIn.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::UnknownUserName.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::PasswordFailed.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::SessionMissing.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::SessionEnded("msg".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AuthError::Forbidden("msg").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::MalformedAuthorization.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::UserNameTaken.to_string(),
            "Try any other Username, this Username has already been taken"
        );
        assert_eq!(
            AuthError::EmailTaken.to_string(),
            "This user has already been registered, try with any other emailId"
        );
        assert_eq!(AuthError::NotSignedIn.to_string(), "User is not Signed in");
        assert_eq!(
            AuthError::SessionMissing.to_string(),
            "User has not signed in"
        );
        assert_eq!(
            AuthError::SessionEnded("User is signed out.Sign in first to post a question".into())
                .to_string(),
            "User is signed out.Sign in first to post a question"
        );
    }

    #[test]
    fn test_basic_auth_error_conversion() {
        let err: AuthError = BasicAuthError::MissingScheme.into();
        assert!(matches!(err, AuthError::MalformedAuthorization));
        assert_eq!(err.code(), "GEN-001");
    }
}
