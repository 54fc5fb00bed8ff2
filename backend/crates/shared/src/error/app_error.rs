//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.
//!
//! Every client-visible failure carries a stable wire code (for example
//! `SGR-001` or `ATHR-002`) alongside its [`ErrorKind`]; the HTTP boundary
//! renders the `{code, message}` envelope with the status taken from the
//! kind.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Wire code for failures that do not map to a published code.
pub const GENERIC_ERROR_CODE: &str = "GEN-001";

/// Unified application error.
///
/// ## Fields
/// * `kind` - error classification (maps to the HTTP status)
/// * `code` - stable, client-visible error code
/// * `message` - user-facing error message
/// * `source` - original error (optional, for diagnostics)
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "USR-001", "User with entered uuid does not exist");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.code(), "USR-001");
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result alias for [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with an explicit kind and wire code.
    #[inline]
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            source: None,
        }
    }

    /// 400 Bad Request with the generic code.
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, GENERIC_ERROR_CODE, message)
    }

    /// 409 Conflict with the generic code.
    #[inline]
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, GENERIC_ERROR_CODE, message)
    }

    /// 404 Not Found with the generic code.
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, GENERIC_ERROR_CODE, message)
    }

    /// 403 Forbidden with the generic code.
    #[inline]
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, GENERIC_ERROR_CODE, message)
    }

    /// 500 Internal Server Error with the generic code.
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, GENERIC_ERROR_CODE, message)
    }

    /// 503 Service Unavailable with the generic code.
    #[inline]
    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, GENERIC_ERROR_CODE, message)
    }

    /// Attach the originating error for diagnostics.
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.code, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_carries_code_and_status() {
        let err = AppError::new(ErrorKind::Conflict, "SGR-002", "already registered");
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.code(), "SGR-002");
        assert_eq!(err.message(), "already registered");
    }

    #[test]
    fn test_generic_constructors_use_generic_code() {
        assert_eq!(AppError::internal("boom").code(), GENERIC_ERROR_CODE);
        assert_eq!(AppError::bad_request("nope").status_code(), 400);
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::new(ErrorKind::NotFound, "ANS-001", "missing");
        let rendered = err.to_string();
        assert!(rendered.contains("ANS-001"));
        assert!(rendered.contains("Not Found"));
    }

    #[test]
    fn test_source_chain() {
        let io_err = std::io::Error::other("disk gone");
        let err = AppError::internal("storage failure").with_source(io_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
