//! Authorization Header Parsing
//!
//! The HTTP surface carries credentials in the `Authorization` header:
//! `Basic base64(username:password)` on sign-in, and a bearer access token
//! on every protected call. The bearer value is accepted both with and
//! without the `Bearer ` prefix; clients in the wild send both forms.

use thiserror::Error;

use crate::crypto::from_base64;

/// Failure to parse a `Basic` credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasicAuthError {
    /// Header does not start with the `Basic ` scheme
    #[error("Authorization header is not Basic")]
    MissingScheme,

    /// Credential part is not valid base64 or not UTF-8
    #[error("Authorization credentials are not valid base64")]
    InvalidEncoding,

    /// Decoded credential has no `:` separator
    #[error("Authorization credentials are not username:password")]
    MalformedCredentials,
}

/// Parse `Basic base64(username:password)` into its parts.
///
/// The decoded value is split on the first `:`, so passwords may contain
/// colons.
pub fn parse_basic_credentials(authorization: &str) -> Result<(String, String), BasicAuthError> {
    let encoded = authorization
        .strip_prefix("Basic ")
        .ok_or(BasicAuthError::MissingScheme)?;

    let decoded = from_base64(encoded.trim()).map_err(|_| BasicAuthError::InvalidEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidEncoding)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MalformedCredentials)?;

    Ok((username.to_string(), password.to_string()))
}

/// Strip an optional `Bearer ` prefix from a protected-call token.
pub fn strip_bearer(authorization: &str) -> &str {
    authorization
        .strip_prefix("Bearer ")
        .unwrap_or(authorization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::to_base64;

    #[test]
    fn test_parse_basic_credentials() {
        let header = format!("Basic {}", to_base64(b"alice:p4ss"));
        let (username, password) = parse_basic_credentials(&header).unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "p4ss");
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let header = format!("Basic {}", to_base64(b"alice:pa:ss:word"));
        let (username, password) = parse_basic_credentials(&header).unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "pa:ss:word");
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        let encoded = to_base64(b"alice:p4ss");
        assert_eq!(
            parse_basic_credentials(&encoded),
            Err(BasicAuthError::MissingScheme)
        );
        assert_eq!(
            parse_basic_credentials(&format!("Bearer {}", encoded)),
            Err(BasicAuthError::MissingScheme)
        );
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        assert_eq!(
            parse_basic_credentials("Basic not-base64!!!"),
            Err(BasicAuthError::InvalidEncoding)
        );
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        let header = format!("Basic {}", to_base64(b"alicewithoutpassword"));
        assert_eq!(
            parse_basic_credentials(&header),
            Err(BasicAuthError::MalformedCredentials)
        );
    }

    #[test]
    fn test_strip_bearer() {
        assert_eq!(strip_bearer("Bearer abc.def"), "abc.def");
        assert_eq!(strip_bearer("abc.def"), "abc.def");
        // Only the exact prefix is stripped
        assert_eq!(strip_bearer("bearer abc"), "bearer abc");
    }
}
