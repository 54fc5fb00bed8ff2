//! Access Token Provider
//!
//! Issues the opaque bearer tokens handed out at sign-in. A token is
//! `base64url(payload).base64url(signature)` where the payload carries the
//! user's public uuid and the issue/expiry instants, and the signature is
//! HMAC-SHA256 under a process-wide secret.
//!
//! Callers treat the token as an opaque string: authentication decisions go
//! through the session store, never through token introspection. [`verify`]
//! exists for diagnostics and tests.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::{from_base64_url, to_base64_url};

type HmacSha256 = Hmac<Sha256>;

/// Claims encoded in an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_uuid: String,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
}

/// Signs and verifies access tokens under a fixed secret.
#[derive(Clone)]
pub struct AccessTokenProvider {
    secret: [u8; 32],
}

impl AccessTokenProvider {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a signed token for a user and validity window.
    pub fn issue(
        &self,
        user_uuid: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> String {
        let payload = format!(
            "{}:{}:{}",
            user_uuid,
            issued_at.timestamp_millis(),
            expires_at.timestamp_millis()
        );
        let payload_b64 = to_base64_url(payload.as_bytes());

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload_b64, to_base64_url(&signature))
    }

    /// Verify a token's signature and decode its claims.
    ///
    /// Returns `None` for any malformed or tampered token.
    pub fn verify(&self, token: &str) -> Option<TokenClaims> {
        let (payload_b64, signature_b64) = token.split_once('.')?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());

        let signature = from_base64_url(signature_b64).ok()?;
        mac.verify_slice(&signature).ok()?;

        let payload = String::from_utf8(from_base64_url(payload_b64).ok()?).ok()?;
        let mut parts = payload.splitn(3, ':');
        let user_uuid = parts.next()?.to_string();
        let issued_at_ms = parts.next()?.parse().ok()?;
        let expires_at_ms = parts.next()?.parse().ok()?;

        Some(TokenClaims {
            user_uuid,
            issued_at_ms,
            expires_at_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn provider() -> AccessTokenProvider {
        AccessTokenProvider::new([7u8; 32])
    }

    fn instants() -> (DateTime<Utc>, DateTime<Utc>) {
        let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let expires = issued + chrono::Duration::hours(8);
        (issued, expires)
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let (issued, expires) = instants();
        let token = provider().issue("a1b2c3", issued, expires);

        let claims = provider().verify(&token).unwrap();
        assert_eq!(claims.user_uuid, "a1b2c3");
        assert_eq!(claims.issued_at_ms, issued.timestamp_millis());
        assert_eq!(claims.expires_at_ms, expires.timestamp_millis());
    }

    #[test]
    fn test_issue_is_deterministic_per_key_and_payload() {
        let (issued, expires) = instants();
        let a = provider().issue("a1b2c3", issued, expires);
        let b = provider().issue("a1b2c3", issued, expires);
        assert_eq!(a, b);

        let c = provider().issue("a1b2c3", issued + chrono::Duration::milliseconds(1), expires);
        assert_ne!(a, c);
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let (issued, expires) = instants();
        let token = provider().issue("a1b2c3", issued, expires);

        let (payload, signature) = token.split_once('.').unwrap();
        let forged_payload = to_base64_url(b"intruder:0:9999999999999");
        assert!(provider().verify(&format!("{}.{}", forged_payload, signature)).is_none());

        let mut flipped = payload.to_string();
        flipped.push('.');
        flipped.push_str(&signature.chars().rev().collect::<String>());
        assert!(provider().verify(&flipped).is_none());
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let (issued, expires) = instants();
        let token = provider().issue("a1b2c3", issued, expires);

        let other = AccessTokenProvider::new([8u8; 32]);
        assert!(other.verify(&token).is_none());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(provider().verify("").is_none());
        assert!(provider().verify("no-dot-here").is_none());
        assert!(provider().verify("a.b.c").is_none());
        assert!(provider().verify("!!!.###").is_none());
    }
}
