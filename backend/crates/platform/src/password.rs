//! Password Hashing and Verification
//!
//! Salted SHA-256 password handling:
//! - random per-user salt, stored next to the hash
//! - `hash = hex(sha256(salt || password))`, deterministic for a given salt
//! - constant-time comparison on verification
//! - zeroization of the clear-text password
//!
//! The salt/hash layout is part of the stored schema; existing rows must
//! keep verifying, so the digest input is exactly the base64 salt string
//! followed by the raw password bytes.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, random_bytes, sha256, to_base64, to_hex};

/// Salt length in raw bytes, before base64 encoding.
pub const SALT_LEN: usize = 16;

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped. Debug output is redacted and the type does
/// not implement `Clone`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Whether the password is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Salted credentials (safe to store)
// ============================================================================

/// A salt and the matching password hash, as persisted for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredentials {
    /// Base64-encoded random salt
    pub salt: String,
    /// Lowercase hex SHA-256 digest of `salt || password`
    pub hash: String,
}

/// Hash a password under a fresh random salt.
pub fn encrypt(password: &ClearTextPassword) -> PasswordCredentials {
    let salt = to_base64(&random_bytes(SALT_LEN));
    let hash = encrypt_with_salt(password, &salt);
    PasswordCredentials { salt, hash }
}

/// Deterministic half of [`encrypt`]: hash a password under a known salt.
///
/// Used on sign-in to recompute the digest for comparison.
pub fn encrypt_with_salt(password: &ClearTextPassword, salt: &str) -> String {
    let mut data = Vec::with_capacity(salt.len() + password.as_bytes().len());
    data.extend_from_slice(salt.as_bytes());
    data.extend_from_slice(password.as_bytes());
    to_hex(&sha256(&data))
}

/// Verify a password against stored credentials in constant time.
pub fn verify(password: &ClearTextPassword, salt: &str, expected_hash: &str) -> bool {
    let computed = encrypt_with_salt(password, salt);
    constant_time_eq(computed.as_bytes(), expected_hash.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_roundtrip() {
        let password = ClearTextPassword::new("correct horse battery staple".to_string());
        let creds = encrypt(&password);

        assert_eq!(encrypt_with_salt(&password, &creds.salt), creds.hash);
        assert!(verify(&password, &creds.salt, &creds.hash));
    }

    #[test]
    fn test_encrypt_salts_differ() {
        let password = ClearTextPassword::new("hunter2!".to_string());
        let a = encrypt(&password);
        let b = encrypt(&password);

        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let password = ClearTextPassword::new("swordfish".to_string());
        let creds = encrypt(&password);

        let wrong = ClearTextPassword::new("sword fish".to_string());
        assert!(!verify(&wrong, &creds.salt, &creds.hash));
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let password = ClearTextPassword::new("p".to_string());
        let hash = encrypt_with_salt(&password, "c2FsdA==");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));

        // Digest input is the literal salt string followed by the password.
        let expected = to_hex(&sha256(b"c2FsdA==p"));
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_is_blank() {
        assert!(ClearTextPassword::new(String::new()).is_blank());
        assert!(ClearTextPassword::new("   ".to_string()).is_blank());
        assert!(!ClearTextPassword::new("x".to_string()).is_blank());
    }

    #[test]
    fn test_debug_redacted() {
        let password = ClearTextPassword::new("top secret".to_string());
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("top secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
