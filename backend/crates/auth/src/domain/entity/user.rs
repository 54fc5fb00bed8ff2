//! User Entity
//!
//! Core user account entity. The internal `id` is the database key used for
//! ownership checks; the public `uuid` is what appears in URLs and response
//! bodies.

use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::value_object::UserRole;

/// Persisted user account
#[derive(Debug, Clone)]
pub struct User {
    /// Internal database key
    pub id: UserId,
    /// Public identifier
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique login name
    pub user_name: String,
    /// Unique email address
    pub email: String,
    /// Hex SHA-256 digest of `salt || password`
    pub password_hash: String,
    /// Base64 salt the hash was computed under
    pub salt: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    pub role: UserRole,
    pub contact_number: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// User draft before the database assigns its key
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    pub role: UserRole,
    pub contact_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn user(role: UserRole) -> User {
        User {
            id: Id::from_i64(1),
            uuid: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "0".repeat(64),
            salt: "c2FsdA==".to_string(),
            country: None,
            about_me: None,
            dob: None,
            role,
            contact_number: None,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(user(UserRole::Admin).is_admin());
        assert!(!user(UserRole::NonAdmin).is_admin());
    }
}
