use serde::{Deserialize, Serialize};
use std::fmt;

/// Role granted to a user account.
///
/// Closed set of two wire literals. Every account starts as `nonadmin`;
/// the admin role is only relevant to delete authority over content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    NonAdmin,
}

impl UserRole {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::NonAdmin => "nonadmin",
        }
    }

    /// Parse a stored role literal. Anything outside the closed set is
    /// rejected; the repository treats that as corrupt data.
    #[inline]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "nonadmin" => Some(UserRole::NonAdmin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("nonadmin"), Some(UserRole::NonAdmin));
        assert_eq!(UserRole::parse(UserRole::Admin.as_str()), Some(UserRole::Admin));
    }

    #[test]
    fn test_parse_rejects_unknown_literals() {
        assert_eq!(UserRole::parse("superadmin"), None);
        assert_eq!(UserRole::parse("Admin"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn test_default_is_nonadmin() {
        assert_eq!(UserRole::default(), UserRole::NonAdmin);
        assert!(!UserRole::default().is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::NonAdmin.to_string(), "nonadmin");
    }
}
