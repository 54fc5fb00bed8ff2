//! Common ID Types
//!
//! Type-safe wrappers for internal database keys.
//!
//! Internal keys are BIGSERIAL values assigned by the database; they never
//! appear on the wire. Public identifiers are separate UUID columns owned by
//! the domain entities. Authorization compares these internal keys, not the
//! public identifiers.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_i64(7);
/// assert_eq!(id.as_i64(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

// Manual impls: derives would demand the same traits of the marker type,
// which is only ever a phantom.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Wrap a database-assigned key.
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying key.
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User ids
    pub struct User;

    /// Marker for Session ids
    pub struct Session;

    /// Marker for Question ids
    pub struct Question;

    /// Marker for Answer ids
    pub struct Answer;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type SessionId = Id<markers::Session>;
pub type QuestionId = Id<markers::Question>;
pub type AnswerId = Id<markers::Answer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_i64(1);
        let question_id: QuestionId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.into();
        let _q: i64 = question_id.into();
    }

    #[test]
    fn test_id_equality_on_value() {
        let a = UserId::from_i64(42);
        let b = UserId::from_i64(42);
        let c = UserId::from_i64(43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_id_display() {
        let id = AnswerId::from_i64(9);
        assert_eq!(id.to_string(), "9");
        assert_eq!(format!("{:?}", id), "Id(9)");
    }
}
