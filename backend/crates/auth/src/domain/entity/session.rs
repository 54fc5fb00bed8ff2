//! Session Entity
//!
//! A server-side record of one authenticated login window. Created at
//! sign-in, terminally closed by sign-out (`logout_at`) or by reaching
//! `expires_at`; a closed session is never reopened.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};
use uuid::Uuid;

/// Persisted session
#[derive(Debug, Clone)]
pub struct Session {
    /// Internal database key
    pub id: SessionId,
    /// Public identifier
    pub uuid: Uuid,
    /// Opaque bearer token, unique across all sessions ever issued
    pub access_token: String,
    /// Owning user (internal key)
    pub user_id: UserId,
    pub login_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Set exactly once, at sign-out
    pub logout_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_logged_out(&self) -> bool {
        self.logout_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Active iff not signed out and not past expiry.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_logged_out() && !self.is_expired(now)
    }

    /// Close the session at `now`. Idempotent: a session that is already
    /// closed keeps its original `logout_at`.
    pub fn close(&mut self, now: DateTime<Utc>) {
        if self.logout_at.is_none() {
            self.logout_at = Some(now);
        }
    }
}

/// Session draft before the database assigns its key
#[derive(Debug, Clone)]
pub struct NewSession {
    pub uuid: Uuid,
    pub access_token: String,
    pub user_id: UserId,
    pub login_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewSession {
    /// Create a session draft starting at `login_at` and expiring after
    /// `ttl`.
    pub fn new(
        user_id: UserId,
        access_token: String,
        login_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            access_token,
            user_id,
            login_at,
            expires_at: login_at + ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kernel::id::Id;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn session(login_at: DateTime<Utc>) -> Session {
        Session {
            id: Id::from_i64(1),
            uuid: Uuid::new_v4(),
            access_token: "token".to_string(),
            user_id: Id::from_i64(2),
            login_at,
            expires_at: login_at + Duration::hours(8),
            logout_at: None,
        }
    }

    #[test]
    fn test_new_session_window() {
        let login_at = instant();
        let draft = NewSession::new(Id::from_i64(2), "t".to_string(), login_at, Duration::hours(8));
        assert_eq!(draft.expires_at, login_at + Duration::hours(8));
        assert!(draft.login_at <= draft.expires_at);
    }

    #[test]
    fn test_active_within_window() {
        let login_at = instant();
        let s = session(login_at);
        assert!(s.is_active(login_at));
        assert!(s.is_active(login_at + Duration::hours(8)));
        assert!(!s.is_active(login_at + Duration::hours(8) + Duration::seconds(1)));
    }

    #[test]
    fn test_logged_out_is_inactive() {
        let login_at = instant();
        let mut s = session(login_at);
        s.close(login_at + Duration::minutes(5));
        assert!(s.is_logged_out());
        assert!(!s.is_active(login_at + Duration::minutes(6)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let login_at = instant();
        let mut s = session(login_at);
        s.close(login_at + Duration::minutes(5));
        let first = s.logout_at;
        s.close(login_at + Duration::minutes(10));
        assert_eq!(s.logout_at, first);
    }
}
