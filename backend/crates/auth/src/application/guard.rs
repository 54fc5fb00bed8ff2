//! Session and Ownership Guards
//!
//! Every protected operation starts by passing its Authorization header
//! through [`SessionGuard::require_active_session`]; mutations on owned
//! content additionally pass [`require_owner_or_admin`]. Guards run on the
//! caller's transaction connection so the authorization read and the
//! guarded mutation commit together.

use std::sync::Arc;

use platform::clock::Clock;
use platform::header::strip_bearer;
use sqlx::PgConnection;

use crate::domain::entity::{Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// What the caller intends to do with an owned resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Owner only; admins get no special authority
    Edit,
    /// Owner or admin
    Delete,
}

/// An active session together with its resolved user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub session: Session,
    pub user: User,
}

/// Validates bearer tokens against the session store.
pub struct SessionGuard<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<U, S> SessionGuard<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            session_repo,
            clock,
        }
    }

    /// Require an active session behind the Authorization header.
    ///
    /// `signed_out_message` names the operation the caller attempted; it
    /// becomes the body of the session-ended failure. A session past its
    /// expiry is rejected the same way as a signed-out one.
    pub async fn require_active_session(
        &self,
        conn: &mut PgConnection,
        authorization: &str,
        signed_out_message: &str,
    ) -> AuthResult<AuthenticatedUser> {
        let token = strip_bearer(authorization);

        let session = self
            .session_repo
            .find_by_access_token(conn, token)
            .await?
            .ok_or(AuthError::SessionMissing)?;

        if session.is_logged_out() || session.is_expired(self.clock.now()) {
            return Err(AuthError::SessionEnded(signed_out_message.to_string()));
        }

        let user = self
            .user_repo
            .find_by_id(conn, session.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Session user missing".to_string()))?;

        Ok(AuthenticatedUser { session, user })
    }
}

/// Require that `actor` holds authority over a resource owned by
/// `owner_id`.
///
/// Identity is compared on internal keys, never on public uuids. Editing
/// is owner-only; deletion also admits admins.
pub fn require_owner_or_admin(
    actor: &User,
    owner_id: UserId,
    mode: AccessMode,
    denied_message: &'static str,
) -> AuthResult<()> {
    let permitted = match mode {
        AccessMode::Edit => actor.id == owner_id,
        AccessMode::Delete => actor.id == owner_id || actor.is_admin(),
    };

    if permitted {
        Ok(())
    } else {
        Err(AuthError::Forbidden(denied_message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::UserRole;
    use kernel::id::Id;
    use uuid::Uuid;

    fn user(id: i64, role: UserRole) -> User {
        User {
            id: Id::from_i64(id),
            uuid: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            user_name: format!("user{id}"),
            email: format!("user{id}@example.com"),
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
    fn test_owner_may_edit_and_delete() {
        let owner = user(1, UserRole::NonAdmin);
        assert!(require_owner_or_admin(&owner, Id::from_i64(1), AccessMode::Edit, "no").is_ok());
        assert!(require_owner_or_admin(&owner, Id::from_i64(1), AccessMode::Delete, "no").is_ok());
    }

    #[test]
    fn test_non_owner_is_denied() {
        let stranger = user(2, UserRole::NonAdmin);
        let err =
            require_owner_or_admin(&stranger, Id::from_i64(1), AccessMode::Edit, "edit denied")
                .unwrap_err();
        assert!(matches!(err, AuthError::Forbidden("edit denied")));

        let err =
            require_owner_or_admin(&stranger, Id::from_i64(1), AccessMode::Delete, "delete denied")
                .unwrap_err();
        assert!(matches!(err, AuthError::Forbidden("delete denied")));
    }

    #[test]
    fn test_admin_may_delete_but_not_edit() {
        let admin = user(3, UserRole::Admin);
        assert!(require_owner_or_admin(&admin, Id::from_i64(1), AccessMode::Delete, "no").is_ok());

        // Editing stays owner-only even for admins.
        let err = require_owner_or_admin(&admin, Id::from_i64(1), AccessMode::Edit, "owner only")
            .unwrap_err();
        assert!(matches!(err, AuthError::Forbidden("owner only")));
    }
}
