//! Sign Out Use Case
//!
//! Terminally closes a user session.

use std::sync::Arc;

use platform::clock::Clock;
use platform::header::strip_bearer;
use uuid::Uuid;

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use kernel::db::UnitOfWork;

/// Sign out output
pub struct SignOutOutput {
    /// Public identifier of the signed-out user
    pub user_uuid: Uuid,
}

/// Sign out use case
pub struct SignOutUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository + UnitOfWork,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<U, S> SignOutUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository + UnitOfWork,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            session_repo,
            clock,
        }
    }

    /// Close the session behind the bearer token.
    ///
    /// A token that was never issued, or whose session is already closed,
    /// fails the same way; `logout_at` is written at most once.
    pub async fn execute(&self, authorization: &str) -> AuthResult<SignOutOutput> {
        let token = strip_bearer(authorization);

        let mut tx = self.session_repo.begin().await?;

        let mut session = self
            .session_repo
            .find_by_access_token(&mut tx, token)
            .await?
            .ok_or(AuthError::NotSignedIn)?;

        if session.is_logged_out() {
            return Err(AuthError::NotSignedIn);
        }

        session.close(self.clock.now());
        self.session_repo.update(&mut tx, &session).await?;

        let user = self
            .user_repo
            .find_by_id(&mut tx, session.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Session user missing".to_string()))?;

        tx.commit().await?;

        tracing::info!(
            user_uuid = %user.uuid,
            session_uuid = %session.uuid,
            "User signed out"
        );

        Ok(SignOutOutput {
            user_uuid: user.uuid,
        })
    }
}
