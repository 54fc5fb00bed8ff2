//! Sign In Use Case
//!
//! Authenticates a user from a `Basic` Authorization header and creates a
//! session.

use std::sync::Arc;

use platform::clock::Clock;
use platform::header::parse_basic_credentials;
use platform::password::{self, ClearTextPassword};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::NewSession;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use kernel::db::UnitOfWork;

/// Sign in output
pub struct SignInOutput {
    /// Public identifier of the signed-in user
    pub user_uuid: Uuid,
    /// Bearer token for subsequent requests
    pub access_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository + UnitOfWork,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository + UnitOfWork,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        clock: Arc<dyn Clock>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            clock,
            config,
        }
    }

    /// Authenticate the `Authorization: Basic …` header and mint a session.
    pub async fn execute(&self, authorization: &str) -> AuthResult<SignInOutput> {
        let (user_name, password) = parse_basic_credentials(authorization)?;
        let password = ClearTextPassword::new(password);

        let mut tx = self.user_repo.begin().await?;

        let user = self
            .user_repo
            .find_by_user_name(&mut tx, &user_name)
            .await?
            .ok_or(AuthError::UnknownUserName)?;

        if !password::verify(&password, &user.salt, &user.password_hash) {
            return Err(AuthError::PasswordFailed);
        }

        let now = self.clock.now();
        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
        let expires_at = now + ttl;

        let access_token =
            self.config
                .token_provider()
                .issue(&user.uuid.to_string(), now, expires_at);

        let draft = NewSession::new(user.id, access_token, now, ttl);
        let session = self.session_repo.create(&mut tx, &draft).await?;
        tx.commit().await?;

        tracing::info!(
            user_uuid = %user.uuid,
            session_uuid = %session.uuid,
            expires_at = %session.expires_at,
            "User signed in"
        );

        Ok(SignInOutput {
            user_uuid: user.uuid,
            access_token: session.access_token,
        })
    }
}
