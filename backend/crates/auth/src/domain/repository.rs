//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure
//! layer. Every method takes the caller's transaction connection so a whole
//! service operation commits or rolls back as one unit. Lookups return
//! `None` for missing rows; only storage failures are errors.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::domain::entity::{NewSession, NewUser, Session, User};
use crate::error::AuthResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; returns the persisted row with its assigned key.
    /// Unique violations on user_name/email surface as the matching
    /// signup-restricted errors.
    async fn create(&self, conn: &mut PgConnection, user: &NewUser) -> AuthResult<User>;

    /// Find user by internal key
    async fn find_by_id(&self, conn: &mut PgConnection, id: UserId) -> AuthResult<Option<User>>;

    /// Find user by public identifier
    async fn find_by_uuid(&self, conn: &mut PgConnection, uuid: Uuid) -> AuthResult<Option<User>>;

    /// Find user by login name
    async fn find_by_user_name(
        &self,
        conn: &mut PgConnection,
        user_name: &str,
    ) -> AuthResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, conn: &mut PgConnection, email: &str)
    -> AuthResult<Option<User>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session; returns the persisted row with its assigned key.
    async fn create(&self, conn: &mut PgConnection, session: &NewSession) -> AuthResult<Session>;

    /// Find a session by its access token
    async fn find_by_access_token(
        &self,
        conn: &mut PgConnection,
        access_token: &str,
    ) -> AuthResult<Option<Session>>;

    /// Update a session (sets logout_at)
    async fn update(&self, conn: &mut PgConnection, session: &Session) -> AuthResult<()>;
}
