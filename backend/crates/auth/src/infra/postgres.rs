//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::entity::{NewSession, NewUser, Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::UserRole;
use crate::error::{AuthError, AuthResult};
use kernel::db::UnitOfWork;
use kernel::id::{Id, UserId};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UnitOfWork for PgAuthRepository {
    async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, conn: &mut PgConnection, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                uuid,
                first_name,
                last_name,
                user_name,
                email,
                password_hash,
                salt,
                country,
                about_me,
                dob,
                role,
                contact_number
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, uuid, first_name, last_name, user_name, email,
                      password_hash, salt, country, about_me, dob, role, contact_number
            "#,
        )
        .bind(user.uuid)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.user_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.salt)
        .bind(&user.country)
        .bind(&user.about_me)
        .bind(&user.dob)
        .bind(user.role.as_str())
        .bind(&user.contact_number)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_user_unique_violation)?;

        row.into_user()
    }

    async fn find_by_id(&self, conn: &mut PgConnection, id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                uuid,
                first_name,
                last_name,
                user_name,
                email,
                password_hash,
                salt,
                country,
                about_me,
                dob,
                role,
                contact_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *conn)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_uuid(&self, conn: &mut PgConnection, uuid: Uuid) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                uuid,
                first_name,
                last_name,
                user_name,
                email,
                password_hash,
                salt,
                country,
                about_me,
                dob,
                role,
                contact_number
            FROM users
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&mut *conn)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(
        &self,
        conn: &mut PgConnection,
        user_name: &str,
    ) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                uuid,
                first_name,
                last_name,
                user_name,
                email,
                password_hash,
                salt,
                country,
                about_me,
                dob,
                role,
                contact_number
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&mut *conn)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(
        &self,
        conn: &mut PgConnection,
        email: &str,
    ) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                uuid,
                first_name,
                last_name,
                user_name,
                email,
                password_hash,
                salt,
                country,
                about_me,
                dob,
                role,
                contact_number
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

/// Concurrent signups racing on the same username or email lose at the
/// unique index; translate the loss into the same signup-restricted errors
/// as the pre-insert lookups.
fn map_user_unique_violation(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some("users_user_name_key") => return AuthError::UserNameTaken,
                Some("users_email_key") => return AuthError::EmailTaken,
                _ => {}
            }
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, conn: &mut PgConnection, session: &NewSession) -> AuthResult<Session> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO user_auth (
                uuid,
                access_token,
                user_id,
                login_at,
                expires_at,
                logout_at
            ) VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING id, uuid, access_token, user_id, login_at, expires_at, logout_at
            "#,
        )
        .bind(session.uuid)
        .bind(&session.access_token)
        .bind(session.user_id.as_i64())
        .bind(session.login_at)
        .bind(session.expires_at)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into_session())
    }

    async fn find_by_access_token(
        &self,
        conn: &mut PgConnection,
        access_token: &str,
    ) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, uuid, access_token, user_id, login_at, expires_at, logout_at
            FROM user_auth
            WHERE access_token = $1
            "#,
        )
        .bind(access_token)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn update(&self, conn: &mut PgConnection, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE user_auth SET
                expires_at = $2,
                logout_at = $3
            WHERE id = $1
            "#,
        )
        .bind(session.id.as_i64())
        .bind(session.expires_at)
        .bind(session.logout_at)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    uuid: Uuid,
    first_name: String,
    last_name: String,
    user_name: String,
    email: String,
    password_hash: String,
    salt: String,
    country: Option<String>,
    about_me: Option<String>,
    dob: Option<String>,
    role: String,
    contact_number: Option<String>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let role = UserRole::parse(&self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid user role: {}", self.role)))?;

        Ok(User {
            id: Id::from_i64(self.id),
            uuid: self.uuid,
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
            email: self.email,
            password_hash: self.password_hash,
            salt: self.salt,
            country: self.country,
            about_me: self.about_me,
            dob: self.dob,
            role,
            contact_number: self.contact_number,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    uuid: Uuid,
    access_token: String,
    user_id: i64,
    login_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    logout_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: Id::from_i64(self.id),
            uuid: self.uuid,
            access_token: self.access_token,
            user_id: Id::from_i64(self.user_id),
            login_at: self.login_at,
            expires_at: self.expires_at,
            logout_at: self.logout_at,
        }
    }
}
