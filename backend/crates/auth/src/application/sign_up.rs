//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::{self, ClearTextPassword};
use uuid::Uuid;

use crate::domain::entity::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserRole;
use crate::error::{AuthError, AuthResult};
use kernel::db::UnitOfWork;

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: Option<String>,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    pub contact_number: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_uuid: Uuid,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository + UnitOfWork,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository + UnitOfWork,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let mut tx = self.user_repo.begin().await?;

        // Username is checked before email; the failure order is part of
        // the client contract.
        if self
            .user_repo
            .find_by_user_name(&mut tx, &input.user_name)
            .await?
            .is_some()
        {
            return Err(AuthError::UserNameTaken);
        }

        if self
            .user_repo
            .find_by_email(&mut tx, &input.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        // An account without a password could never sign in; reject it
        // instead of storing it.
        let password = input
            .password
            .map(ClearTextPassword::new)
            .filter(|p| !p.is_blank())
            .ok_or(AuthError::PasswordRequired)?;
        let credentials = password::encrypt(&password);

        let draft = NewUser {
            uuid: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            user_name: input.user_name,
            email: input.email,
            password_hash: credentials.hash,
            salt: credentials.salt,
            country: input.country,
            about_me: input.about_me,
            dob: input.dob,
            role: UserRole::NonAdmin,
            contact_number: input.contact_number,
        };

        let user = self.user_repo.create(&mut tx, &draft).await?;
        tx.commit().await?;

        tracing::info!(
            user_uuid = %user.uuid,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_uuid: user.uuid,
        })
    }
}
