//! Get Questions By User Use Case

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::SessionGuard;
use auth::domain::repository::{SessionRepository, UserRepository};

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::{ContentError, ContentResult};
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str =
    "User is signed out.Sign in first to get all questions posted by a specific user";

/// Get questions by user use case
pub struct GetQuestionsByUserUseCase<Q, R>
where
    Q: QuestionRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    question_repo: Arc<Q>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> GetQuestionsByUserUseCase<Q, R>
where
    Q: QuestionRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    pub fn new(question_repo: Arc<Q>, auth_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            question_repo,
            auth_repo,
            clock,
        }
    }

    /// List questions authored by the user with the given public uuid.
    pub async fn execute(
        &self,
        user_uuid: &str,
        authorization: &str,
    ) -> ContentResult<Vec<Question>> {
        let uuid = Uuid::parse_str(user_uuid).map_err(|_| ContentError::UserNotFound)?;

        let guard = SessionGuard::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.clock.clone(),
        );

        let mut tx = self.question_repo.begin().await?;

        guard
            .require_active_session(&mut tx, authorization, SIGNED_OUT_MESSAGE)
            .await?;

        let owner = self
            .auth_repo
            .find_by_uuid(&mut tx, uuid)
            .await?
            .ok_or(ContentError::UserNotFound)?;

        let questions = self.question_repo.list_by_user(&mut tx, owner.id).await?;
        tx.commit().await?;

        Ok(questions)
    }
}
