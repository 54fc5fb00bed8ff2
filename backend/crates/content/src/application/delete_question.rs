//! Delete Question Use Case
//!
//! Owner or admin may delete; answers cascade at the storage layer.

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::{AccessMode, SessionGuard, require_owner_or_admin};

use crate::domain::repository::QuestionRepository;
use crate::error::{ContentError, ContentResult};
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to delete a question";
const QUESTION_NOT_FOUND: &str = "Entered question uuid does not exist";
const DELETE_DENIED: &str = "Only the question owner or admin can delete the question";

/// Delete question use case
pub struct DeleteQuestionUseCase<Q, R>
where
    Q: QuestionRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    question_repo: Arc<Q>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> DeleteQuestionUseCase<Q, R>
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

    /// Delete a question; returns the deleted question's public uuid.
    pub async fn execute(&self, question_uuid: &str, authorization: &str) -> ContentResult<Uuid> {
        let uuid = Uuid::parse_str(question_uuid)
            .map_err(|_| ContentError::QuestionNotFound(QUESTION_NOT_FOUND))?;

        let guard = SessionGuard::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.clock.clone(),
        );

        let mut tx = self.question_repo.begin().await?;

        let actor = guard
            .require_active_session(&mut tx, authorization, SIGNED_OUT_MESSAGE)
            .await?;

        let question = self
            .question_repo
            .find_by_uuid(&mut tx, uuid)
            .await?
            .ok_or(ContentError::QuestionNotFound(QUESTION_NOT_FOUND))?;

        require_owner_or_admin(&actor.user, question.user_id, AccessMode::Delete, DELETE_DENIED)?;

        self.question_repo.delete(&mut tx, question.id).await?;
        tx.commit().await?;

        tracing::info!(
            question_uuid = %question.uuid,
            user_uuid = %actor.user.uuid,
            "Question deleted"
        );

        Ok(question.uuid)
    }
}
