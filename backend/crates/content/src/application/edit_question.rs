//! Edit Question Use Case
//!
//! Content-only edit, restricted to the question owner.

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::{AccessMode, SessionGuard, require_owner_or_admin};

use crate::domain::repository::QuestionRepository;
use crate::error::{ContentError, ContentResult};
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to edit the question";
const QUESTION_NOT_FOUND: &str = "Entered question uuid does not exist";
const EDIT_DENIED: &str = "Only the question owner can edit the question";

/// Edit question use case
pub struct EditQuestionUseCase<Q, R>
where
    Q: QuestionRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    question_repo: Arc<Q>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> EditQuestionUseCase<Q, R>
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

    /// Replace the content of an owned question; returns its public uuid.
    pub async fn execute(
        &self,
        question_uuid: &str,
        content: String,
        authorization: &str,
    ) -> ContentResult<Uuid> {
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

        let mut question = self
            .question_repo
            .find_by_uuid(&mut tx, uuid)
            .await?
            .ok_or(ContentError::QuestionNotFound(QUESTION_NOT_FOUND))?;

        require_owner_or_admin(&actor.user, question.user_id, AccessMode::Edit, EDIT_DENIED)?;

        question.content = content;
        self.question_repo.update(&mut tx, &question).await?;
        tx.commit().await?;

        tracing::info!(
            question_uuid = %question.uuid,
            user_uuid = %actor.user.uuid,
            "Question edited"
        );

        Ok(question.uuid)
    }
}
