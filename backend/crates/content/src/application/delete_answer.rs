//! Delete Answer Use Case
//!
//! Owner or admin may delete.

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::{AccessMode, SessionGuard, require_owner_or_admin};

use crate::domain::repository::AnswerRepository;
use crate::error::{ContentError, ContentResult};
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to delete an answer";
const DELETE_DENIED: &str = "Only the answer owner or admin can delete the answer";

/// Delete answer use case
pub struct DeleteAnswerUseCase<A, R>
where
    A: AnswerRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    answer_repo: Arc<A>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<A, R> DeleteAnswerUseCase<A, R>
where
    A: AnswerRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    pub fn new(answer_repo: Arc<A>, auth_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            answer_repo,
            auth_repo,
            clock,
        }
    }

    /// Delete an answer; returns the deleted answer's public uuid.
    pub async fn execute(&self, answer_uuid: &str, authorization: &str) -> ContentResult<Uuid> {
        let uuid = Uuid::parse_str(answer_uuid).map_err(|_| ContentError::AnswerNotFound)?;

        let guard = SessionGuard::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.clock.clone(),
        );

        let mut tx = self.answer_repo.begin().await?;

        let actor = guard
            .require_active_session(&mut tx, authorization, SIGNED_OUT_MESSAGE)
            .await?;

        let answer = self
            .answer_repo
            .find_by_uuid(&mut tx, uuid)
            .await?
            .ok_or(ContentError::AnswerNotFound)?;

        require_owner_or_admin(&actor.user, answer.user_id, AccessMode::Delete, DELETE_DENIED)?;

        self.answer_repo.delete(&mut tx, answer.id).await?;
        tx.commit().await?;

        tracing::info!(
            answer_uuid = %answer.uuid,
            user_uuid = %actor.user.uuid,
            "Answer deleted"
        );

        Ok(answer.uuid)
    }
}
