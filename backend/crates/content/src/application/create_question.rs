//! Create Question Use Case

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::SessionGuard;
use auth::domain::repository::{SessionRepository, UserRepository};

use crate::domain::entities::NewQuestion;
use crate::domain::repository::QuestionRepository;
use crate::error::ContentResult;
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to post a question";

/// Create question use case
pub struct CreateQuestionUseCase<Q, R>
where
    Q: QuestionRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    question_repo: Arc<Q>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> CreateQuestionUseCase<Q, R>
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

    /// Post a question as the session user; returns the new public uuid.
    pub async fn execute(&self, content: String, authorization: &str) -> ContentResult<Uuid> {
        let guard = SessionGuard::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.clock.clone(),
        );

        let mut tx = self.question_repo.begin().await?;

        let actor = guard
            .require_active_session(&mut tx, authorization, SIGNED_OUT_MESSAGE)
            .await?;

        let draft = NewQuestion::new(content, actor.user.id, self.clock.now());
        let question = self.question_repo.create(&mut tx, &draft).await?;
        tx.commit().await?;

        tracing::info!(
            question_uuid = %question.uuid,
            user_uuid = %actor.user.uuid,
            "Question created"
        );

        Ok(question.uuid)
    }
}
