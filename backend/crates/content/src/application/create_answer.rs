//! Create Answer Use Case

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::SessionGuard;
use auth::domain::repository::{SessionRepository, UserRepository};

use crate::domain::entities::NewAnswer;
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::{ContentError, ContentResult};
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to post an answer";
const QUESTION_NOT_FOUND: &str = "The question entered is invalid";

/// Create answer use case
pub struct CreateAnswerUseCase<Q, A, R>
where
    Q: QuestionRepository + UnitOfWork,
    A: AnswerRepository,
    R: UserRepository + SessionRepository,
{
    question_repo: Arc<Q>,
    answer_repo: Arc<A>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<Q, A, R> CreateAnswerUseCase<Q, A, R>
where
    Q: QuestionRepository + UnitOfWork,
    A: AnswerRepository,
    R: UserRepository + SessionRepository,
{
    pub fn new(
        question_repo: Arc<Q>,
        answer_repo: Arc<A>,
        auth_repo: Arc<R>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            question_repo,
            answer_repo,
            auth_repo,
            clock,
        }
    }

    /// Post an answer to a question; returns the new answer's public uuid.
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

        let question = self
            .question_repo
            .find_by_uuid(&mut tx, uuid)
            .await?
            .ok_or(ContentError::QuestionNotFound(QUESTION_NOT_FOUND))?;

        let draft = NewAnswer::new(content, actor.user.id, question.id, self.clock.now());
        let answer = self.answer_repo.create(&mut tx, &draft).await?;
        tx.commit().await?;

        tracing::info!(
            answer_uuid = %answer.uuid,
            question_uuid = %question.uuid,
            user_uuid = %actor.user.uuid,
            "Answer created"
        );

        Ok(answer.uuid)
    }
}
