//! Get Answers For Question Use Case

use std::sync::Arc;

use platform::clock::Clock;
use uuid::Uuid;

use auth::SessionGuard;
use auth::domain::repository::{SessionRepository, UserRepository};

use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::{ContentError, ContentResult};
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to get the answers";
const QUESTION_NOT_FOUND: &str =
    "The question with entered uuid whose details are to be seen does not exist";

/// One row of the answer listing: the answer alongside the content of the
/// question it belongs to.
#[derive(Debug, Clone)]
pub struct AnswerDetails {
    pub answer_uuid: Uuid,
    pub question_content: String,
    pub answer_content: String,
}

/// Get answers for question use case
pub struct GetAnswersForQuestionUseCase<Q, A, R>
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

impl<Q, A, R> GetAnswersForQuestionUseCase<Q, A, R>
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

    /// List all answers posted to a question.
    pub async fn execute(
        &self,
        question_uuid: &str,
        authorization: &str,
    ) -> ContentResult<Vec<AnswerDetails>> {
        let uuid = Uuid::parse_str(question_uuid)
            .map_err(|_| ContentError::QuestionNotFound(QUESTION_NOT_FOUND))?;

        let guard = SessionGuard::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.clock.clone(),
        );

        let mut tx = self.question_repo.begin().await?;

        guard
            .require_active_session(&mut tx, authorization, SIGNED_OUT_MESSAGE)
            .await?;

        let question = self
            .question_repo
            .find_by_uuid(&mut tx, uuid)
            .await?
            .ok_or(ContentError::QuestionNotFound(QUESTION_NOT_FOUND))?;

        let answers = self.answer_repo.list_by_question(&mut tx, question.id).await?;
        tx.commit().await?;

        Ok(answers
            .into_iter()
            .map(|answer| AnswerDetails {
                answer_uuid: answer.uuid,
                question_content: question.content.clone(),
                answer_content: answer.content,
            })
            .collect())
    }
}
