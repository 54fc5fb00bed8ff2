//! Get All Questions Use Case

use std::sync::Arc;

use platform::clock::Clock;

use auth::SessionGuard;
use auth::domain::repository::{SessionRepository, UserRepository};

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::ContentResult;
use kernel::db::UnitOfWork;

const SIGNED_OUT_MESSAGE: &str = "User is signed out.Sign in first to get all questions";

/// Get all questions use case
pub struct GetAllQuestionsUseCase<Q, R>
where
    Q: QuestionRepository + UnitOfWork,
    R: UserRepository + SessionRepository,
{
    question_repo: Arc<Q>,
    auth_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> GetAllQuestionsUseCase<Q, R>
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

    pub async fn execute(&self, authorization: &str) -> ContentResult<Vec<Question>> {
        let guard = SessionGuard::new(
            self.auth_repo.clone(),
            self.auth_repo.clone(),
            self.clock.clone(),
        );

        let mut tx = self.question_repo.begin().await?;

        guard
            .require_active_session(&mut tx, authorization, SIGNED_OUT_MESSAGE)
            .await?;

        let questions = self.question_repo.list_all(&mut tx).await?;
        tx.commit().await?;

        Ok(questions)
    }
}
