//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure
//! layer. Every method takes the caller's transaction connection; lookups
//! return `None` for missing rows.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::domain::entities::{Answer, NewAnswer, NewQuestion, Question};
use crate::error::ContentResult;
use kernel::id::{AnswerId, QuestionId, UserId};

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Create a new question; returns the persisted row with its key.
    async fn create(&self, conn: &mut PgConnection, question: &NewQuestion)
    -> ContentResult<Question>;

    /// Find question by public identifier
    async fn find_by_uuid(
        &self,
        conn: &mut PgConnection,
        uuid: Uuid,
    ) -> ContentResult<Option<Question>>;

    /// Update a question's content
    async fn update(&self, conn: &mut PgConnection, question: &Question) -> ContentResult<()>;

    /// Delete a question; answers cascade at the storage layer
    async fn delete(&self, conn: &mut PgConnection, id: QuestionId) -> ContentResult<()>;

    /// List all questions
    async fn list_all(&self, conn: &mut PgConnection) -> ContentResult<Vec<Question>>;

    /// List questions authored by a user
    async fn list_by_user(
        &self,
        conn: &mut PgConnection,
        user_id: UserId,
    ) -> ContentResult<Vec<Question>>;
}

/// Answer repository trait
#[trait_variant::make(AnswerRepository: Send)]
pub trait LocalAnswerRepository {
    /// Create a new answer; returns the persisted row with its key.
    async fn create(&self, conn: &mut PgConnection, answer: &NewAnswer) -> ContentResult<Answer>;

    /// Find answer by public identifier
    async fn find_by_uuid(
        &self,
        conn: &mut PgConnection,
        uuid: Uuid,
    ) -> ContentResult<Option<Answer>>;

    /// Update an answer's content
    async fn update(&self, conn: &mut PgConnection, answer: &Answer) -> ContentResult<()>;

    /// Delete an answer
    async fn delete(&self, conn: &mut PgConnection, id: AnswerId) -> ContentResult<()>;

    /// List answers posted to a question
    async fn list_by_question(
        &self,
        conn: &mut PgConnection,
        question_id: QuestionId,
    ) -> ContentResult<Vec<Answer>>;
}
