//! Domain Entities
//!
//! Questions and answers reference their owners by internal key; the
//! public `uuid` is what clients address them by. Cross-entity references
//! are identifiers resolved through repositories, never embedded object
//! graphs.

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId, UserId};
use uuid::Uuid;

/// Question entity
#[derive(Debug, Clone)]
pub struct Question {
    /// Internal database key
    pub id: QuestionId,
    /// Public identifier
    pub uuid: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    /// Authoring user (internal key)
    pub user_id: UserId,
}

/// Question draft before the database assigns its key
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub uuid: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    pub user_id: UserId,
}

impl NewQuestion {
    pub fn new(content: String, user_id: UserId, date: DateTime<Utc>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            content,
            date,
            user_id,
        }
    }
}

/// Answer entity
#[derive(Debug, Clone)]
pub struct Answer {
    /// Internal database key
    pub id: AnswerId,
    /// Public identifier
    pub uuid: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    /// Authoring user (internal key)
    pub user_id: UserId,
    /// Answered question (internal key)
    pub question_id: QuestionId,
}

/// Answer draft before the database assigns its key
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub uuid: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    pub user_id: UserId,
    pub question_id: QuestionId,
}

impl NewAnswer {
    pub fn new(
        content: String,
        user_id: UserId,
        question_id: QuestionId,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            content,
            date,
            user_id,
            question_id,
        }
    }
}
