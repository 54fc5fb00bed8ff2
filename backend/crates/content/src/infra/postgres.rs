//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::entities::{Answer, NewAnswer, NewQuestion, Question};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::ContentResult;
use kernel::db::UnitOfWork;
use kernel::id::{AnswerId, Id, QuestionId, UserId};

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UnitOfWork for PgContentRepository {
    async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

// ============================================================================
// Question Repository Implementation
// ============================================================================

impl QuestionRepository for PgContentRepository {
    async fn create(
        &self,
        conn: &mut PgConnection,
        question: &NewQuestion,
    ) -> ContentResult<Question> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO question (uuid, content, date, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, uuid, content, date, user_id
            "#,
        )
        .bind(question.uuid)
        .bind(&question.content)
        .bind(question.date)
        .bind(question.user_id.as_i64())
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into_question())
    }

    async fn find_by_uuid(
        &self,
        conn: &mut PgConnection,
        uuid: Uuid,
    ) -> ContentResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, uuid, content, date, user_id
            FROM question
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(|r| r.into_question()))
    }

    async fn update(&self, conn: &mut PgConnection, question: &Question) -> ContentResult<()> {
        sqlx::query("UPDATE question SET content = $2 WHERE id = $1")
            .bind(question.id.as_i64())
            .bind(&question.content)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection, id: QuestionId) -> ContentResult<()> {
        sqlx::query("DELETE FROM question WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn list_all(&self, conn: &mut PgConnection) -> ContentResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, uuid, content, date, user_id
            FROM question
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_question()).collect())
    }

    async fn list_by_user(
        &self,
        conn: &mut PgConnection,
        user_id: UserId,
    ) -> ContentResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, uuid, content, date, user_id
            FROM question
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_question()).collect())
    }
}

// ============================================================================
// Answer Repository Implementation
// ============================================================================

impl AnswerRepository for PgContentRepository {
    async fn create(&self, conn: &mut PgConnection, answer: &NewAnswer) -> ContentResult<Answer> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answer (uuid, ans, date, user_id, question_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, uuid, ans, date, user_id, question_id
            "#,
        )
        .bind(answer.uuid)
        .bind(&answer.content)
        .bind(answer.date)
        .bind(answer.user_id.as_i64())
        .bind(answer.question_id.as_i64())
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into_answer())
    }

    async fn find_by_uuid(
        &self,
        conn: &mut PgConnection,
        uuid: Uuid,
    ) -> ContentResult<Option<Answer>> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, uuid, ans, date, user_id, question_id
            FROM answer
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(|r| r.into_answer()))
    }

    async fn update(&self, conn: &mut PgConnection, answer: &Answer) -> ContentResult<()> {
        sqlx::query("UPDATE answer SET ans = $2 WHERE id = $1")
            .bind(answer.id.as_i64())
            .bind(&answer.content)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection, id: AnswerId) -> ContentResult<()> {
        sqlx::query("DELETE FROM answer WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn list_by_question(
        &self,
        conn: &mut PgConnection,
        question_id: QuestionId,
    ) -> ContentResult<Vec<Answer>> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, uuid, ans, date, user_id, question_id
            FROM answer
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id.as_i64())
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_answer()).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    uuid: Uuid,
    content: String,
    date: DateTime<Utc>,
    user_id: i64,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: Id::from_i64(self.id),
            uuid: self.uuid,
            content: self.content,
            date: self.date,
            user_id: Id::from_i64(self.user_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnswerRow {
    id: i64,
    uuid: Uuid,
    ans: String,
    date: DateTime<Utc>,
    user_id: i64,
    question_id: i64,
}

impl AnswerRow {
    fn into_answer(self) -> Answer {
        Answer {
            id: Id::from_i64(self.id),
            uuid: self.uuid,
            content: self.ans,
            date: self.date,
            user_id: Id::from_i64(self.user_id),
            question_id: Id::from_i64(self.question_id),
        }
    }
}
