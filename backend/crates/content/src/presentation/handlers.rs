//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::clock::Clock;

use auth::domain::repository::{SessionRepository, UserRepository};

use crate::application::{
    CreateAnswerUseCase, CreateQuestionUseCase, DeleteAnswerUseCase, DeleteQuestionUseCase,
    EditAnswerUseCase, EditQuestionUseCase, GetAllQuestionsUseCase, GetAnswersForQuestionUseCase,
    GetQuestionsByUserUseCase,
};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::ContentResult;
use crate::presentation::dto::{
    AnswerDetailsResponse, AnswerEditRequest, AnswerRequest, AnswerResponse,
    QuestionDetailsResponse, QuestionEditRequest, QuestionRequest, QuestionResponse,
};
use kernel::db::UnitOfWork;

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<C, R>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<C>,
    pub auth_repo: Arc<R>,
    pub clock: Arc<dyn Clock>,
}

/// Authorization header value, or empty when the header is missing or not
/// valid UTF-8. An empty token never matches a stored session.
fn authorization_header(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

// ============================================================================
// Questions
// ============================================================================

/// POST /question/create
pub async fn create_question<C, R>(
    State(state): State<ContentAppState<C, R>>,
    headers: HeaderMap,
    Json(req): Json<QuestionRequest>,
) -> ContentResult<impl IntoResponse>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateQuestionUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let uuid = use_case
        .execute(req.content, authorization_header(&headers))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse {
            id: uuid.to_string(),
            status: "QUESTION CREATED".to_string(),
        }),
    ))
}

/// GET /question/all
pub async fn get_all_questions<C, R>(
    State(state): State<ContentAppState<C, R>>,
    headers: HeaderMap,
) -> ContentResult<Json<Vec<QuestionDetailsResponse>>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetAllQuestionsUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let questions = use_case.execute(authorization_header(&headers)).await?;

    Ok(Json(
        questions
            .into_iter()
            .map(|q| QuestionDetailsResponse {
                id: q.uuid.to_string(),
                content: q.content,
            })
            .collect(),
    ))
}

/// PUT /question/edit/{questionId}
pub async fn edit_question<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(question_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<QuestionEditRequest>,
) -> ContentResult<Json<QuestionResponse>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = EditQuestionUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let uuid = use_case
        .execute(&question_id, req.content, authorization_header(&headers))
        .await?;

    Ok(Json(QuestionResponse {
        id: uuid.to_string(),
        status: "QUESTION EDITED".to_string(),
    }))
}

/// DELETE /question/delete/{questionId}
pub async fn delete_question<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(question_id): Path<String>,
    headers: HeaderMap,
) -> ContentResult<Json<QuestionResponse>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteQuestionUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let uuid = use_case
        .execute(&question_id, authorization_header(&headers))
        .await?;

    Ok(Json(QuestionResponse {
        id: uuid.to_string(),
        status: "QUESTION DELETED".to_string(),
    }))
}

/// GET /question/all/{userId}
pub async fn get_questions_by_user<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> ContentResult<Json<Vec<QuestionDetailsResponse>>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetQuestionsByUserUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let questions = use_case
        .execute(&user_id, authorization_header(&headers))
        .await?;

    Ok(Json(
        questions
            .into_iter()
            .map(|q| QuestionDetailsResponse {
                id: q.uuid.to_string(),
                content: q.content,
            })
            .collect(),
    ))
}

// ============================================================================
// Answers
// ============================================================================

/// POST /question/{questionId}/answer/create
pub async fn create_answer<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(question_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<AnswerRequest>,
) -> ContentResult<impl IntoResponse>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateAnswerUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let uuid = use_case
        .execute(&question_id, req.answer, authorization_header(&headers))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AnswerResponse {
            id: uuid.to_string(),
            status: "ANSWER CREATED".to_string(),
        }),
    ))
}

/// PUT /answer/edit/{answerId}
pub async fn edit_answer<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(answer_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<AnswerEditRequest>,
) -> ContentResult<Json<AnswerResponse>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = EditAnswerUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let uuid = use_case
        .execute(&answer_id, req.content, authorization_header(&headers))
        .await?;

    Ok(Json(AnswerResponse {
        id: uuid.to_string(),
        status: "ANSWER EDITED".to_string(),
    }))
}

/// DELETE /answer/delete/{answerId}
pub async fn delete_answer<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(answer_id): Path<String>,
    headers: HeaderMap,
) -> ContentResult<Json<AnswerResponse>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAnswerUseCase::new(
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let uuid = use_case
        .execute(&answer_id, authorization_header(&headers))
        .await?;

    Ok(Json(AnswerResponse {
        id: uuid.to_string(),
        status: "ANSWER DELETED".to_string(),
    }))
}

/// GET /answer/all/{questionId}
pub async fn get_answers_for_question<C, R>(
    State(state): State<ContentAppState<C, R>>,
    Path(question_id): Path<String>,
    headers: HeaderMap,
) -> ContentResult<Json<Vec<AnswerDetailsResponse>>>
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetAnswersForQuestionUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.auth_repo.clone(),
        state.clock.clone(),
    );

    let details = use_case
        .execute(&question_id, authorization_header(&headers))
        .await?;

    Ok(Json(
        details
            .into_iter()
            .map(|d| AnswerDetailsResponse {
                id: d.answer_uuid.to_string(),
                question_content: d.question_content,
                answer_content: d.answer_content,
            })
            .collect(),
    ))
}
