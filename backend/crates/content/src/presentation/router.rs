//! Content Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use platform::clock::Clock;

use auth::PgAuthRepository;
use auth::domain::repository::{SessionRepository, UserRepository};

use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};
use kernel::db::UnitOfWork;

/// Create the content router with PostgreSQL repositories
///
/// Routes are absolute (`/question/…`, `/answer/…`); the API binary merges
/// this router at the top level.
pub fn content_router(
    repo: PgContentRepository,
    auth_repo: PgAuthRepository,
    clock: Arc<dyn Clock>,
) -> Router {
    content_router_generic(repo, auth_repo, clock)
}

/// Create a generic content router for any repository implementations
pub fn content_router_generic<C, R>(repo: C, auth_repo: R, clock: Arc<dyn Clock>) -> Router
where
    C: QuestionRepository + AnswerRepository + UnitOfWork + Clone + Send + Sync + 'static,
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
        auth_repo: Arc::new(auth_repo),
        clock,
    };

    Router::new()
        .route("/question/create", post(handlers::create_question::<C, R>))
        .route("/question/all", get(handlers::get_all_questions::<C, R>))
        .route(
            "/question/edit/{questionId}",
            put(handlers::edit_question::<C, R>),
        )
        .route(
            "/question/delete/{questionId}",
            delete(handlers::delete_question::<C, R>),
        )
        .route(
            "/question/all/{userId}",
            get(handlers::get_questions_by_user::<C, R>),
        )
        .route(
            "/question/{questionId}/answer/create",
            post(handlers::create_answer::<C, R>),
        )
        .route("/answer/edit/{answerId}", put(handlers::edit_answer::<C, R>))
        .route(
            "/answer/delete/{answerId}",
            delete(handlers::delete_answer::<C, R>),
        )
        .route(
            "/answer/all/{questionId}",
            get(handlers::get_answers_for_question::<C, R>),
        )
        .with_state(state)
}
