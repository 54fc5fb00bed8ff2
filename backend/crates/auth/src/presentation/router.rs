//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::clock::Clock;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use kernel::db::UnitOfWork;

/// Create the user router with PostgreSQL repository
///
/// Mounted under `/user` by the API binary.
pub fn user_router(repo: PgAuthRepository, config: AuthConfig, clock: Arc<dyn Clock>) -> Router {
    user_router_generic(repo, config, clock)
}

/// Create a generic user router for any repository implementation
pub fn user_router_generic<R>(repo: R, config: AuthConfig, clock: Arc<dyn Clock>) -> Router
where
    R: UserRepository + SessionRepository + UnitOfWork + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        clock,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/signout", post(handlers::sign_out::<R>))
        .with_state(state)
}
