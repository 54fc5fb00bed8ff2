//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::clock::Clock;

use crate::application::config::AuthConfig;
use crate::application::{SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    SigninResponse, SignoutResponse, SignupUserRequest, SignupUserResponse,
};
use kernel::db::UnitOfWork;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + UnitOfWork + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub clock: Arc<dyn Clock>,
}

/// Authorization header value, or empty when the header is missing or not
/// valid UTF-8. Downstream lookups treat the empty token as unknown.
pub(crate) fn authorization_header(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /user/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignupUserRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + UnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        first_name: req.first_name,
        last_name: req.last_name,
        user_name: req.user_name,
        email: req.email_address,
        password: req.password,
        country: req.country,
        about_me: req.about_me,
        dob: req.dob,
        contact_number: req.contact_number,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupUserResponse {
            id: output.user_uuid.to_string(),
            status: "USER SUCCESSFULLY REGISTERED".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /user/signin
///
/// Credentials arrive as `Authorization: Basic base64(username:password)`;
/// the minted bearer token is returned in the `access_token` response
/// header.
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + UnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.clock.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(authorization_header(&headers)).await?;

    Ok((
        StatusCode::OK,
        [("access_token", output.access_token)],
        Json(SigninResponse {
            id: output.user_uuid.to_string(),
            message: "SIGNED IN SUCCESSFULLY".to_string(),
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /user/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + UnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone(), state.repo.clone(), state.clock.clone());

    let output = use_case.execute(authorization_header(&headers)).await?;

    Ok((
        StatusCode::OK,
        Json(SignoutResponse {
            id: output.user_uuid.to_string(),
            message: "SIGNED OUT SUCCESSFULLY".to_string(),
        }),
    ))
}
