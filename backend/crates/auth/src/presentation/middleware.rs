//! Auth Middleware
//!
//! Guard for the admin company-management routes. The observed legacy
//! contract shipped these routes unguarded; this closes that gap with an
//! explicit role check.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session with the admin role
///
/// 401 without a usable session, 403 for an authenticated non-admin.
pub async fn require_admin<R>(
    State(state): State<AuthMiddlewareState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
        .ok_or_else(|| AuthError::SessionInvalid.into_response())?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = use_case
        .execute(&token)
        .await
        .map_err(|_| AuthError::SessionInvalid.into_response())?;

    if !session.role.is_admin() {
        return Err(AuthError::Forbidden.into_response());
    }

    Ok(next.run(req).await)
}
