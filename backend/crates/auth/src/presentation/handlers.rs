//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthAck, LoginRequest, LoginResponse, RegisterRequest, SessionStatusResponse, UserIdentity,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<AuthAck>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = require_credentials(req.username, req.password)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(RegisterInput {
            username,
            password,
            role: req.role,
        })
        .await?;

    Ok(Json(AuthAck::ok("Đăng ký thành công")))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/user_login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = require_credentials(req.username, req.password)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case.execute(LoginInput { username, password }).await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            message: "Đăng nhập thành công".to_string(),
            user: UserIdentity::from(&output.user),
        }),
    ))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/check-auth and GET /api/check_login
///
/// One handler behind both legacy routes. Never fails: an absent, invalid,
/// or expired session is simply `loggedIn: false`.
pub async fn check_auth<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.execute(&token).await.ok(),
        None => None,
    };

    match session {
        Some(session) => Json(SessionStatusResponse {
            logged_in: true,
            user: Some(UserIdentity::from(&session)),
        }),
        None => Json(SessionStatusResponse {
            logged_in: false,
            user: None,
        }),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
///
/// Idempotent: succeeds and clears the cookie even without a session.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthAck::ok("Đăng xuất thành công")),
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Presence check for the credential pair; empty strings count as absent
/// (the legacy frontend sends `""` for untouched inputs).
fn require_credentials(
    username: Option<String>,
    password: Option<String>,
) -> AuthResult<(String, String)> {
    let username = username.filter(|s| !s.is_empty());
    let password = password.filter(|s| !s.is_empty());

    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(AuthError::MissingCredentials),
    }
}

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_credentials_present() {
        let (u, p) =
            require_credentials(Some("alice".to_string()), Some("pw1".to_string())).unwrap();
        assert_eq!(u, "alice");
        assert_eq!(p, "pw1");
    }

    #[test]
    fn test_require_credentials_missing() {
        assert!(matches!(
            require_credentials(None, Some("pw1".to_string())),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            require_credentials(Some("alice".to_string()), None),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            require_credentials(None, None),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn test_require_credentials_empty_as_missing() {
        assert!(matches!(
            require_credentials(Some(String::new()), Some("pw1".to_string())),
            Err(AuthError::MissingCredentials)
        ));
    }
}
