//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Display strings are the client-facing messages of the legacy wire
//! contract (Vietnamese); log lines stay English. The contract folds
//! Conflict and NotFound into HTTP 400 — the frontend branches on the
//! `success` flag, not on the status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password missing from the request
    #[error("Thiếu username hoặc password")]
    MissingCredentials,

    /// Username failed validation
    #[error("Tên đăng nhập không hợp lệ")]
    InvalidUserName,

    /// Password failed validation
    #[error("Mật khẩu không hợp lệ")]
    InvalidPassword,

    /// Unknown role code on registration
    #[error("Vai trò không hợp lệ")]
    InvalidRole,

    /// Username already registered
    #[error("Tài khoản đã tồn tại")]
    UserNameTaken,

    /// No user with that username
    #[error("Tài khoản không tồn tại")]
    UserNotFound,

    /// Hash comparison failed
    #[error("Sai mật khẩu")]
    WrongPassword,

    /// Session missing, malformed, or expired
    #[error("Chưa đăng nhập")]
    SessionInvalid,

    /// Authenticated but not an admin
    #[error("Không có quyền truy cập")]
    Forbidden,

    /// Database error
    #[error("Lỗi server")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Lỗi server")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// Contract statuses: validation/conflict/not-found are all 400,
    /// credential and session failures are 401, the admin guard is 403,
    /// store failures are 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials
            | AuthError::InvalidUserName
            | AuthError::InvalidPassword
            | AuthError::InvalidRole
            | AuthError::UserNameTaken
            | AuthError::UserNotFound => StatusCode::BAD_REQUEST,
            AuthError::WrongPassword | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    ///
    /// Kinds keep their honest classification (Conflict, NotFound) even
    /// where the wire status is folded to 400 by [`Self::status_code`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::InvalidUserName
            | AuthError::InvalidPassword
            | AuthError::InvalidRole => ErrorKind::BadRequest,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::WrongPassword | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::WrongPassword => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Forbidden => {
                tracing::warn!("Admin route denied for non-admin session");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_status_codes() {
        // Conflict and NotFound fold into 400 per the wire contract.
        assert_eq!(
            AuthError::MissingCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::UserNameTaken.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::UserNotFound.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::WrongPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kinds_stay_honest() {
        assert_eq!(AuthError::UserNameTaken.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(AuthError::WrongPassword.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            AuthError::WrongPassword.to_string(),
            "Sai mật khẩu"
        );
        assert_eq!(
            AuthError::UserNameTaken.to_string(),
            "Tài khoản đã tồn tại"
        );
        assert_eq!(
            AuthError::UserNotFound.to_string(),
            "Tài khoản không tồn tại"
        );
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Thiếu username hoặc password"
        );
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = AuthError::Internal("connection pool exploded".to_string());
        assert_eq!(err.to_string(), "Lỗi server");
    }

    #[test]
    fn test_into_response_body_shape() {
        let response = AuthError::WrongPassword.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
