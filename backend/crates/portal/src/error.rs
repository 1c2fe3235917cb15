//! Portal Error Types
//!
//! This module provides portal-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! The legacy contract fixes a distinct 500 message per route, so store
//! failures are wrapped into operation-specific variants at the repository
//! layer instead of a single blanket `Database` conversion.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Portal-specific result type alias
pub type PortalResult<T> = Result<T, PortalError>;

/// Portal-specific error variants
#[derive(Debug, Error)]
pub enum PortalError {
    /// user_id or job_id missing from the apply request
    #[error("Thiếu user_id hoặc job_id")]
    MissingApplicationIds,

    /// An application for this (user, job) pair already exists
    #[error("Bạn đã ứng tuyển công ty này rồi!")]
    AlreadyApplied,

    /// Listing query failed (jobs, admin companies)
    #[error("Lỗi database")]
    Database(#[source] sqlx::Error),

    /// Application submission failed
    #[error("Lỗi server")]
    SubmitFailed(#[source] sqlx::Error),

    /// Per-user application listing failed
    #[error("Lỗi server khi lấy danh sách ứng tuyển")]
    ApplicationListFailed(#[source] sqlx::Error),

    /// Admin company insert failed
    #[error("Insert failed")]
    InsertFailed(#[source] sqlx::Error),

    /// Admin company update failed
    #[error("Update failed")]
    UpdateFailed(#[source] sqlx::Error),

    /// Admin company delete failed
    #[error("Delete failed")]
    DeleteFailed(#[source] sqlx::Error),
}

impl PortalError {
    /// Get the HTTP status code for this error
    ///
    /// The duplicate-application conflict is 400 per the wire contract.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortalError::MissingApplicationIds | PortalError::AlreadyApplied => {
                StatusCode::BAD_REQUEST
            }
            PortalError::Database(_)
            | PortalError::SubmitFailed(_)
            | PortalError::ApplicationListFailed(_)
            | PortalError::InsertFailed(_)
            | PortalError::UpdateFailed(_)
            | PortalError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortalError::MissingApplicationIds => ErrorKind::BadRequest,
            PortalError::AlreadyApplied => ErrorKind::Conflict,
            PortalError::Database(_)
            | PortalError::SubmitFailed(_)
            | PortalError::ApplicationListFailed(_)
            | PortalError::InsertFailed(_)
            | PortalError::UpdateFailed(_)
            | PortalError::DeleteFailed(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PortalError::Database(e)
            | PortalError::SubmitFailed(e)
            | PortalError::ApplicationListFailed(e)
            | PortalError::InsertFailed(e)
            | PortalError::UpdateFailed(e)
            | PortalError::DeleteFailed(e) => {
                tracing::error!(error = %e, "Portal database error");
            }
            _ => {
                tracing::debug!(error = %self, "Portal error");
            }
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_contract_status_codes() {
        assert_eq!(
            PortalError::MissingApplicationIds.status_code(),
            StatusCode::BAD_REQUEST
        );
        // Conflict folds into 400 per the wire contract.
        assert_eq!(
            PortalError::AlreadyApplied.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PortalError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PortalError::InsertFailed(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(PortalError::AlreadyApplied.kind(), ErrorKind::Conflict);
        assert_eq!(
            PortalError::MissingApplicationIds.kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_per_operation_messages() {
        assert_eq!(
            PortalError::MissingApplicationIds.to_string(),
            "Thiếu user_id hoặc job_id"
        );
        assert_eq!(
            PortalError::AlreadyApplied.to_string(),
            "Bạn đã ứng tuyển công ty này rồi!"
        );
        assert_eq!(
            PortalError::Database(sqlx::Error::RowNotFound).to_string(),
            "Lỗi database"
        );
        assert_eq!(
            PortalError::SubmitFailed(sqlx::Error::RowNotFound).to_string(),
            "Lỗi server"
        );
        assert_eq!(
            PortalError::ApplicationListFailed(sqlx::Error::RowNotFound).to_string(),
            "Lỗi server khi lấy danh sách ứng tuyển"
        );
        assert_eq!(
            PortalError::InsertFailed(sqlx::Error::RowNotFound).to_string(),
            "Insert failed"
        );
        assert_eq!(
            PortalError::UpdateFailed(sqlx::Error::RowNotFound).to_string(),
            "Update failed"
        );
        assert_eq!(
            PortalError::DeleteFailed(sqlx::Error::RowNotFound).to_string(),
            "Delete failed"
        );
    }
}
