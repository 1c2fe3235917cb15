//! API DTOs (Data Transfer Objects)
//!
//! Company and applied-job rows serialize straight from the domain
//! structs (their field names ARE the wire contract); the shapes here
//! cover requests and the small acknowledgment bodies.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ApplicantDetails;

// ============================================================================
// Apply
// ============================================================================

/// Application submission request
///
/// The ids are `Option` so a missing field maps to the contract's own
/// 400 body rather than a framework rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    pub user_id: Option<i64>,
    pub job_id: Option<i64>,
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
}

// ============================================================================
// Acknowledgments
// ============================================================================

/// `{success, message}` acknowledgment (apply)
#[derive(Debug, Clone, Serialize)]
pub struct PortalAck {
    pub success: bool,
    pub message: String,
}

impl PortalAck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Bare `{success}` acknowledgment (admin update/delete)
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{success, id}` response for admin company creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateCompanyResponse {
    pub success: bool,
    pub id: i64,
}
