//! HTTP Handlers
//!
//! Each handler is a direct request/response mapper: shallow input check,
//! one or two parameterized queries through the repository, JSON out.

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use kernel::id::{CompanyId, UserId};

use crate::domain::entities::{AppliedJob, Company, CompanyFields, NewApplication};
use crate::domain::repository::{ApplicationRepository, CompanyRepository};
use crate::error::{PortalError, PortalResult};
use crate::presentation::dto::{
    ApplyRequest, CreateCompanyResponse, PortalAck, SuccessResponse,
};

/// Shared state for portal handlers
#[derive(Clone)]
pub struct PortalAppState<R>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Public: Job Listing
// ============================================================================

/// GET /api/jobs
pub async fn list_jobs<R>(
    State(state): State<PortalAppState<R>>,
) -> PortalResult<Json<Vec<Company>>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let companies = state.repo.list().await?;
    Ok(Json(companies))
}

// ============================================================================
// Public: Application Submission
// ============================================================================

/// POST /api/apply
pub async fn apply<R>(
    State(state): State<PortalAppState<R>>,
    Json(req): Json<ApplyRequest>,
) -> PortalResult<Json<PortalAck>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let (user_id, job_id) = match (req.user_id, req.job_id) {
        (Some(user_id), Some(job_id)) => (UserId::from_i64(user_id), CompanyId::from_i64(job_id)),
        _ => return Err(PortalError::MissingApplicationIds),
    };

    // Pre-check for the friendly message; the UNIQUE constraint behind
    // `create` catches the concurrent case.
    if state.repo.exists(user_id, job_id).await? {
        return Err(PortalError::AlreadyApplied);
    }

    let application = NewApplication {
        user_id,
        job_id,
        applicant: req.applicant,
    };

    state.repo.submit(&application).await?;

    tracing::info!(
        user_id = %user_id,
        job_id = %job_id,
        "Application submitted"
    );

    Ok(Json(PortalAck::ok("Ứng tuyển thành công!")))
}

/// GET /api/user/{user_id}/applications
pub async fn list_user_applications<R>(
    State(state): State<PortalAppState<R>>,
    Path(user_id): Path<i64>,
) -> PortalResult<Json<Vec<AppliedJob>>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let applications = state
        .repo
        .list_for_user(UserId::from_i64(user_id))
        .await?;

    Ok(Json(applications))
}

// ============================================================================
// Admin: Company Management
// ============================================================================

/// GET /api/admin/companies
pub async fn admin_list_companies<R>(
    State(state): State<PortalAppState<R>>,
) -> PortalResult<Json<Vec<Company>>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let companies = state.repo.list_by_id_desc().await?;
    Ok(Json(companies))
}

/// POST /api/admin/companies
pub async fn admin_create_company<R>(
    State(state): State<PortalAppState<R>>,
    Json(fields): Json<CompanyFields>,
) -> PortalResult<Json<CreateCompanyResponse>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let id = state.repo.create(&fields).await?;

    tracing::info!(company_id = %id, "Company created");

    Ok(Json(CreateCompanyResponse {
        success: true,
        id: id.as_i64(),
    }))
}

/// PUT /api/admin/companies/{id}
pub async fn admin_update_company<R>(
    State(state): State<PortalAppState<R>>,
    Path(id): Path<i64>,
    Json(fields): Json<CompanyFields>,
) -> PortalResult<Json<SuccessResponse>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    state
        .repo
        .update(CompanyId::from_i64(id), &fields)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/admin/companies/{id}
pub async fn admin_delete_company<R>(
    State(state): State<PortalAppState<R>>,
    Path(id): Path<i64>,
) -> PortalResult<Json<SuccessResponse>>
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    state.repo.delete(CompanyId::from_i64(id)).await?;

    Ok(Json(SuccessResponse::ok()))
}
