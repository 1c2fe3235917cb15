//! Repository Traits
//!
//! Interfaces for data persistence. Implementations wrap store failures
//! into the operation-specific `PortalError` variants so each route keeps
//! its legacy failure message.

use kernel::id::{CompanyId, UserId};

use crate::domain::entities::{AppliedJob, Company, CompanyFields, NewApplication};
use crate::error::PortalResult;

/// Company (job posting) repository trait
#[trait_variant::make(CompanyRepository: Send)]
pub trait LocalCompanyRepository {
    /// All companies, insertion order (public job listing)
    async fn list(&self) -> PortalResult<Vec<Company>>;

    /// All companies, most recently created first (admin listing)
    async fn list_by_id_desc(&self) -> PortalResult<Vec<Company>>;

    /// Insert a company, returning the store-assigned id
    async fn create(&self, fields: &CompanyFields) -> PortalResult<CompanyId>;

    /// Overwrite all twelve attributes; silent no-op if the id is absent
    async fn update(&self, id: CompanyId, fields: &CompanyFields) -> PortalResult<()>;

    /// Delete by id; silent no-op if the id is absent
    async fn delete(&self, id: CompanyId) -> PortalResult<()>;
}

/// Application repository trait
#[trait_variant::make(ApplicationRepository: Send)]
pub trait LocalApplicationRepository {
    /// Whether an application for (user, job) already exists
    async fn exists(&self, user_id: UserId, job_id: CompanyId) -> PortalResult<bool>;

    /// Insert an application with a store-assigned timestamp.
    ///
    /// The exists pre-check is not atomic with this insert; a unique
    /// violation on (user_id, job_id) must surface as `AlreadyApplied`.
    async fn submit(&self, application: &NewApplication) -> PortalResult<()>;

    /// All applications by the user, joined with job fields, newest first
    async fn list_for_user(&self, user_id: UserId) -> PortalResult<Vec<AppliedJob>>;
}
