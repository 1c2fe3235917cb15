//! Domain Entities
//!
//! Company records and job applications. The structs double as sqlx row
//! types and wire shapes: every field name below is simultaneously the
//! column name and the JSON key the legacy frontend expects (hence the
//! Vietnamese applicant fields and the `type` rename).

use chrono::{DateTime, Utc};
use kernel::id::{CompanyId, UserId};
use serde::{Deserialize, Serialize};

/// Company record (a job posting, not a user-owned entity)
///
/// All twelve attributes are nullable text; the store is the only
/// validator for them.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Company {
    pub id: i64,
    pub company: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub job_type: Option<String>,
    pub address: Option<String>,
    pub age: Option<String>,
    pub salary: Option<String>,
    pub bonus: Option<String>,
    pub detail: Option<String>,
    pub interview: Option<String>,
    pub document: Option<String>,
    pub note: Option<String>,
    pub shift: Option<String>,
}

/// The twelve writable company attributes (create/update payload)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyFields {
    pub company: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub address: Option<String>,
    pub age: Option<String>,
    pub salary: Option<String>,
    pub bonus: Option<String>,
    pub detail: Option<String>,
    pub interview: Option<String>,
    pub document: Option<String>,
    pub note: Option<String>,
    pub shift: Option<String>,
}

/// Applicant personal fields, distinct from the User account
///
/// Field names are the legacy wire contract: full name, gender, employment
/// type, birth date, national-id number, id-issue place/date, phone,
/// hometown, and current company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicantDetails {
    pub ho_ten: Option<String>,
    pub gioi_tinh: Option<String>,
    pub hinh_thuc: Option<String>,
    pub ngay_sinh: Option<String>,
    pub cccd: Option<String>,
    pub noi_cap: Option<String>,
    pub ngay_cap: Option<String>,
    pub so_dien_thoai: Option<String>,
    pub que_quan: Option<String>,
    pub cong_ty: Option<String>,
}

/// Insert shape for a job application
///
/// At most one application may exist per (user_id, job_id); `applied_at`
/// is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: UserId,
    pub job_id: CompanyId,
    pub applicant: ApplicantDetails,
}

/// A user's application joined with the job posting's public fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AppliedJob {
    pub id: i64,
    pub company: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub job_type: Option<String>,
    pub address: Option<String>,
    pub salary: Option<String>,
    pub detail: Option<String>,
    pub applied_at: DateTime<Utc>,
}
