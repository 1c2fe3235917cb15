//! PostgreSQL Repository Implementations

use kernel::error::conversions::is_unique_violation;
use kernel::id::{CompanyId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{AppliedJob, Company, CompanyFields, NewApplication};
use crate::domain::repository::{ApplicationRepository, CompanyRepository};
use crate::error::{PortalError, PortalResult};

/// PostgreSQL-backed portal repository
#[derive(Clone)]
pub struct PgPortalRepository {
    pool: PgPool,
}

impl PgPortalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Company Repository Implementation
// ============================================================================

impl CompanyRepository for PgPortalRepository {
    async fn list(&self) -> PortalResult<Vec<Company>> {
        let rows = sqlx::query_as::<_, Company>(
            r#"
            SELECT
                id, company, image, "type", address, age, salary,
                bonus, detail, interview, document, note, shift
            FROM companies
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(PortalError::Database)?;

        Ok(rows)
    }

    async fn list_by_id_desc(&self) -> PortalResult<Vec<Company>> {
        let rows = sqlx::query_as::<_, Company>(
            r#"
            SELECT
                id, company, image, "type", address, age, salary,
                bonus, detail, interview, document, note, shift
            FROM companies
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(PortalError::Database)?;

        Ok(rows)
    }

    async fn create(&self, fields: &CompanyFields) -> PortalResult<CompanyId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO companies (
                company, image, "type", address, age, salary,
                bonus, detail, interview, document, note, shift
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&fields.company)
        .bind(&fields.image)
        .bind(&fields.job_type)
        .bind(&fields.address)
        .bind(&fields.age)
        .bind(&fields.salary)
        .bind(&fields.bonus)
        .bind(&fields.detail)
        .bind(&fields.interview)
        .bind(&fields.document)
        .bind(&fields.note)
        .bind(&fields.shift)
        .fetch_one(&self.pool)
        .await
        .map_err(PortalError::InsertFailed)?;

        Ok(CompanyId::from_i64(id))
    }

    async fn update(&self, id: CompanyId, fields: &CompanyFields) -> PortalResult<()> {
        // Full overwrite of all twelve attributes; a missing id affects
        // zero rows and still reports success.
        sqlx::query(
            r#"
            UPDATE companies SET
                company = $2,
                image = $3,
                "type" = $4,
                address = $5,
                age = $6,
                salary = $7,
                bonus = $8,
                detail = $9,
                interview = $10,
                document = $11,
                note = $12,
                shift = $13
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(&fields.company)
        .bind(&fields.image)
        .bind(&fields.job_type)
        .bind(&fields.address)
        .bind(&fields.age)
        .bind(&fields.salary)
        .bind(&fields.bonus)
        .bind(&fields.detail)
        .bind(&fields.interview)
        .bind(&fields.document)
        .bind(&fields.note)
        .bind(&fields.shift)
        .execute(&self.pool)
        .await
        .map_err(PortalError::UpdateFailed)?;

        Ok(())
    }

    async fn delete(&self, id: CompanyId) -> PortalResult<()> {
        sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(PortalError::DeleteFailed)?;

        Ok(())
    }
}

// ============================================================================
// Application Repository Implementation
// ============================================================================

impl ApplicationRepository for PgPortalRepository {
    async fn exists(&self, user_id: UserId, job_id: CompanyId) -> PortalResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE user_id = $1 AND job_id = $2)",
        )
        .bind(user_id.as_i64())
        .bind(job_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(PortalError::SubmitFailed)?;

        Ok(exists)
    }

    async fn submit(&self, application: &NewApplication) -> PortalResult<()> {
        let applicant = &application.applicant;

        sqlx::query(
            r#"
            INSERT INTO applications (
                user_id, job_id, ho_ten, gioi_tinh, hinh_thuc, ngay_sinh,
                cccd, noi_cap, ngay_cap, so_dien_thoai, que_quan, cong_ty
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(application.user_id.as_i64())
        .bind(application.job_id.as_i64())
        .bind(&applicant.ho_ten)
        .bind(&applicant.gioi_tinh)
        .bind(&applicant.hinh_thuc)
        .bind(&applicant.ngay_sinh)
        .bind(&applicant.cccd)
        .bind(&applicant.noi_cap)
        .bind(&applicant.ngay_cap)
        .bind(&applicant.so_dien_thoai)
        .bind(&applicant.que_quan)
        .bind(&applicant.cong_ty)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The exists pre-check is not atomic with this insert; the
            // UNIQUE constraint on (user_id, job_id) is the backstop.
            if is_unique_violation(&e) {
                PortalError::AlreadyApplied
            } else {
                PortalError::SubmitFailed(e)
            }
        })?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> PortalResult<Vec<AppliedJob>> {
        let rows = sqlx::query_as::<_, AppliedJob>(
            r#"
            SELECT
                j.id,
                j.company,
                j.image,
                j."type",
                j.address,
                j.salary,
                j.detail,
                a.applied_at
            FROM applications a
            JOIN companies j ON a.job_id = j.id
            WHERE a.user_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(PortalError::ApplicationListFailed)?;

        Ok(rows)
    }
}
