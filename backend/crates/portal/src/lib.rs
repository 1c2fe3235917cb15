//! Portal (Jobs & Applications) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! There is no application layer on purpose: every operation here is a
//! direct request/response mapper over a single parameterized query, so
//! the handlers talk to the repository directly.
//!
//! ## Surface
//! - Public job listing and application submission (one application per
//!   user per job, enforced by pre-check plus a UNIQUE constraint)
//! - Per-user application listing joined with job fields, newest first
//! - Admin company CRUD (the admin guard lives in the auth crate and is
//!   applied by the composing binary)

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PortalError, PortalResult};
pub use infra::postgres::PgPortalRepository;
pub use presentation::router::{admin_router, portal_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPortalRepository as PortalStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
