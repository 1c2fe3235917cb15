//! Portal Routers
//!
//! The public and admin surfaces are separate routers: the composing
//! binary wraps the admin router in the auth crate's `require_admin`
//! middleware before merging.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{ApplicationRepository, CompanyRepository};
use crate::infra::postgres::PgPortalRepository;
use crate::presentation::handlers::{self, PortalAppState};

/// Create the public portal router with PostgreSQL repository
pub fn portal_router(repo: PgPortalRepository) -> Router {
    portal_router_generic(repo)
}

/// Create the admin company-management router with PostgreSQL repository
pub fn admin_router(repo: PgPortalRepository) -> Router {
    admin_router_generic(repo)
}

/// Public routes: job listing, application submission, per-user listing
pub fn portal_router_generic<R>(repo: R) -> Router
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let state = PortalAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/jobs", get(handlers::list_jobs::<R>))
        .route("/apply", post(handlers::apply::<R>))
        .route(
            "/user/{user_id}/applications",
            get(handlers::list_user_applications::<R>),
        )
        .with_state(state)
}

/// Admin routes: company CRUD (caller applies the admin guard)
pub fn admin_router_generic<R>(repo: R) -> Router
where
    R: CompanyRepository + ApplicationRepository + Clone + Send + Sync + 'static,
{
    let state = PortalAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/admin/companies",
            get(handlers::admin_list_companies::<R>).post(handlers::admin_create_company::<R>),
        )
        .route(
            "/admin/companies/{id}",
            put(handlers::admin_update_company::<R>).delete(handlers::admin_delete_company::<R>),
        )
        .with_state(state)
}
