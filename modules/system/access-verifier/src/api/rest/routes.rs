use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::AccessVerifier;

pub const VERIFY_ACCESS_PATH: &str = "/api/admin/verify-access";
pub const HEALTH_PATH: &str = "/health";

/// REST routes of the access verifier.
pub fn register_routes(router: Router, svc: Arc<AccessVerifier>) -> Router {
    router
        .route(VERIFY_ACCESS_PATH, get(handlers::verify_access))
        .route(HEALTH_PATH, get(handlers::health_check))
        .layer(Extension(svc))
}
