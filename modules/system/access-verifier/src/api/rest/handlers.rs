use std::sync::Arc;

use axum::extract::Extension;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::rest::dto::{AccessDecisionDto, HealthDto};
use crate::domain::error::VerifyError;
use crate::domain::service::AccessVerifier;

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
}

/// Verify that the caller has admin access.
#[tracing::instrument(skip_all)]
pub async fn verify_access(
    Extension(svc): Extension<Arc<AccessVerifier>>,
    headers: HeaderMap,
) -> Result<Json<AccessDecisionDto>, VerifyError> {
    let decision = svc.verify(extract_bearer_token(&headers)).await?;
    Ok(Json(decision.into()))
}

pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_owned(),
    })
}
