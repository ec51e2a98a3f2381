use axum::Json;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use http::{HeaderValue, StatusCode, header};

use crate::api::rest::dto::AccessDecisionDto;
use crate::domain::error::VerifyError;
use crate::domain::model::AccessDecision;

/// HTTP status for a failed verification.
#[must_use]
pub fn status_for(err: &VerifyError) -> StatusCode {
    match err {
        VerifyError::MissingCredential | VerifyError::InvalidCredential(_) => {
            StatusCode::UNAUTHORIZED
        }
        VerifyError::Forbidden(_) => StatusCode::FORBIDDEN,
        VerifyError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        VerifyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Denials still carry a decision body (`access: false`) so the page can gate
/// rendering from the body alone.
impl IntoResponse for VerifyError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let body = AccessDecisionDto::from(AccessDecision::denied(Utc::now()));

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
