use axum::extract::Request;
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::request_id::{MakeRequestId, RequestId};

#[must_use]
pub fn header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

#[derive(Clone, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _req: &http::Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        http::HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Record the request id into the current request span.
pub async fn record_req_id_in_span(req: Request, next: Next) -> Response {
    if let Some(rid) = req.headers().get(header()).and_then(|v| v.to_str().ok()) {
        tracing::Span::current().record("request_id", rid);
    }

    next.run(req).await
}
