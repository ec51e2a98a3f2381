use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn;
use identity_resolver_sdk::AdminVerifierClient;
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::api::rest::routes;
use crate::config::AccessVerifierConfig;
use crate::domain::service::AccessVerifier;
use crate::middleware;

/// HTTP surface of the access verifier.
pub struct AccessVerifierModule {
    config: AccessVerifierConfig,
    service: Arc<AccessVerifier>,
}

impl AccessVerifierModule {
    #[must_use]
    pub fn new(config: AccessVerifierConfig, client: Arc<dyn AdminVerifierClient>) -> Self {
        let service = Arc::new(AccessVerifier::new(client, config.fallback));
        Self { config, service }
    }

    #[must_use]
    pub fn config(&self) -> &AccessVerifierConfig {
        &self.config
    }

    #[must_use]
    pub fn service(&self) -> Arc<AccessVerifier> {
        Arc::clone(&self.service)
    }

    /// Build the router with the middleware stack applied.
    ///
    /// Layers run outermost first: request id, trace, request id into span,
    /// timeout.
    #[must_use]
    pub fn router(&self) -> Router {
        let mut router = routes::register_routes(Router::new(), self.service());

        // 4) Timeout
        router = router.layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(self.config.request_timeout_secs),
        ));

        // 3) Record request_id into span (inner to Trace)
        router = router.layer(from_fn(middleware::request_id::record_req_id_in_span));

        // 2) Trace
        router = router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        module = "access_verifier",
                        request_id = Empty,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<axum::body::Body>,
                     latency: Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        );

        // 1) Request ID handling
        let x_request_id = middleware::request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(
            x_request_id,
            middleware::request_id::MakeReqId,
        ));

        router
    }

    fn parse_bind_address(bind_addr: &str) -> anyhow::Result<SocketAddr> {
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// Bind and serve until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the bind address is invalid, binding fails, or the
    /// server exits abnormally.
    pub async fn serve(self, cancel: CancellationToken) -> anyhow::Result<()> {
        let addr = Self::parse_bind_address(&self.config.bind_addr)?;
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            fallback = ?self.config.fallback,
            "Access verifier listening on {}",
            addr
        );

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
