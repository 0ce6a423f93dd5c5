use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, Request},
    middleware::{from_fn, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
};
use tracing::field::Empty;
use utoipa::OpenApi;

/// Request bodies above this size are refused.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct XRequestId(pub String);

pub fn request_id_header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

#[derive(Clone, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _req: &Request<B>) -> Option<RequestId> {
        // Generate a unique request ID using nanoid
        let id = nanoid::nanoid!();
        Some(RequestId::new(id.parse().ok()?))
    }
}

/// Middleware that stores request_id in Request.extensions and records it in the current span
pub async fn push_req_id_to_extensions(mut req: Request<Body>, next: Next) -> Response {
    let rid = req
        .headers()
        .get(request_id_header())
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| "n/a".to_string());

    req.extensions_mut().insert(XRequestId(rid.clone()));
    tracing::Span::current().record("request_id", tracing::field::display(&rid));

    next.run(req).await
}

/// Create trace layer with proper typing
#[allow(clippy::type_complexity)]
pub fn create_trace_layer() -> tower_http::trace::TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    impl Fn(&Request<Body>) -> tracing::Span + Clone,
> {
    use tower_http::trace::TraceLayer;

    TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let rid = req
            .headers()
            .get(request_id_header())
            .and_then(|v| v.to_str().ok())
            .unwrap_or("n/a");
        tracing::info_span!(
            "http_request",
            method = %req.method(),
            uri = %req.uri().path(),
            version = ?req.version(),
            request_id = %rid,
            status = Empty,
            latency_ms = Empty
        )
    })
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Wrap the module routes with health, OpenAPI and the shared middleware stack.
pub fn build_router(module_router: Router, timeout: Option<Duration>) -> anyhow::Result<Router> {
    // Build once, serve as static JSON (no per-request serialization)
    let openapi_value = Arc::new(serde_json::to_value(
        accommodations::api::rest::openapi::ApiDoc::openapi(),
    )?);

    let mut router = module_router
        .route("/health", get(health_check))
        .route(
            "/openapi.json",
            get({
                let v = openapi_value.clone();
                move || async move {
                    let json = Json((*v).clone());
                    ([(header::CACHE_CONTROL, "no-store")], json).into_response()
                }
            }),
        );

    // Correct middleware order (outermost to innermost):
    // PropagateRequestId -> SetRequestId -> push_req_id_to_extensions -> Trace -> Timeout -> BodyLimit
    // Router::layer wraps, so the innermost layer is added first.
    router = router.layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));
    if let Some(t) = timeout {
        router = router.layer(TimeoutLayer::new(t));
    }
    router = router
        .layer(create_trace_layer())
        .layer(from_fn(push_req_id_to_extensions))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeReqId))
        .layer(PropagateRequestIdLayer::new(request_id_header()));

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let rid = response
            .headers()
            .get(request_id_header())
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, rid, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_and_request_id() {
        let router = build_router(Router::new(), Some(Duration::from_secs(5))).unwrap();
        let (status, rid, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(rid.is_some_and(|r| !r.is_empty()));
    }

    #[tokio::test]
    async fn client_request_id_is_propagated() {
        let router = build_router(Router::new(), None).unwrap();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "abc123"
        );
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let router = build_router(Router::new(), None).unwrap();
        let (status, _, body) = get_json(router, "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/accommodations").is_some());
    }
}
