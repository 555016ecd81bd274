use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderValue, Request, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::core::http::response_envelope::ErrorEnvelope;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn incoming_request_id(headers: &HeaderMap) -> Option<HeaderValue> {
    headers
        .get(REQUEST_ID_HEADER)
        .filter(|v| v.to_str().is_ok_and(|s| !s.trim().is_empty()))
        .cloned()
}

fn generate_request_id() -> HeaderValue {
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    HeaderValue::from_str(&format!("req-{nanos}"))
        .unwrap_or_else(|_| HeaderValue::from_static("req-unknown"))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

/// Rewrites a plain-text 4xx (e.g. axum's 405) into `{"detail": ...}`.
async fn into_detail_body(res: Response) -> Response {
    let (mut parts, bytes) = take_body(res).await;
    let original = String::from_utf8_lossy(&bytes);
    let detail = match original.trim() {
        "" => parts
            .status
            .canonical_reason()
            .unwrap_or("Request rejected")
            .to_string(),
        text => text.to_string(),
    };

    let body = match serde_json::to_vec(&ErrorEnvelope::new(detail)) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Response::from_parts(parts, body.into())
}

/// Tags every response with `X-Request-Id` (echoing the caller's) and gives
/// non-JSON client errors the same `{"detail"}` shape as handler errors.
pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let request_id = incoming_request_id(req.headers()).unwrap_or_else(generate_request_id);

    let res = next.run(req).await;
    let status = res.status();

    let mut res = if status.is_client_error() && !is_json(res.headers()) {
        into_detail_body(res).await
    } else {
        res
    };

    res.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    res
}
