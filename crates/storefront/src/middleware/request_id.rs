//! Request ID middleware.
//!
//! Every response carries an `x-request-id` header so a log line can be
//! matched to the request that produced it. An ID supplied by the caller
//! is honored; otherwise a fresh UUID v4 is assigned.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request ID, on both requests and responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assign a request ID and record it on the active request span.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|header| header.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    // The http_request span declares request_id as an empty field.
    Span::current().record("request_id", &request_id);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
