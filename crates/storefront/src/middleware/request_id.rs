//! Request ID middleware.
//!
//! Every storefront request (page render, cart or checkout post) carries an
//! id that ties its log lines, Sentry events and response together. A proxy
//! may hand one in; it is accepted only if it is short printable ASCII so it
//! cannot forge log lines or bloat the Sentry scope.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream id that is reused as-is.
const MAX_UPSTREAM_ID_LEN: usize = 64;

/// Tag the request with an id, reusing a well-formed upstream one.
///
/// The id lands on the `request` span opened by the trace layer, on the
/// Sentry scope and in the `x-request-id` response header.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| is_acceptable_upstream_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn is_acceptable_upstream_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_UPSTREAM_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_acceptance() {
        assert!(is_acceptable_upstream_id("cf-7f3a9c"));
        assert!(is_acceptable_upstream_id(&Uuid::new_v4().to_string()));

        assert!(!is_acceptable_upstream_id(""));
        assert!(!is_acceptable_upstream_id("two words"));
        assert!(!is_acceptable_upstream_id(&"a".repeat(MAX_UPSTREAM_ID_LEN + 1)));
    }
}
