use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// HTTP header carrying the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP header naming the wardrobe the request acts on
///
/// Set by the authenticating gateway in front of this service.
pub const OWNER_HEADER: &str = "x-wardrobe-owner";

/// Wardrobe used when no owner header is present
pub const DEFAULT_OWNER: &str = "local";

const MAX_OWNER_LEN: usize = 128;

/// Per-request identity, stored in request extensions for handlers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub owner: String,
}

impl RequestContext {
    fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);

        let owner = headers
            .get(OWNER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|owner| !owner.is_empty() && owner.len() <= MAX_OWNER_LEN)
            .unwrap_or(DEFAULT_OWNER)
            .to_string();

        Self { request_id, owner }
    }
}

/// Resolves the request context and echoes the request ID on the response
///
/// An incoming `x-request-id` is kept when it is a valid UUID; otherwise a new
/// UUID v4 is generated.
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
    let context = RequestContext::from_headers(request.headers());
    let request_id = context.request_id;
    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

/// Tracing span for an HTTP request, tagged with its context
pub fn make_request_span(request: &Request<Body>) -> tracing::Span {
    let (request_id, owner) = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| (ctx.request_id.to_string(), ctx.owner.as_str()))
        .unwrap_or_else(|| ("unknown".to_string(), DEFAULT_OWNER));

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
        owner = %owner,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = RequestContext::from_headers(&HeaderMap::new());
        assert_eq!(ctx.owner, DEFAULT_OWNER);
        assert_eq!(ctx.request_id.get_version_num(), 4);
    }

    #[test]
    fn test_context_from_headers() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        headers.insert(OWNER_HEADER, HeaderValue::from_static(" alice "));

        let ctx = RequestContext::from_headers(&headers);
        assert_eq!(ctx.request_id, id);
        assert_eq!(ctx.owner, "alice");
    }

    #[test]
    fn test_invalid_request_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        headers.insert(OWNER_HEADER, HeaderValue::from_static("   "));

        let ctx = RequestContext::from_headers(&headers);
        assert_eq!(ctx.request_id.get_version_num(), 4);
        assert_eq!(ctx.owner, DEFAULT_OWNER);
    }
}
