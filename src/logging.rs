//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::Response,
};

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `debug` level.
/// Bodies longer than [LOG_BODY_LENGTH_LIMIT] bytes are truncated and the
/// full body is logged at the `trace` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = extract_request_parts_and_body_text(request).await;
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, Body::from(body_text));
    let response = next.run(request).await;

    let (parts, body_text) = extract_response_parts_and_body_text(response).await;
    log_response(&parts, &body_text);

    Response::from_parts(parts, Body::from(body_text))
}

async fn extract_request_parts_and_body_text(request: Request) -> (request::Parts, String) {
    let (parts, body) = request.into_parts();

    (parts, body_to_text(body).await)
}

async fn extract_response_parts_and_body_text(response: Response) -> (response::Parts, String) {
    let (parts, body) = response.into_parts();

    (parts, body_to_text(body).await)
}

async fn body_to_text(body: Body) -> String {
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => {
            tracing::error!("could not read body for logging: {error}");
            String::new()
        }
    }
}

const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a character.
fn truncate_body(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!(
            "Received request: {} {}\nheaders: {:#?}\nbody: {}...",
            parts.method,
            parts.uri,
            parts.headers,
            truncate_body(body)
        );
        tracing::trace!("Full request body: {body:?}");
    } else {
        tracing::debug!(
            "Received request: {} {}\nheaders: {:#?}\nbody: {body:?}",
            parts.method,
            parts.uri,
            parts.headers
        );
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!(
            "Sending response: {}\nheaders: {:#?}\nbody: {}...",
            parts.status,
            parts.headers,
            truncate_body(body)
        );
        tracing::trace!("Full response body: {body:?}");
    } else {
        tracing::debug!(
            "Sending response: {}\nheaders: {:#?}\nbody: {body:?}",
            parts.status,
            parts.headers
        );
    }
}
