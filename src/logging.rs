//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{StatusCode, header::CONTENT_TYPE, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::Error;

/// The number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The fields whose values are never written to the logs.
const REDACTED_FIELDS: [&str; 2] = ["password", "password_confirmation"];
const REDACTED_VALUE: &str = "********";

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Passwords in JSON and URL encoded form bodies are redacted.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read the request body: {error}");
            return Error::InvalidPayload(error.to_string()).into_response();
        }
    };

    let body_text = redact_passwords(&parts, &String::from_utf8_lossy(&body_bytes));
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes: Bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read the response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

fn redact_passwords(parts: &request::Parts, body_text: &str) -> String {
    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        REDACTED_FIELDS
            .iter()
            .fold(body_text.to_owned(), |text, field| redact_form_field(&text, field))
    } else if content_type.starts_with("application/json") {
        redact_json_fields(body_text)
    } else {
        body_text.to_owned()
    }
}

fn redact_form_field(form_text: &str, field_name: &str) -> String {
    form_text
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == field_name => format!("{key}={REDACTED_VALUE}"),
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn redact_json_fields(json_text: &str) -> String {
    let Ok(mut value) = serde_json::from_str::<Value>(json_text) else {
        return json_text.to_owned();
    };

    let Some(object) = value.as_object_mut() else {
        return json_text.to_owned();
    };

    for field in REDACTED_FIELDS {
        if let Some(password) = object.get_mut(field) {
            *password = Value::String(REDACTED_VALUE.to_owned());
        }
    }

    value.to_string()
}

/// Cut `text` to at most `limit` bytes without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }

    let end = (0..=limit)
        .rev()
        .find(|&index| text.is_char_boundary(index))
        .unwrap_or(0);

    &text[..end]
}

fn log_request(headers: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {headers:#?}\nbody: {:}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {headers:#?}\nbody: {body:?}");
    }
}

fn log_response(headers: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {headers:#?}\nbody: {:}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {headers:#?}\nbody: {body:?}");
    }
}
