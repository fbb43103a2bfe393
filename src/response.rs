//! The JSON envelope that every successful API response is wrapped in.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A response body of the form `{"message": ..., "data": ...}`.
///
/// `data` is left out of the JSON entirely when there is nothing to return,
/// e.g. after deleting a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// A short, human readable summary of what happened.
    pub message: String,
    /// The record(s) the request operated on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap `data` with `message`.
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_owned(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// An envelope with a message and no data.
    pub fn message(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            data: None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Respond with the envelope as JSON and the status code `status`.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        self.with_status(StatusCode::OK)
    }
}
