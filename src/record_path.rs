//! An extractor for the record ID in a resource's URL.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// The record ID captured from the request path, e.g. the `42` in `/users/42`.
///
/// An ID that cannot be parsed cannot match any record, so it is rejected
/// with [Error::NotFound] rather than axum's plain text `400 Bad Request`.
#[derive(Debug, Clone, Copy)]
pub struct RecordPath<T>(pub T);

impl<T, S> FromRequestParts<S> for RecordPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(
                    "no record for path {}: {}",
                    parts.uri.path(),
                    rejection.body_text()
                );
                Err(Error::NotFound)
            }
        }
    }
}
