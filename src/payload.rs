//! An extractor for request bodies that may be sent either as JSON or as a URL
//! encoded form.

use axum::{
    Form, Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// A request body decoded from JSON or, if the content type says so, from a
/// URL encoded form.
///
/// A request without a content type is decoded as JSON, and an empty body
/// without a content type is treated as an empty object so that validation
/// can report the missing fields.
///
/// Decoding failures are reported as [Error::InvalidPayload].
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&request) {
            let Form(value) = Form::<T>::from_request(request, state)
                .await
                .map_err(|rejection| Error::InvalidPayload(rejection.body_text()))?;

            Ok(Self(value))
        } else if !request.headers().contains_key(CONTENT_TYPE) {
            let bytes = Bytes::from_request(request, state)
                .await
                .map_err(|rejection| Error::InvalidPayload(rejection.body_text()))?;
            let body: &[u8] = if bytes.is_empty() { b"{}" } else { &bytes };

            let Json(value) = Json::<T>::from_bytes(body)
                .map_err(|rejection| Error::InvalidPayload(rejection.body_text()))?;

            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(request, state)
                .await
                .map_err(|rejection| Error::InvalidPayload(rejection.body_text()))?;

            Ok(Self(value))
        }
    }
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("application/x-www-form-urlencoded"))
}
