//! Defines the route handler for logging out.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{auth::invalidate_auth_cookie, response::Envelope};

/// Invalidate the auth cookie, logging the user out.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_auth_cookie(jar);

    (jar, Envelope::message("Logged out")).into_response()
}
