//! Defines the route handler that tells a client who is logged in.

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    response::Envelope,
    user::{UserId, UserState, UserStore},
};

/// Respond with the logged in user.
///
/// Must be routed behind [crate::auth::auth_guard], which provides the user ID.
/// A user that was deleted after logging in is treated as logged out.
pub async fn get_current_user(
    State(state): State<UserState>,
    Extension(user_id): Extension<UserId>,
) -> Response {
    match state.store.get(user_id) {
        Ok(user) => Envelope::new("Authenticated user", user).into_response(),
        Err(Error::NotFound) => Error::Unauthenticated.into_response(),
        Err(error) => error.into_failure_response("Failed to get the authenticated user"),
    }
}
