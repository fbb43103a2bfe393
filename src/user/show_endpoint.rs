//! Defines the endpoint for showing a single user.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    record_path::RecordPath,
    response::Envelope,
    user::{UserId, UserState, UserStore},
};

/// A route handler that responds with the user `user_id`, or 404 if there is
/// no such user.
pub async fn show_user_endpoint(
    State(state): State<UserState>,
    RecordPath(user_id): RecordPath<UserId>,
) -> Response {
    match state.store.get(user_id) {
        Ok(user) => Envelope::new("Detail of user info", user).into_response(),
        Err(error) => error.into_failure_response("Failed to get user"),
    }
}
