//! Defines the endpoint for deleting a user.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    record_path::RecordPath,
    response::Envelope,
    user::{UserId, UserState, UserStore},
};

/// A route handler for deleting the user `user_id` and, through the foreign
/// key, their transactions.
pub async fn delete_user_endpoint(
    State(state): State<UserState>,
    RecordPath(user_id): RecordPath<UserId>,
) -> Response {
    match state.store.delete(user_id) {
        Ok(()) => Envelope::message("User deleted").into_response(),
        Err(error) => error.into_failure_response("Failed to delete user"),
    }
}
