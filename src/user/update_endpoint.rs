//! Defines the endpoint for updating a user.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    payload::Payload,
    record_path::RecordPath,
    response::Envelope,
    user::{UserId, UserState, UserStore, form::UserForm},
};

const FAILURE: &str = "Failed to update user";

/// A route handler for replacing the name, email and, optionally, the
/// password of the user `user_id`.
///
/// Responds with 404 if the user does not exist. Nothing is changed if any
/// field fails validation.
pub async fn update_user_endpoint(
    State(state): State<UserState>,
    RecordPath(user_id): RecordPath<UserId>,
    Payload(form): Payload<UserForm>,
) -> Response {
    if let Err(error) = state.store.get(user_id) {
        return error.into_failure_response(FAILURE);
    }

    let changes = match form.into_user_changes(state.password_hash_cost) {
        Ok(changes) => changes,
        Err(error) => return error.into_failure_response(FAILURE),
    };

    match state.store.update(user_id, changes) {
        Ok(user) => Envelope::new("User updated", user).into_response(),
        Err(error) => error.into_failure_response(FAILURE),
    }
}
