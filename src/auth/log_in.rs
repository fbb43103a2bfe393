//! This file defines the route for handling log-in requests.
//! The auth module handles the lower level authentication and cookie auth logic.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    AppState, Error,
    auth::set_auth_cookie,
    payload::Payload,
    response::Envelope,
    user::{SQLiteUserStore, User, UserStore},
    validation::{FieldErrors, email, required},
};

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LogInState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The store to look up users in.
    pub store: SQLiteUserStore,
}

impl FromRef<AppState> for LogInState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            store: SQLiteUserStore::new(state.db_connection.clone()),
        }
    }
}

/// The raw data entered by the user in the log-in form.
///
/// The email and password are stored as plain strings. There is no need for
/// validation here since they will be compared against the email and password
/// in the database, which have been verified.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LogInData {
    /// Email entered during log-in.
    pub email: Option<String>,
    /// Password entered during log-in.
    pub password: Option<String>,
}

/// Handler for log-in requests.
///
/// On a successful log-in request, the auth cookie is set and the user is
/// returned. Unknown emails and wrong passwords are both reported as
/// [Error::InvalidCredentials] so that a client cannot tell which one was wrong.
pub async fn post_log_in(
    State(state): State<LogInState>,
    jar: PrivateCookieJar,
    Payload(user_data): Payload<LogInData>,
) -> Response {
    let user = match verify_credentials(&state.store, &user_data) {
        Ok(user) => user,
        Err(error) => return error.into_response(),
    };

    match set_auth_cookie(jar, user.id, state.cookie_duration) {
        Ok(jar) => (jar, Envelope::new("Logged in", user)).into_response(),
        Err(error) => error.into_failure_response("Failed to log in"),
    }
}

fn verify_credentials(store: &impl UserStore, user_data: &LogInData) -> Result<User, Error> {
    let mut errors = FieldErrors::default();

    let email = required(&mut errors, "email", user_data.email.as_deref())
        .and_then(|value| email(&mut errors, "email", value));
    let password = required(&mut errors, "password", user_data.password.as_deref())
        .and(user_data.password.as_deref());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(Error::Validation(errors));
    };

    let user = store.get_by_email(&email).map_err(|error| match error {
        Error::NotFound => Error::InvalidCredentials,
        error => error,
    })?;

    match user.password_hash.verify(password) {
        Ok(true) => Ok(user),
        Ok(false) => Err(Error::InvalidCredentials),
        Err(error) => Err(Error::HashingError(error.to_string())),
    }
}
