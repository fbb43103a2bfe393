//! Saving is a small web app for keeping track of users and their savings
//! transactions.
//!
//! This library provides a JSON REST API for the `users` and `transactions`
//! resources, cookie based authentication for the `/user` identity route, and
//! the HTML shell that the single-page frontend mounts into.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_shell;
mod app_state;
mod auth;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod not_found;
mod payload;
mod record_path;
mod response;
mod routing;
mod timestamp;
mod transaction;
mod user;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use auth::{PasswordHash, ValidatedPassword};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{SQLiteTransactionStore, Transaction, TransactionFields, TransactionStore};
pub use user::{NewUser, SQLiteUserStore, User, UserChanges, UserId, UserStore};
pub use validation::FieldErrors;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more fields in the request payload failed validation.
    ///
    /// The client can fix the fields named in the [FieldErrors] and try again.
    #[error("the given data was invalid")]
    Validation(FieldErrors),

    /// The request body could not be decoded as JSON or as a URL encoded form.
    #[error("could not decode the request body: {0}")]
    InvalidPayload(String),

    /// The email and password combination did not match a registered user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The auth cookie is missing, could not be decrypted, or has expired.
    #[error("the request is not authenticated")]
    Unauthenticated,

    /// The email address is already used by another user.
    ///
    /// Holds the description of the constraint failure reported by SQLite.
    #[error("{0}")]
    DuplicateEmail(String),

    /// The user ID used to create or update a transaction does not refer to a
    /// registered user.
    #[error("the user ID does not refer to a registered user")]
    InvalidUserId,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// A date-time could not be formatted or parsed, e.g. for the auth cookie.
    #[error("could not format or parse the date-time: {0}")]
    InvalidDateFormat(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

/// Extended result code for a failed UNIQUE constraint.
const SQLITE_CONSTRAINT_UNIQUE: i32 = 2067;
/// Extended result code for a failed FOREIGN KEY constraint.
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == SQLITE_CONSTRAINT_UNIQUE
                    && desc.ends_with("user.email") =>
            {
                Error::DuplicateEmail(desc.clone())
            }
            rusqlite::Error::SqliteFailure(sql_error, _)
                if sql_error.extended_code == SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                Error::InvalidUserId
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// The status code to respond with for this error.
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_)
            | Error::InvalidPayload(_)
            | Error::InvalidUserId => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidCredentials | Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::DuplicateEmail(_) => StatusCode::CONFLICT,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::HashingError(_)
            | Error::InvalidDateFormat(_)
            | Error::SqlError(_)
            | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert the error into a response for a failed write, prefixing the
    /// message with `action`, e.g. "Failed to create user. Error: ...".
    ///
    /// Client errors (validation, not found) are passed through unchanged so
    /// that the status code alone tells the caller what went wrong.
    pub(crate) fn into_failure_response(self, action: &str) -> Response {
        match self {
            Error::DuplicateEmail(ref description) => (
                self.status_code(),
                Json(json!({ "message": format!("{action}. Error: {description}") })),
            )
                .into_response(),
            Error::HashingError(_)
            | Error::InvalidDateFormat(_)
            | Error::SqlError(_)
            | Error::DatabaseLockError => {
                tracing::error!("{action}: {self}");
                (
                    self.status_code(),
                    Json(json!({
                        "message": format!("{action}. Error: an unexpected error occurred, check the server logs for more details")
                    })),
                )
                    .into_response()
            }
            error => error.into_response(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Error::Validation(errors) => (
                status,
                Json(json!({
                    "message": "The given data was invalid.",
                    "errors": errors,
                })),
            )
                .into_response(),
            Error::InvalidUserId => (
                status,
                Json(json!({
                    "message": "The given data was invalid.",
                    "errors": FieldErrors::single("user_id", "The selected user id is invalid."),
                })),
            )
                .into_response(),
            Error::InvalidPayload(description) => {
                (status, Json(json!({ "message": description }))).into_response()
            }
            Error::InvalidCredentials => {
                (status, Json(json!({ "message": "Invalid credentials" }))).into_response()
            }
            Error::Unauthenticated => {
                (status, Json(json!({ "message": "Unauthenticated." }))).into_response()
            }
            Error::DuplicateEmail(description) => {
                (status, Json(json!({ "message": description }))).into_response()
            }
            Error::NotFound => not_found::get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    status,
                    Json(json!({
                        "message": "Sorry, something went wrong. Try again later or check the server logs."
                    })),
                )
                    .into_response()
            }
        }
    }
}
