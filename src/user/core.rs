//! Defines the user model and the user table.

use std::fmt::Display;

use email_address::EmailAddress;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{PasswordHash, database_id::DatabaseId, timestamp};

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other types of IDs, leading to better compile time
/// errors, and more flexible generics that can have distinct implementations for multiple ID types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserId(DatabaseId);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: DatabaseId) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application.
///
/// The password hash is never serialized, so a `User` can be returned to
/// clients as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// The user's ID in the application database.
    pub id: UserId,
    /// The user's display name.
    pub name: String,
    /// The email address the user logs in with.
    pub email: EmailAddress,
    /// The user's password hash.
    #[serde(skip_serializing)]
    pub password_hash: PasswordHash,
    /// When the user was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the user was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The validated data needed to create a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// The user's display name.
    pub name: String,
    /// The email address the user logs in with.
    pub email: EmailAddress,
    /// The hash of the user's password.
    pub password_hash: PasswordHash,
}

/// The validated changes to apply to an existing user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    /// The new display name.
    pub name: String,
    /// The new email address.
    pub email: EmailAddress,
    /// The hash of the new password, `None` keeps the current password.
    pub password_hash: Option<PasswordHash>,
}

/// Create the user table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_user_created_at ON user(created_at)",
        (),
    )?;

    Ok(())
}

/// Map a row with the columns `id, name, email, password, created_at, updated_at` to a [User].
pub fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    let raw_id = row.get(0)?;
    let name = row.get(1)?;
    let raw_email: String = row.get(2)?;
    let raw_password_hash: String = row.get(3)?;

    Ok(User {
        id: UserId::new(raw_id),
        name,
        email: EmailAddress::new_unchecked(raw_email),
        password_hash: PasswordHash::new_unchecked(&raw_password_hash),
        created_at: timestamp::from_row(row, 4)?,
        updated_at: timestamp::from_row(row, 5)?,
    })
}
