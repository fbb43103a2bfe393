//! Defines the user store trait and an implementation for the SQLite backend.

use std::sync::{Arc, Mutex, MutexGuard};

use email_address::EmailAddress;
use rusqlite::Connection;

use crate::{
    Error, timestamp,
    user::{NewUser, User, UserChanges, UserId, map_user_row},
};

/// Handles the creation and retrieval of User objects.
pub trait UserStore {
    /// Create a new user.
    fn create(&self, user: NewUser) -> Result<User, Error>;

    /// Get a user by their ID.
    ///
    /// Returns [Error::NotFound] if no user with the given ID exists.
    fn get(&self, id: UserId) -> Result<User, Error>;

    /// Get a user by their email.
    ///
    /// Returns [Error::NotFound] if no user with the given email exists.
    fn get_by_email(&self, email: &EmailAddress) -> Result<User, Error>;

    /// Get every user, newest first.
    fn get_all(&self) -> Result<Vec<User>, Error>;

    /// Apply `changes` to the user with `id` and return the updated user.
    fn update(&self, id: UserId, changes: UserChanges) -> Result<User, Error>;

    /// Delete the user with `id`.
    ///
    /// Returns [Error::NotFound] if no user with the given ID exists.
    fn delete(&self, id: UserId) -> Result<(), Error>;

    /// The number of users in the store.
    fn count(&self) -> Result<i64, Error>;
}

const SELECT_USER: &str = "SELECT id, name, email, password, created_at, updated_at FROM user";
const RETURNING_USER: &str = "RETURNING id, name, email, password, created_at, updated_at";

/// Handles the creation and retrieval of User objects.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new user store.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl UserStore for SQLiteUserStore {
    /// Create and insert a new user into the database.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateEmail] if the email is already in use,
    /// [Error::DatabaseLockError] if the lock is poisoned or [Error::SqlError]
    /// if an SQL related error occurred.
    fn create(&self, user: NewUser) -> Result<User, Error> {
        let now = timestamp::now()?;

        self.lock()?
            .query_row(
                &format!(
                    "INSERT INTO user (name, email, password, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?4) {RETURNING_USER}"
                ),
                (
                    &user.name,
                    user.email.as_str(),
                    &user.password_hash.to_string(),
                    &now,
                ),
                map_user_row,
            )
            .map_err(Error::from)
    }

    fn get(&self, id: UserId) -> Result<User, Error> {
        self.lock()?
            .query_row(
                &format!("{SELECT_USER} WHERE id = :id"),
                &[(":id", &id.as_i64())],
                map_user_row,
            )
            .map_err(Error::from)
    }

    fn get_by_email(&self, email: &EmailAddress) -> Result<User, Error> {
        self.lock()?
            .query_row(
                &format!("{SELECT_USER} WHERE email = :email"),
                &[(":email", email.as_str())],
                map_user_row,
            )
            .map_err(Error::from)
    }

    fn get_all(&self) -> Result<Vec<User>, Error> {
        let connection = self.lock()?;
        let mut statement =
            connection.prepare(&format!("{SELECT_USER} ORDER BY created_at DESC, id DESC"))?;

        statement
            .query_map([], map_user_row)?
            .map(|maybe_user| maybe_user.map_err(Error::from))
            .collect()
    }

    /// Overwrite the name and email of the user with `id`, and the password
    /// if `changes` holds a new hash. `updated_at` is set to the current time.
    fn update(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        let now = timestamp::now()?;
        let password: Option<&str> = changes.password_hash.as_ref().map(|hash| hash.as_ref());

        self.lock()?
            .query_row(
                &format!(
                    "UPDATE user SET
                        name = ?1,
                        email = ?2,
                        password = COALESCE(?3, password),
                        updated_at = ?4
                    WHERE id = ?5 {RETURNING_USER}"
                ),
                (
                    &changes.name,
                    changes.email.as_str(),
                    password,
                    &now,
                    id.as_i64(),
                ),
                map_user_row,
            )
            .map_err(Error::from)
    }

    fn delete(&self, id: UserId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM user WHERE id = :id", &[(":id", &id.as_i64())])?;

        if rows_affected == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }

    fn count(&self) -> Result<i64, Error> {
        self.lock()?
            .query_row("SELECT COUNT(id) FROM user", [], |row| row.get(0))
            .map_err(Error::from)
    }
}
