//! Defines the transaction store trait and an implementation for the SQLite backend.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::TransactionId,
    timestamp,
    transaction::{Transaction, TransactionFields, map_transaction_row},
};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create a new transaction.
    ///
    /// Returns [Error::InvalidUserId] if the user does not exist.
    fn create(&self, fields: TransactionFields) -> Result<Transaction, Error>;

    /// Get a transaction by its ID.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Get every transaction, most recent first.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the fields of the transaction with `id`.
    fn update(&self, id: TransactionId, fields: TransactionFields) -> Result<Transaction, Error>;

    /// Delete the transaction with `id`.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;

    /// The number of transactions in the store.
    fn count(&self) -> Result<i64, Error>;
}

const SELECT_TRANSACTION: &str = "SELECT id, user_id, amount, date, description, created_at, updated_at FROM \"transaction\"";
const RETURNING_TRANSACTION: &str =
    "RETURNING id, user_id, amount, date, description, created_at, updated_at";

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new transaction store.
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

impl TransactionStore for SQLiteTransactionStore {
    fn create(&self, fields: TransactionFields) -> Result<Transaction, Error> {
        let now = timestamp::now()?;

        self.lock()?
            .query_row(
                &format!(
                    "INSERT INTO \"transaction\" (user_id, amount, date, description, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?5) {RETURNING_TRANSACTION}"
                ),
                (
                    fields.user_id.as_i64(),
                    fields.amount,
                    fields.date,
                    &fields.description,
                    &now,
                ),
                map_transaction_row,
            )
            .map_err(Error::from)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.lock()?
            .query_row(
                &format!("{SELECT_TRANSACTION} WHERE id = :id"),
                &[(":id", &id)],
                map_transaction_row,
            )
            .map_err(Error::from)
    }

    /// Transactions are ordered by date, then by when they were recorded.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;
        let mut statement = connection.prepare(&format!(
            "{SELECT_TRANSACTION} ORDER BY date DESC, created_at DESC, id DESC"
        ))?;

        statement
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn update(&self, id: TransactionId, fields: TransactionFields) -> Result<Transaction, Error> {
        let now = timestamp::now()?;

        self.lock()?
            .query_row(
                &format!(
                    "UPDATE \"transaction\" SET
                        user_id = ?1,
                        amount = ?2,
                        date = ?3,
                        description = ?4,
                        updated_at = ?5
                    WHERE id = ?6 {RETURNING_TRANSACTION}"
                ),
                (
                    fields.user_id.as_i64(),
                    fields.amount,
                    fields.date,
                    &fields.description,
                    &now,
                    id,
                ),
                map_transaction_row,
            )
            .map_err(Error::from)
    }

    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }

    fn count(&self) -> Result<i64, Error> {
        self.lock()?
            .query_row("SELECT COUNT(id) FROM \"transaction\"", [], |row| row.get(0))
            .map_err(Error::from)
    }
}
