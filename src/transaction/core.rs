//! Defines the core data model and table for transactions.

use rusqlite::{Connection, Row};
use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::{database_id::TransactionId, timestamp, user::UserId};

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The user the transaction belongs to.
    pub user_id: UserId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values are income, negative values are spending.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last updated.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The validated fields used to create a transaction or replace an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    /// The user the transaction belongs to.
    pub user_id: UserId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened, no later than today.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
}

/// Create the transaction table in the database.
///
/// Deleting a user deletes their transactions.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_user_id ON \"transaction\"(user_id);",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date, created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns `id, user_id, amount, date, description, created_at, updated_at`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = UserId::new(row.get(1)?);
    let amount = row.get(2)?;
    let date = row.get(3)?;
    let description = row.get(4)?;

    Ok(Transaction {
        id,
        user_id,
        amount,
        date,
        description,
        created_at: timestamp::from_row(row, 5)?,
        updated_at: timestamp::from_row(row, 6)?,
    })
}
