//! Creates the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table, user::create_user_table};

/// Enable foreign keys and create the tables for the domain models if they
/// do not already exist.
///
/// The tables are created inside a single exclusive transaction, so either
/// all of them are created or none are.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the SQL statements fail.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_user_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
