//! The `transactions` resource: the transaction model, its store, and the
//! CRUD route handlers.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod list_endpoint;
mod show_endpoint;
mod state;
mod store;
mod update_endpoint;

pub use core::{Transaction, TransactionFields, create_transaction_table, map_transaction_row};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use show_endpoint::show_transaction_endpoint;
pub use state::TransactionState;
pub use store::{SQLiteTransactionStore, TransactionStore};
pub use update_endpoint::update_transaction_endpoint;
