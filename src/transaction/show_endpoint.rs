//! Defines the endpoint for showing a single transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    database_id::TransactionId,
    record_path::RecordPath,
    response::Envelope,
    transaction::{TransactionState, TransactionStore},
};

/// A route handler that responds with the transaction `transaction_id`.
pub async fn show_transaction_endpoint(
    State(state): State<TransactionState>,
    RecordPath(transaction_id): RecordPath<TransactionId>,
) -> Response {
    match state.store.get(transaction_id) {
        Ok(transaction) => Envelope::new("Detail of transaction", transaction).into_response(),
        Err(error) => error.into_failure_response("Failed to get transaction"),
    }
}
