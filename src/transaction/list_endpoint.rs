//! Defines the endpoint for listing every transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    response::Envelope,
    transaction::{TransactionState, TransactionStore},
};

/// A route handler that responds with every transaction, most recent first.
pub async fn list_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    match state.store.get_all() {
        Ok(transactions) => Envelope::new("List of all transactions", transactions).into_response(),
        Err(error) => error.into_failure_response("Failed to list transactions"),
    }
}
