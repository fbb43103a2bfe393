//! Defines the endpoint for updating a transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    database_id::TransactionId,
    payload::Payload,
    record_path::RecordPath,
    response::Envelope,
    transaction::{TransactionState, TransactionStore, form::TransactionForm},
};

const FAILURE: &str = "Failed to update transaction";

/// A route handler for replacing every field of the transaction `transaction_id`.
///
/// Responds with 404 if the transaction does not exist. Nothing is changed if
/// any field fails validation.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    RecordPath(transaction_id): RecordPath<TransactionId>,
    Payload(form): Payload<TransactionForm>,
) -> Response {
    if let Err(error) = state.store.get(transaction_id) {
        return error.into_failure_response(FAILURE);
    }

    let fields = match form.into_fields(OffsetDateTime::now_utc().date()) {
        Ok(fields) => fields,
        Err(error) => return error.into_failure_response(FAILURE),
    };

    match state.store.update(transaction_id, fields) {
        Ok(transaction) => Envelope::new("Transaction updated", transaction).into_response(),
        Err(error) => error.into_failure_response(FAILURE),
    }
}
