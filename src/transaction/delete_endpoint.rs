//! Defines the endpoint for deleting a transaction.

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

/// A route handler for deleting the transaction `transaction_id`.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    RecordPath(transaction_id): RecordPath<TransactionId>,
) -> Response {
    match state.store.delete(transaction_id) {
        Ok(()) => Envelope::message("Transaction deleted").into_response(),
        Err(error) => error.into_failure_response("Failed to delete transaction"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        TransactionStore,
        endpoints::{self, format_endpoint},
        test_utils::{create_test_transaction, create_test_user, get_test_server, transaction_store},
    };

    #[tokio::test]
    async fn delete_twice_deletes_once() {
        let (server, state) = get_test_server();
        let user = create_test_user(&state, "Ann", "ann@example.com");
        let transaction = create_test_transaction(&state, user.id, 1.0);
        let path = format_endpoint(endpoints::TRANSACTION, transaction.id);

        let response = server.delete(&path).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Transaction deleted" })
        );

        server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(transaction_store(&state).count(), Ok(0));
    }
}
