//! Defines the endpoint for creating a new transaction.

use axum::{extract::State, http::StatusCode, response::Response};
use time::OffsetDateTime;

use crate::{
    payload::Payload,
    response::Envelope,
    transaction::{TransactionState, TransactionStore, form::TransactionForm},
};

const FAILURE: &str = "Failed to create transaction";

/// A route handler for creating a new transaction, responds with the
/// transaction and `201 Created` on success.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Payload(form): Payload<TransactionForm>,
) -> Response {
    let today = OffsetDateTime::now_utc().date();

    let fields = match form.into_fields(today) {
        Ok(fields) => fields,
        Err(error) => return error.into_failure_response(FAILURE),
    };

    match state.store.create(fields) {
        Ok(transaction) => {
            Envelope::new("Transaction created", transaction).with_status(StatusCode::CREATED)
        }
        Err(error) => error.into_failure_response(FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use time::{Duration, OffsetDateTime};

    use crate::{
        TransactionStore, endpoints,
        test_utils::{assert_field_error, create_test_user, get_test_server, transaction_store},
    };

    #[tokio::test]
    async fn create_transaction_succeeds() {
        let (server, state) = get_test_server();
        let user = create_test_user(&state, "Ann", "ann@example.com");

        let response = server
            .post(endpoints::NEW_TRANSACTION)
            .json(&json!({
                "user_id": user.id.as_i64(),
                "amount": -4.5,
                "date": "2025-03-04",
                "description": "Coffee",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Transaction created");
        assert_eq!(body["data"]["user_id"], user.id.as_i64());
        assert_eq!(body["data"]["amount"], -4.5);
        assert_eq!(body["data"]["date"], "2025-03-04");
        assert_eq!(body["data"]["description"], "Coffee");
        assert_eq!(transaction_store(&state).count(), Ok(1));
    }

    #[tokio::test]
    async fn create_transaction_from_form_succeeds() {
        let (server, state) = get_test_server();
        let user = create_test_user(&state, "Ann", "ann@example.com");
        let user_id = user.id.to_string();

        let response = server
            .post(endpoints::NEW_TRANSACTION)
            .form(&[
                ("user_id", user_id.as_str()),
                ("amount", "100"),
                ("date", "2025-03-04"),
            ])
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["data"]["description"], "");
    }

    #[tokio::test]
    async fn create_transaction_for_unknown_user_fails() {
        let (server, state) = get_test_server();

        let response = server
            .post(endpoints::NEW_TRANSACTION)
            .json(&json!({ "user_id": 42, "amount": 1.0, "date": "2025-03-04" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_field_error(&response, "user_id");
        assert_eq!(transaction_store(&state).count(), Ok(0));
    }

    #[tokio::test]
    async fn create_transaction_with_future_date_fails() {
        let (server, state) = get_test_server();
        let user = create_test_user(&state, "Ann", "ann@example.com");
        let tomorrow = OffsetDateTime::now_utc().date() + Duration::days(1);

        let response = server
            .post(endpoints::NEW_TRANSACTION)
            .json(&json!({
                "user_id": user.id.as_i64(),
                "amount": 1.0,
                "date": tomorrow.to_string(),
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_field_error(&response, "date");
        assert_eq!(transaction_store(&state).count(), Ok(0));
    }

    #[tokio::test]
    async fn create_transaction_with_non_numeric_amount_fails() {
        let (server, state) = get_test_server();
        let user = create_test_user(&state, "Ann", "ann@example.com");

        let response = server
            .post(endpoints::NEW_TRANSACTION)
            .json(&json!({
                "user_id": user.id.as_i64(),
                "amount": "lots",
                "date": "2025-03-04",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<Value>()["message"].is_string());
        assert_eq!(transaction_store(&state).count(), Ok(0));
    }

    #[tokio::test]
    async fn create_transaction_with_non_finite_amount_fails() {
        let (server, state) = get_test_server();
        let user = create_test_user(&state, "Ann", "ann@example.com");
        let user_id = user.id.to_string();

        for amount in ["inf", "-inf", "NaN"] {
            let response = server
                .post(endpoints::NEW_TRANSACTION)
                .form(&[
                    ("user_id", user_id.as_str()),
                    ("amount", amount),
                    ("date", "2025-03-04"),
                ])
                .await;

            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            assert_field_error(&response, "amount");
        }

        assert_eq!(transaction_store(&state).count(), Ok(0));
    }
}
