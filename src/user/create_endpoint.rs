//! Defines the endpoint for creating a new user.

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};

use crate::{
    payload::Payload,
    response::Envelope,
    user::{UserState, UserStore, form::UserForm},
};

const FAILURE: &str = "Failed to create user";

/// A route handler for creating a new user, responds with the user and
/// `201 Created` on success.
///
/// Nothing is stored if any field fails validation.
pub async fn create_user_endpoint(
    State(state): State<UserState>,
    Payload(form): Payload<UserForm>,
) -> Response {
    let new_user = match form.into_new_user(state.password_hash_cost) {
        Ok(new_user) => new_user,
        Err(error) => return error.into_failure_response(FAILURE),
    };

    match state.store.create(new_user) {
        Ok(user) => Envelope::new("User created", user).with_status(StatusCode::CREATED),
        Err(error) => error.into_failure_response(FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        UserStore, endpoints,
        test_utils::{assert_field_error, create_test_user, get_test_server, user_store},
    };

    #[tokio::test]
    async fn create_user_succeeds() {
        let (server, state) = get_test_server();

        let response = server
            .post(endpoints::USERS)
            .json(&json!({
                "name": "Ann",
                "email": "ann@example.com",
                "password": "hunter22",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "User created");
        assert_eq!(body["data"]["name"], "Ann");
        assert_eq!(body["data"]["email"], "ann@example.com");
        assert!(body["data"]["id"].as_i64().is_some());
        assert!(body["data"].get("password").is_none());
        assert!(body["data"].get("password_hash").is_none());
        assert_eq!(user_store(&state).count(), Ok(1));
    }

    #[tokio::test]
    async fn created_user_can_be_shown_straight_away() {
        let (server, _) = get_test_server();

        let response = server
            .post(endpoints::USERS)
            .form(&[
                ("name", "Ann"),
                ("email", "ann@example.com"),
                ("password", "hunter22"),
            ])
            .await;

        response.assert_status(StatusCode::CREATED);
        let id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        let response = server
            .get(&endpoints::format_endpoint(endpoints::USER, id))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["name"], "Ann");
    }

    #[tokio::test]
    async fn create_user_fails_on_missing_fields() {
        let (server, state) = get_test_server();

        for (payload, field) in [
            (json!({"email": "ann@example.com", "password": "hunter22"}), "name"),
            (json!({"name": "   ", "email": "ann@example.com", "password": "hunter22"}), "name"),
            (json!({"name": "Ann", "password": "hunter22"}), "email"),
            (json!({"name": "Ann", "email": "nope", "password": "hunter22"}), "email"),
            (json!({"name": "Ann", "email": "ann@example.com", "password": "12345"}), "password"),
        ] {
            let response = server.post(endpoints::USERS).json(&payload).await;

            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            assert_field_error(&response, field);
        }

        assert_eq!(user_store(&state).count(), Ok(0));
    }

    #[tokio::test]
    async fn create_user_with_empty_body_reports_every_field() {
        let (server, state) = get_test_server();

        let response = server.post(endpoints::USERS).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        for field in ["name", "email", "password"] {
            assert_field_error(&response, field);
        }
        assert_eq!(user_store(&state).count(), Ok(0));
    }

    #[tokio::test]
    async fn create_user_fails_on_duplicate_email() {
        let (server, state) = get_test_server();
        create_test_user(&state, "Ann", "ann@example.com");

        let response = server
            .post(endpoints::USERS)
            .json(&json!({
                "name": "Another Ann",
                "email": "ann@example.com",
                "password": "hunter22",
            }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let message = response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .to_owned();
        assert!(
            message.starts_with("Failed to create user. Error: "),
            "got message {message:?}"
        );
        assert_eq!(user_store(&state).count(), Ok(1));
    }
}
