//! Defines the endpoint for listing every user.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    response::Envelope,
    user::{UserState, UserStore},
};

/// A route handler that responds with every user, newest first.
pub async fn list_users_endpoint(State(state): State<UserState>) -> Response {
    match state.store.get_all() {
        Ok(users) => Envelope::new("List of all users", users).into_response(),
        Err(error) => error.into_failure_response("Failed to list users"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{
        endpoints,
        test_utils::{create_test_user, get_test_server},
    };

    #[tokio::test]
    async fn lists_users_newest_first() {
        let (server, state) = get_test_server();
        let ann = create_test_user(&state, "Ann", "ann@example.com");
        let bob = create_test_user(&state, "Bob", "bob@example.com");

        let response = server.get(endpoints::USERS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "List of all users");
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|user| user["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![bob.id.as_i64(), ann.id.as_i64()]);
    }

    #[tokio::test]
    async fn empty_list_has_empty_data() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::USERS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], Value::Array(vec![]));
    }
}
