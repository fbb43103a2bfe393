use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::json;
use time::macros::date;

use crate::{
    AppState, NewUser, PasswordHash, SQLiteTransactionStore, SQLiteUserStore, Transaction,
    TransactionStore, User, UserId, UserStore, auth::COOKIE_TOKEN, build_router, endpoints,
    transaction::TransactionFields,
};

/// The password of every user made with [create_test_user].
pub(crate) const TEST_PASSWORD: &str = "averysafeandsecurepassword";

/// Create a test server for the full router backed by an in-memory database.
///
/// The state is returned as well so that tests can set up and inspect the
/// database directly.
pub(crate) fn get_test_server() -> (TestServer, AppState) {
    let state = AppState::new(Connection::open_in_memory().unwrap(), "42", 4)
        .expect("Could not create app state.");
    let app = build_router(state.clone());

    (
        TestServer::try_new(app).expect("Could not create test server."),
        state,
    )
}

pub(crate) fn user_store(state: &AppState) -> SQLiteUserStore {
    SQLiteUserStore::new(state.db_connection.clone())
}

pub(crate) fn transaction_store(state: &AppState) -> SQLiteTransactionStore {
    SQLiteTransactionStore::new(state.db_connection.clone())
}

#[track_caller]
pub(crate) fn create_test_user(state: &AppState, name: &str, email: &str) -> User {
    user_store(state)
        .create(NewUser {
            name: name.to_owned(),
            email: email.parse().unwrap(),
            password_hash: PasswordHash::from_raw_password(TEST_PASSWORD, 4).unwrap(),
        })
        .unwrap()
}

#[track_caller]
pub(crate) fn create_test_transaction(state: &AppState, user_id: UserId, amount: f64) -> Transaction {
    transaction_store(state)
        .create(TransactionFields {
            user_id,
            amount,
            date: date!(2025 - 01 - 01),
            description: String::new(),
        })
        .unwrap()
}

/// Create the user "test@example.com", log them in and return the auth cookie.
pub(crate) async fn log_in_test_user(server: &TestServer, state: &AppState) -> Cookie<'static> {
    create_test_user(state, "Test", "test@example.com");

    let response = server
        .post(endpoints::LOG_IN)
        .json(&json!({ "email": "test@example.com", "password": TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
    response.cookie(COOKIE_TOKEN)
}
