use axum::extract::FromRef;

use crate::{AppState, user::SQLiteUserStore};

/// The state needed by the `users` route handlers.
#[derive(Debug, Clone)]
pub struct UserState {
    /// The store for reading and writing users.
    pub store: SQLiteUserStore,
    /// The bcrypt cost used when hashing new passwords.
    pub password_hash_cost: u32,
}

impl FromRef<AppState> for UserState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteUserStore::new(state.db_connection.clone()),
            password_hash_cost: state.password_hash_cost,
        }
    }
}
