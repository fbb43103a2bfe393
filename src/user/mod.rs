//! The `users` resource: the user model, its store, and the CRUD route handlers.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod list_endpoint;
mod show_endpoint;
mod state;
mod store;
mod update_endpoint;

pub use core::{NewUser, User, UserChanges, UserId, create_user_table, map_user_row};
pub use create_endpoint::create_user_endpoint;
pub use delete_endpoint::delete_user_endpoint;
pub use list_endpoint::list_users_endpoint;
pub use show_endpoint::show_user_endpoint;
pub use state::UserState;
pub use store::{SQLiteUserStore, UserStore};
pub use update_endpoint::update_user_endpoint;
