//! Cookie based authentication: logging in and out, the auth guard
//! middleware, and password hashing.

mod cookie;
mod current_user;
mod log_in;
mod log_out;
mod middleware;
mod password;
mod token;

pub use cookie::{DEFAULT_COOKIE_DURATION, invalidate_auth_cookie, set_auth_cookie};
pub use current_user::get_current_user;
pub use log_in::post_log_in;
pub use log_out::get_log_out;
pub use middleware::auth_guard;
pub(crate) use password::validate_password;
pub use password::{PasswordHash, ValidatedPassword};

#[cfg(test)]
pub(crate) use cookie::COOKIE_TOKEN;
#[cfg(test)]
pub(crate) use middleware::AuthState;
