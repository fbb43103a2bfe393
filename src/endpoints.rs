//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/users/{user_id}', are matched by
//! axum's path syntax.

/// The root route which serves the frontend shell.
pub const ROOT: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/coffee";
/// The route for logging in a user.
pub const LOG_IN: &str = "/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/log_out";
/// The route for the logged in user's own details.
pub const CURRENT_USER: &str = "/user";

/// The route to list and create users.
pub const USERS: &str = "/users";
/// The route to show, update and delete a single user.
pub const USER: &str = "/users/{user_id}";

/// The route to list transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to create a transaction.
pub const NEW_TRANSACTION: &str = "/transaction";
/// The route to show, update and delete a single transaction.
pub const TRANSACTION: &str = "/transaction/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
