//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    app_shell::get_app_shell,
    auth::{auth_guard, get_current_user, get_log_out, post_log_in},
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        show_transaction_endpoint, update_transaction_endpoint,
    },
    user::{
        create_user_endpoint, delete_user_endpoint, list_users_endpoint, show_user_endpoint,
        update_user_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::ROOT, get(get_app_shell))
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::LOG_IN, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::USERS,
            get(list_users_endpoint).post(create_user_endpoint),
        )
        .route(
            endpoints::USER,
            get(show_user_endpoint)
                .put(update_user_endpoint)
                .patch(update_user_endpoint)
                .delete(delete_user_endpoint),
        )
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint))
        .route(
            endpoints::NEW_TRANSACTION,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(show_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        );

    let protected_routes = Router::new()
        .route(endpoints::CURRENT_USER, get(get_current_user))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}
