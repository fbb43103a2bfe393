//! Authentication middleware that validates cookies and extends sessions.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use time::Duration;

use crate::{
    AppState, Error,
    auth::cookie::{extend_auth_cookie_duration_if_needed, get_token_from_cookies},
};

/// The state needed for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware function that checks for a valid authorization cookie.
/// The user ID is placed into request and then the request executed normally
/// if the cookie is valid, otherwise `401 Unauthorized` is returned.
///
/// The cookie's expiry is pushed back to at least the configured cookie
/// duration from now on every successful request.
///
/// **Note**: Route handlers can use the function argument `Extension(user_id): Extension<UserId>` to receive the user ID.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key` for decrypting and verifying the cookie contents.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}.");
            return Error::Unauthenticated.into_response();
        }
    };
    let user_id = match get_token_from_cookies(&jar) {
        Ok(token) => token.user_id,
        Err(error) => return error.into_response(),
    };

    parts.extensions.insert(user_id);
    let request = Request::from_parts(parts, body);
    let response = next.run(request).await;

    let (mut parts, body) = response.into_parts();
    let jar = match extend_auth_cookie_duration_if_needed(jar.clone(), state.cookie_duration) {
        Ok(updated_jar) => updated_jar,
        Err(err) => {
            tracing::error!("Error extending cookie duration: {err:?}. Rolling back cookie jar.");
            jar
        }
    };
    for (key, val) in jar.into_response().headers().iter() {
        if key != SET_COOKIE {
            continue;
        }

        parts.headers.append(key, val.to_owned());
    }

    Response::from_parts(parts, body)
}

#[cfg(test)]
mod auth_guard_tests {
    use axum::{
        Extension, Router,
        extract::Path,
        http::StatusCode,
        middleware,
        routing::{get, post},
    };
    use axum_extra::extract::{
        PrivateCookieJar,
        cookie::{Cookie, Key, SameSite},
    };
    use axum_test::{TestResponse, TestServer};
    use serde_json::{Value, json};
    use sha2::Digest;
    use time::{Duration, OffsetDateTime};

    use crate::{
        Error,
        auth::{AuthState, COOKIE_TOKEN, DEFAULT_COOKIE_DURATION, auth_guard, set_auth_cookie},
        endpoints::format_endpoint,
        user::UserId,
    };

    async fn test_handler(Extension(user_id): Extension<UserId>) -> String {
        user_id.to_string()
    }

    /// Log in user 1 with a cookie that lasts `seconds`.
    async fn stub_log_in_route(
        Path(seconds): Path<i64>,
        jar: PrivateCookieJar,
    ) -> Result<PrivateCookieJar, Error> {
        set_auth_cookie(jar, UserId::new(1), Duration::seconds(seconds))
    }

    const TEST_LOG_IN_ROUTE_PATH: &str = "/log_in/{seconds}";
    const TEST_PROTECTED_ROUTE: &str = "/protected";

    fn get_test_server() -> TestServer {
        let hash = sha2::Sha512::digest("nafstenoas");
        let state = AuthState {
            cookie_key: Key::from(&hash),
            cookie_duration: DEFAULT_COOKIE_DURATION,
        };

        let app = Router::new()
            .route(TEST_PROTECTED_ROUTE, get(test_handler))
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))
            .route(TEST_LOG_IN_ROUTE_PATH, post(stub_log_in_route))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    async fn log_in(server: &TestServer, seconds: i64) -> Cookie<'static> {
        let response = server
            .post(&format_endpoint(TEST_LOG_IN_ROUTE_PATH, seconds))
            .await;

        response.assert_status_ok();
        response.cookie(COOKIE_TOKEN)
    }

    #[track_caller]
    fn assert_unauthenticated(response: &TestResponse) {
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Unauthenticated." })
        );
    }

    #[track_caller]
    fn assert_date_time_close(left: OffsetDateTime, right: OffsetDateTime) {
        assert!(
            (left - right).abs() < Duration::seconds(1),
            "got date time {:?}, want {:?}",
            left,
            right
        );
    }

    #[tokio::test]
    async fn get_protected_route_with_valid_cookie() {
        let server = get_test_server();
        let token_cookie = log_in(&server, 300).await;

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(token_cookie)
            .await;

        response.assert_status_ok();
        response.assert_text("1");
    }

    #[tokio::test]
    async fn auth_guard_extends_valid_cookie_duration() {
        let server = get_test_server();
        let token_cookie = log_in(&server, 5).await;
        let response_time = OffsetDateTime::now_utc();
        assert_date_time_close(
            token_cookie.expires_datetime().unwrap(),
            response_time + Duration::seconds(5),
        );

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(token_cookie)
            .await;

        let auth_cookie = response.cookie(COOKIE_TOKEN);
        assert_date_time_close(
            auth_cookie.expires_datetime().unwrap(),
            response_time + DEFAULT_COOKIE_DURATION,
        );
        assert_eq!(auth_cookie.secure(), Some(true));
        assert_eq!(auth_cookie.http_only(), Some(true));
        assert_eq!(auth_cookie.same_site(), Some(SameSite::Strict));
    }

    #[tokio::test]
    async fn auth_guard_does_not_shorten_long_cookie() {
        let server = get_test_server();
        let token_cookie = log_in(&server, 3600).await;
        let want = token_cookie.expires_datetime().unwrap();

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(token_cookie)
            .await;

        assert_date_time_close(response.cookie(COOKIE_TOKEN).expires_datetime().unwrap(), want);
    }

    #[tokio::test]
    async fn get_protected_route_with_no_auth_cookie_is_unauthenticated() {
        let server = get_test_server();

        let response = server.get(TEST_PROTECTED_ROUTE).await;

        assert_unauthenticated(&response);
    }

    #[tokio::test]
    async fn get_protected_route_with_invalid_auth_cookie_is_unauthenticated() {
        let server = get_test_server();

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(Cookie::build((COOKIE_TOKEN, "FOOBAR")).build())
            .await;

        assert_unauthenticated(&response);
    }

    #[tokio::test]
    async fn get_protected_route_with_expired_auth_cookie_is_unauthenticated() {
        let server = get_test_server();
        let token_cookie = log_in(&server, -1).await;

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(token_cookie)
            .await;

        assert_unauthenticated(&response);
    }
}
