//! Defines functions for handling user authentication with cookies.

use std::cmp::max;

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::{Error, auth::token::Token, user::UserId};

/// The name of the cookie holding the serialized [Token].
pub(crate) const COOKIE_TOKEN: &str = "token";
/// The default duration for which auth cookies are valid.
pub const DEFAULT_COOKIE_DURATION: Duration = Duration::minutes(5);

/// Add an auth cookie to the cookie jar, indicating that a user is logged in and authenticated.
///
/// Sets the initial expiry of the cookie to `duration` from the current time.
/// You can use [DEFAULT_COOKIE_DURATION] for the default duration.
///
/// Returns the cookie jar with the cookie added.
///
/// # Errors
///
/// Returns an [Error::InvalidDateFormat] if the token cannot be serialized.
pub fn set_auth_cookie(
    jar: PrivateCookieJar,
    user_id: UserId,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    let expires_at = OffsetDateTime::now_utc() + duration;

    set_token(jar, Token { user_id, expires_at })
}

fn set_token(jar: PrivateCookieJar, token: Token) -> Result<PrivateCookieJar, Error> {
    let token_string =
        serde_json::to_string(&token).map_err(|error| Error::InvalidDateFormat(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((COOKIE_TOKEN, token_string))
            .expires(token.expires_at)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    ))
}

/// Set the auth cookie to an invalid value and set its max age to zero, which should delete the cookie on the client side.
pub fn invalidate_auth_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_TOKEN, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Get the token from the auth cookie in `jar`.
///
/// # Errors
///
/// Returns [Error::Unauthenticated] if the cookie is missing, cannot be
/// decrypted or parsed, or the token has expired.
pub(crate) fn get_token_from_cookies(jar: &PrivateCookieJar) -> Result<Token, Error> {
    let cookie = jar.get(COOKIE_TOKEN).ok_or(Error::Unauthenticated)?;
    let token: Token =
        serde_json::from_str(cookie.value_trimmed()).map_err(|_| Error::Unauthenticated)?;

    if token.is_valid_at(OffsetDateTime::now_utc()) {
        Ok(token)
    } else {
        Err(Error::Unauthenticated)
    }
}

/// Set the expiry of the auth cookie in `jar` to the latest of UTC now
/// plus `duration` and the token's current expiry.
///
/// # Errors
///
/// The cookie jar is not modified if an error is returned.
pub(crate) fn extend_auth_cookie_duration_if_needed(
    jar: PrivateCookieJar,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    let token = get_token_from_cookies(&jar)?;

    let new_expiry = OffsetDateTime::now_utc()
        .checked_add(duration)
        .ok_or_else(|| Error::InvalidDateFormat("cookie expiry overflowed".to_owned()))?;

    set_token(
        jar,
        Token {
            user_id: token.user_id,
            expires_at: max(token.expires_at, new_expiry),
        },
    )
}
