//! Defines the token stored in the auth cookie.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::user::UserId;

/// A token for authentication, identifying the logged in user and when the
/// session ends.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Token {
    /// The logged in user.
    pub user_id: UserId,

    /// When the token stops being accepted.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl Token {
    /// Whether the token is still valid at `now`.
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        now < self.expires_at
    }
}
