//! The request payload for creating and updating users, and its validation.

use serde::{Deserialize, Serialize};

use crate::{
    Error, PasswordHash,
    auth::validate_password,
    user::{NewUser, UserChanges},
    validation::{FieldErrors, email, required},
};

/// The fields a client sends to create or update a user.
///
/// Every field is optional at the decoding stage so that missing fields are
/// reported as validation errors rather than decoding errors.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserForm {
    /// The user's display name.
    pub name: Option<String>,
    /// The email address the user logs in with.
    pub email: Option<String>,
    /// The user's password in plain text.
    pub password: Option<String>,
}

impl UserForm {
    /// Validate the form for creating a user and hash the password with `cost`.
    ///
    /// # Errors
    ///
    /// Returns [Error::Validation] listing every field that failed validation,
    /// or [Error::HashingError] if the password could not be hashed.
    pub fn into_new_user(self, cost: u32) -> Result<NewUser, Error> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", self.name.as_deref());
        let email = required(&mut errors, "email", self.email.as_deref())
            .and_then(|value| email(&mut errors, "email", value));
        // Passwords are checked untrimmed, whitespace counts towards the length.
        let password = required(&mut errors, "password", self.password.as_deref())
            .and(self.password.as_deref())
            .and_then(|raw| validate_password(&mut errors, "password", raw));

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(Error::Validation(errors));
        };

        Ok(NewUser {
            name: name.to_owned(),
            email,
            password_hash: PasswordHash::new(password, cost)?,
        })
    }

    /// Validate the form for updating a user.
    ///
    /// The password is optional, an absent or empty password keeps the
    /// current one.
    ///
    /// # Errors
    ///
    /// Returns [Error::Validation] listing every field that failed validation,
    /// or [Error::HashingError] if the new password could not be hashed.
    pub fn into_user_changes(self, cost: u32) -> Result<UserChanges, Error> {
        let mut errors = FieldErrors::default();

        let name = required(&mut errors, "name", self.name.as_deref());
        let email = required(&mut errors, "email", self.email.as_deref())
            .and_then(|value| email(&mut errors, "email", value));
        let password = match self.password.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(validate_password(&mut errors, "password", raw)),
            None => None,
        };

        let (Some(name), Some(email)) = (name, email) else {
            return Err(Error::Validation(errors));
        };

        let password_hash = match password {
            Some(Some(password)) => Some(PasswordHash::new(password, cost)?),
            Some(None) => return Err(Error::Validation(errors)),
            None => None,
        };

        Ok(UserChanges {
            name: name.to_owned(),
            email,
            password_hash,
        })
    }
}
