//! Declarative validation rules for request payloads.
//!
//! Each rule checks one field and records a human readable message against
//! the field name when it fails. Handlers collect every failure before
//! returning so that the client can fix all of its input in one go.

use std::{collections::BTreeMap, str::FromStr};

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Error messages for each field that failed validation, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create a set of field errors with one message for `field`.
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    /// Record a failure for `field`.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.to_owned());
    }

    /// Whether no field has failed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Return `value` if no errors were recorded, otherwise [Error::Validation].
    pub fn into_result<T>(self, value: T) -> Result<T, Error> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(Error::Validation(self))
        }
    }
}

/// Check that `value` is present and not just whitespace.
///
/// Returns the trimmed value if the rule passes.
pub fn required<'a>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Some(value),
        None => {
            errors.add(field, &format!("The {field} field is required."));
            None
        }
    }
}

/// Check that a non-string `value` is present.
pub fn required_value<T: Copy>(errors: &mut FieldErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, &format!("The {field} field is required."));
    }

    value
}

/// Check that `value` is a finite number, i.e. not infinite or NaN.
pub fn finite(errors: &mut FieldErrors, field: &str, value: f64) -> bool {
    if value.is_finite() {
        true
    } else {
        errors.add(field, &format!("The {field} field must be a number."));
        false
    }
}

/// Check that `value` is a syntactically valid email address.
pub fn email(errors: &mut FieldErrors, field: &str, value: &str) -> Option<EmailAddress> {
    match EmailAddress::from_str(value) {
        Ok(email) => Some(email),
        Err(error) => {
            tracing::debug!("rejected email address {value:?}: {error}");
            errors.add(
                field,
                &format!("The {field} field must be a valid email address."),
            );
            None
        }
    }
}

/// Check that `value` has at least `min` characters.
pub fn min_length(errors: &mut FieldErrors, field: &str, value: &str, min: usize) -> bool {
    if value.chars().count() >= min {
        true
    } else {
        errors.add(
            field,
            &format!("The {field} field must be at least {min} characters."),
        );
        false
    }
}

/// Check that `value` is no later than `today`.
pub fn not_after_today(errors: &mut FieldErrors, field: &str, value: Date, today: Date) -> bool {
    if value <= today {
        true
    } else {
        errors.add(
            field,
            &format!("The {field} field must be a date before or equal to today."),
        );
        false
    }
}
