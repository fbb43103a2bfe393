//! The request payload for creating and updating transactions.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    database_id::DatabaseId,
    transaction::TransactionFields,
    user::UserId,
    validation::{FieldErrors, finite, not_after_today, required_value},
};

/// The fields a client sends to create or update a transaction.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The ID of the user the transaction belongs to.
    pub user_id: Option<DatabaseId>,
    /// The amount of money spent (negative) or earned (positive).
    pub amount: Option<f64>,
    /// When the transaction happened, formatted as `YYYY-MM-DD`.
    pub date: Option<Date>,
    /// What the transaction was for.
    pub description: Option<String>,
}

impl TransactionForm {
    /// Validate the form against `today`.
    ///
    /// Whether `user_id` refers to a registered user is checked by the
    /// database's foreign key when the transaction is saved.
    ///
    /// # Errors
    ///
    /// Returns [Error::Validation] listing every field that failed validation.
    pub fn into_fields(self, today: Date) -> Result<TransactionFields, Error> {
        let mut errors = FieldErrors::default();

        let user_id = required_value(&mut errors, "user_id", self.user_id);
        let amount = required_value(&mut errors, "amount", self.amount)
            .filter(|&amount| finite(&mut errors, "amount", amount));
        let date = required_value(&mut errors, "date", self.date)
            .filter(|&date| not_after_today(&mut errors, "date", date, today));

        let (Some(user_id), Some(amount), Some(date)) = (user_id, amount, date) else {
            return Err(Error::Validation(errors));
        };

        errors.into_result(TransactionFields {
            user_id: UserId::new(user_id),
            amount,
            date,
            description: self.description.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, user::UserId};

    use super::TransactionForm;

    #[test]
    fn valid_form_defaults_description() {
        let form = TransactionForm {
            user_id: Some(1),
            amount: Some(-12.5),
            date: Some(date!(2025 - 01 - 01)),
            description: None,
        };

        let fields = form.into_fields(date!(2025 - 01 - 01)).unwrap();

        assert_eq!(fields.user_id, UserId::new(1));
        assert_eq!(fields.amount, -12.5);
        assert_eq!(fields.description, "");
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let result = TransactionForm::default().into_fields(date!(2025 - 01 - 01));

        let Err(Error::Validation(errors)) = result else {
            panic!("expected a validation error, got {result:?}");
        };
        assert!(errors.get("user_id").is_some());
        assert!(errors.get("amount").is_some());
        assert!(errors.get("date").is_some());
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        for amount in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let form = TransactionForm {
                user_id: Some(1),
                amount: Some(amount),
                date: Some(date!(2025 - 01 - 01)),
                description: None,
            };

            let result = form.into_fields(date!(2025 - 01 - 01));

            let Err(Error::Validation(errors)) = result else {
                panic!("expected a validation error for {amount}, got {result:?}");
            };
            assert!(errors.get("amount").is_some());
        }
    }

    #[test]
    fn future_date_is_rejected() {
        let form = TransactionForm {
            user_id: Some(1),
            amount: Some(3.0),
            date: Some(date!(2025 - 01 - 02)),
            description: Some("Salary".to_owned()),
        };

        let result = form.into_fields(date!(2025 - 01 - 01));

        let Err(Error::Validation(errors)) = result else {
            panic!("expected a validation error, got {result:?}");
        };
        assert!(errors.get("date").is_some());
    }
}
