use rust_decimal::Decimal;
use thiserror::Error;

use crate::bill::{BillDraft, StatusDate};

/// First rule a bill draft breaks. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BillValidationError {
    #[error("Fill in a category")]
    MissingCategory,
    #[error("Value must be greater than 0")]
    NonPositiveValue,
    #[error("Fill in due date")]
    MissingDueDate,
    #[error("Surcharges cannot be negative")]
    NegativeSurcharge,
    #[error("Discounts cannot be negative")]
    NegativeDiscount,
    #[error("Fill in cancellation date")]
    MissingCancelDate,
    #[error("Fill in payment date")]
    MissingPaymentDate,
    #[error("Fill in scheduled date")]
    MissingScheduledDate,
}

fn is_negative(amount: Option<Decimal>) -> bool {
    amount.is_some_and(|a| a < Decimal::ZERO)
}

impl BillDraft {
    /// Checks the rules in their fixed order and stops at the first failure.
    pub fn validate(&self) -> Result<(), BillValidationError> {
        let result = self.check_rules();
        if let Err(error) = &result {
            tracing::debug!(?error, status = ?self.status, "bill draft rejected");
        }
        result
    }

    fn check_rules(&self) -> Result<(), BillValidationError> {
        if self.category_id <= 0 {
            return Err(BillValidationError::MissingCategory);
        }

        if !self.value.is_some_and(|v| v > Decimal::ZERO) {
            return Err(BillValidationError::NonPositiveValue);
        }

        if self.due_date.is_none() {
            return Err(BillValidationError::MissingDueDate);
        }

        if is_negative(self.surcharge) {
            return Err(BillValidationError::NegativeSurcharge);
        }

        if is_negative(self.discount) {
            return Err(BillValidationError::NegativeDiscount);
        }

        match self.status.required_date() {
            Some(field) if self.status_date(field).is_none() => Err(match field {
                StatusDate::Cancel => BillValidationError::MissingCancelDate,
                StatusDate::Payment => BillValidationError::MissingPaymentDate,
                StatusDate::Scheduled => BillValidationError::MissingScheduledDate,
            }),
            _ => Ok(()),
        }
    }
}
