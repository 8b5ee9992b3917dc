//! Browser-independent domain types shared by the front end.
//! Everything here is plain data plus the ordered validation rules, so it can
//! be exercised without a DOM.

mod bill;
mod user;
mod validation;

pub use bill::{BillDraft, BillStatus, PaymentMethod, RawBillForm, Recurrence, StatusDate};
pub use user::{LoginDraft, RegisterDraft, UserValidationError};
pub use validation::BillValidationError;
