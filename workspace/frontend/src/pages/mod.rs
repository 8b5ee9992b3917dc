pub mod bill_form;
pub mod login;
pub mod not_found;
pub mod register;

/// Shown by actions that have no backing service yet.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented yet";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Something went wrong. Contact support!";
