pub mod form;
pub mod toast;
