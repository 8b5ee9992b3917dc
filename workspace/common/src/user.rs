use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("Fill in your name")]
    MissingName,
    #[error("Fill in your e-mail")]
    MissingEmail,
    #[error("Fill in a password")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Sign-up form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub password_confirmation: String,
}

impl RegisterDraft {
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(UserValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(UserValidationError::MissingPassword);
        }
        if self.password != self.password_confirmation {
            tracing::debug!("registration rejected: password confirmation differs");
            return Err(UserValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Sign-in form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginDraft {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.email.trim().is_empty() {
            return Err(UserValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(UserValidationError::MissingPassword);
        }
        Ok(())
    }
}
