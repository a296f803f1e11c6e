//! Display name validation.

use thiserror::Error;

/// Minimum length of a trimmed name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    #[error("Please enter at least {min} characters")]
    TooShort { min: usize },
}

/// Result of [`validate_name`]. Invalid names carry the error to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameValidation {
    error: Option<NameError>,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<NameError> {
        self.error
    }

    /// Message to show next to the field, if any.
    pub fn message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

impl From<NameValidation> for Result<(), NameError> {
    fn from(validation: NameValidation) -> Self {
        match validation.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Checks that the trimmed name has at least [`MIN_NAME_LENGTH`] characters.
pub fn validate_name(name: &str) -> NameValidation {
    let error = (name.trim().chars().count() < MIN_NAME_LENGTH).then_some(NameError::TooShort {
        min: MIN_NAME_LENGTH,
    });
    NameValidation { error }
}
