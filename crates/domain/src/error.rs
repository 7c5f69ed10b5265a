//! Error types for the registration domain
//!
//! Validation never surfaces to the player: the panel refuses the submit and
//! the caller logs the reason. The variants still carry enough detail to make
//! that log line useful.

use std::fmt;

use thiserror::Error;

/// A field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    DateOfBirth,
    Height,
    Gender,
}

impl FormField {
    /// Returns the wire-style name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::DateOfBirth => "dateOfBirth",
            FormField::Height => "height",
            FormField::Gender => "gender",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reasons a submit is refused
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Submit arrived while the panel is hidden
    #[error("Registration panel is not visible")]
    NotVisible,

    /// A required field is empty or unset
    #[error("Missing required field: {0}")]
    MissingField(FormField),

    /// Height text does not start with an integer
    #[error("Height is not a number: {0:?}")]
    InvalidHeight(String),

    /// Height parsed but lies outside the configured bounds
    #[error("Height {height} is outside the allowed range {min}-{max}")]
    HeightOutOfRange { height: i64, min: i32, max: i32 },

    /// Name is empty once non-letters are stripped and whitespace trimmed
    #[error("{0} is empty after sanitization")]
    EmptyName(FormField),

    /// Date of birth is not a valid ISO calendar date
    #[error("Invalid date of birth: {0:?}")]
    InvalidDate(String),
}

impl RegistrationError {
    /// Create a missing field error
    pub fn missing(field: FormField) -> Self {
        Self::MissingField(field)
    }

    /// Create an out-of-range height error
    pub fn height_out_of_range(height: i64, min: i32, max: i32) -> Self {
        Self::HeightOutOfRange { height, min, max }
    }
}
