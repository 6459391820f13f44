//! Error types for projboard
//!
//! Centralized error handling using thiserror.

use std::fmt;

use thiserror::Error;

/// Text shown to the user whenever a submission is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input! Try Again!";

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Count,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Count];

    /// Field label as shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Count => "People",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All error types that can occur in projboard
#[derive(Debug, Error)]
pub enum BoardError {
    /// A submitted field did not satisfy its constraints.
    ///
    /// The message is fixed; `field` is kept for logging and tests.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    ValidationFailure { field: Field },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoardError {
    /// The field that failed, if this is a validation failure.
    pub fn field(&self) -> Option<Field> {
        match self {
            BoardError::ValidationFailure { field } => Some(*field),
            BoardError::Io(_) => None,
        }
    }
}

/// Result type alias for projboard operations
pub type Result<T> = std::result::Result<T, BoardError>;
