//! Error category classification.
//!
//! Every failure that reaches the state holder falls into exactly one of
//! these categories, and the category decides which message the user sees.

use std::fmt;

/// High-level categorization of errors for messaging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Local input checks failed. No request was sent.
    Validation,

    /// The server answered with a non-2xx status.
    Rejected,

    /// The server could not be reached (connect failure, timeout, I/O).
    Connectivity,

    /// Anything else, including bodies that fail to decode.
    Unexpected,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Rejected => "rejected",
            ErrorCategory::Connectivity => "connectivity",
            ErrorCategory::Unexpected => "unexpected",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::Rejected => "Check the details you entered",
            ErrorCategory::Connectivity => "Check your internet connection and try again",
            ErrorCategory::Unexpected => "Please report this issue if it persists",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
