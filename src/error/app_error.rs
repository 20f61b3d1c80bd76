//! Unified error type for state holder operations.

use thiserror::Error;

use super::category::ErrorCategory;
use super::validation::ValidationError;
use crate::api::ApiError;
use crate::traits::PreferencesError;

/// Message shown when the server cannot be reached.
pub const CONNECTIVITY_MESSAGE: &str = "Cannot reach the server. Check your connection.";

/// Message shown for failures that fit no other category.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// The user action that failed. Rejection messages depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    VerifyCode,
    LoadCatalog,
    LoadProduct,
    AddProduct,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::VerifyCode => "verify_code",
            Operation::LoadCatalog => "load_catalog",
            Operation::LoadProduct => "load_product",
            Operation::AddProduct => "add_product",
        }
    }

    /// Text shown when the server refuses this operation.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Operation::Login => "Invalid credentials. Please try again.",
            Operation::Register => "Registration failed. Please check your details.",
            Operation::VerifyCode => "Invalid or expired code.",
            Operation::LoadCatalog => "The catalog could not be loaded.",
            Operation::LoadProduct => "The product could not be loaded.",
            Operation::AddProduct => "The product could not be saved.",
        }
    }
}

/// Error type for every fallible state holder operation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation(_) => ErrorCategory::Validation,
            AppError::Api(err) if err.is_rejection() => ErrorCategory::Rejected,
            AppError::Api(err) if err.is_connectivity() => ErrorCategory::Connectivity,
            AppError::Api(_) | AppError::Preferences(_) => ErrorCategory::Unexpected,
        }
    }

    /// The string stored in state when `operation` fails with this error.
    pub fn user_message(&self, operation: Operation) -> String {
        match self.category() {
            ErrorCategory::Validation => self.to_string(),
            ErrorCategory::Rejected => operation.rejection_message().to_string(),
            ErrorCategory::Connectivity => CONNECTIVITY_MESSAGE.to_string(),
            ErrorCategory::Unexpected => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}
