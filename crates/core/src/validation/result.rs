//! Validation result type shared by every check.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Outcome of a check: the accumulated rule violations, in check order.
///
/// `valid` is always `errors.is_empty()`; build results through
/// [`ValidationResult::from_errors`] to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn ok() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Append `other`'s errors after this result's errors.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        Self::from_errors(self.errors)
    }

    /// Turn a failed result into [`CoreError::Validation`], listing every
    /// violation separated by `"; "`. Passing results are returned as-is.
    pub fn into_result(self) -> Result<Self, CoreError> {
        if self.valid {
            Ok(self)
        } else {
            Err(CoreError::Validation(self.errors.join("; ")))
        }
    }
}
