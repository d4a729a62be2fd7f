//! The FormulaError type returned for classified compiler failures.

use thiserror::Error;

use crate::error::ErrorCategory;

/// An error in a LaTeX formula, as reported by the compiler.
///
/// Comes with a display-ready [`text`](FormulaError::text) and an identifying
/// [`category`](FormulaError::category) for programmatic branching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct FormulaError {
    text: String,
    category: ErrorCategory,
}

impl FormulaError {
    /// Create a new formula error.
    pub fn new(text: impl Into<String>, category: ErrorCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// The complete, user-facing error message.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The category the error was classified into.
    pub fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_text() {
        let err = FormulaError::new("Missing }.", ErrorCategory::MissingBracket);

        assert_eq!(err.to_string(), "Missing }.");
        assert_eq!(err.text(), "Missing }.");
        assert_eq!(err.category(), ErrorCategory::MissingBracket);
    }
}
