//! Error model for classified LaTeX compiler failures.
//!
//! - [`ErrorCategory`] enumerates the recognized failure kinds and their
//!   signatures
//! - [`FormulaError`] is the classified error handed back to callers
//!
//! # Example
//!
//! ```
//! # use latexcmd_diagnostics::error::{ErrorCategory, FormulaError};
//! let err = FormulaError::new("Missing }.", ErrorCategory::MissingBracket);
//!
//! assert_eq!(err.to_string(), "Missing }.");
//! assert_eq!(err.category().signature(), "Missing } inserted");
//! ```

mod category;
mod formula_error;

pub use category::ErrorCategory;
pub use formula_error::FormulaError;
