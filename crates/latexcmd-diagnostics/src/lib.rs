//! # latexcmd diagnostics
//!
//! Classification of LaTeX compiler logs. When `latex` fails on a formula,
//! its log is turned into a single [`FormulaError`] with a clean,
//! user-facing message and an [`ErrorCategory`].
//!
//! ## Usage
//!
//! ```
//! # use latexcmd_diagnostics::{classify_log, ErrorCategory};
//! let log = "! Undefined control sequence.\n\
//!            l.1 ...lass{standalone}\\begin{document}$E = \\fracc\n";
//!
//! let err = classify_log(log);
//! assert_eq!(err.category(), ErrorCategory::UndefinedControlSequence);
//! assert_eq!(err.text(), "Undefined control sequence: \"\\fracc\"");
//! ```
//!
//! The pipeline runs in one pass:
//!
//! 1. **Scan** - Extract the `!` error line and the `l.` context line
//! 2. **Match** - Find the first category whose signature occurs in the error line
//! 3. **Refine** - Let the category's refiner narrow text and context
//! 4. **Compose** - Join both into the final message

mod classify;
pub mod error;
pub mod refine;
mod scanner;

pub use classify::{UNEXPECTED_ERROR, UNKNOWN_ERROR, classify, classify_file, classify_log};
pub use error::{ErrorCategory, FormulaError};
pub use refine::enquote;
pub use scanner::RawDiagnostic;
