//! Error types for latexcmd operations.
//!
//! This module provides the main error type [`LatexCmdError`]. Only
//! [`LatexCmdError::Formula`] describes a problem with the formula itself;
//! every other variant is an infrastructure fault.

use std::{io, process::ExitStatus};

use thiserror::Error;

use latexcmd_diagnostics::FormulaError;

/// The main error type for latexcmd operations.
#[derive(Debug, Error)]
pub enum LatexCmdError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Formula(#[from] FormulaError),

    #[error("`{program}` is not installed or not on the PATH")]
    MissingTool { program: String },

    #[error("`{program}` failed ({status})")]
    ToolFailed { program: String, status: ExitStatus },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LatexCmdError {
    /// Returns the classified formula error, if this is one.
    pub fn formula_error(&self) -> Option<&FormulaError> {
        match self {
            Self::Formula(err) => Some(err),
            _ => None,
        }
    }
}
