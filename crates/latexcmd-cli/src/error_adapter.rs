//! Error adapter for converting LatexCmdError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Formula errors
//! carry their category as the diagnostic code and a remediation hint as help.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use latexcmd::LatexCmdError;

/// Adapter rendering a [`LatexCmdError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a LatexCmdError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LatexCmdError::Io(_) => "latexcmd::io".to_string(),
            LatexCmdError::Formula(err) => format!("latexcmd::{}", err.category()),
            LatexCmdError::MissingTool { .. } => "latexcmd::missing_tool".to_string(),
            LatexCmdError::ToolFailed { .. } => "latexcmd::tool_failed".to_string(),
            LatexCmdError::Config(_) => "latexcmd::config".to_string(),
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            LatexCmdError::Formula(err) => err.category().help()?,
            LatexCmdError::MissingTool { .. } => {
                "install a TeX distribution that provides `latex` and `dvisvgm`, or point the configuration at them"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use latexcmd::{ErrorCategory, FormulaError};

    use super::*;

    fn code(err: &LatexCmdError) -> Option<String> {
        ErrorAdapter(err).code().map(|c| c.to_string())
    }

    fn help(err: &LatexCmdError) -> Option<String> {
        ErrorAdapter(err).help().map(|h| h.to_string())
    }

    #[test]
    fn test_formula_error() {
        let err = LatexCmdError::from(FormulaError::new(
            r#"Undefined control sequence: "\fracc""#,
            ErrorCategory::UndefinedControlSequence,
        ));

        assert_eq!(
            ErrorAdapter(&err).to_string(),
            r#"Undefined control sequence: "\fracc""#
        );
        assert_eq!(
            code(&err).as_deref(),
            Some("latexcmd::undefined_control_sequence")
        );
        assert_eq!(
            help(&err).as_deref(),
            ErrorCategory::UndefinedControlSequence.help()
        );
    }

    #[test]
    fn test_unknown_formula_error_has_no_help() {
        let err = LatexCmdError::from(FormulaError::new(
            "Unknown Error.",
            ErrorCategory::Unknown,
        ));

        assert_eq!(code(&err).as_deref(), Some("latexcmd::unknown"));
        assert_eq!(help(&err), None);
    }

    #[test]
    fn test_missing_tool() {
        let err = LatexCmdError::MissingTool {
            program: "dvisvgm".to_string(),
        };

        assert_eq!(code(&err).as_deref(), Some("latexcmd::missing_tool"));
        assert!(help(&err).is_some());
    }

    #[test]
    fn test_io_error() {
        let err = LatexCmdError::Io(std::io::Error::other("disk full"));

        assert_eq!(ErrorAdapter(&err).to_string(), "I/O error: disk full");
        assert_eq!(code(&err).as_deref(), Some("latexcmd::io"));
        assert!(ErrorAdapter(&err).labels().is_none());
    }
}
