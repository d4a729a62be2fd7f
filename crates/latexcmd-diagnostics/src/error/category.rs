//! Error categories recognized in LaTeX compiler logs.
//!
//! Each category carries a signature: a literal substring that identifies the
//! category when found in the error line of a compiler log.

use std::fmt;

/// Categories of formula errors reported by the LaTeX compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unidentifiable error.
    ///
    /// Either the log contained no error line at all, or the error line did
    /// not match any known signature.
    Unknown,

    /// Undefined control sequence.
    ///
    /// A command such as `\fracc` is not defined by LaTeX or any loaded package.
    UndefinedControlSequence,

    /// Undefined symbol.
    ///
    /// The formula contains a byte sequence the compiler cannot decode.
    UndefinedSymbol,

    /// Extra closing bracket.
    ///
    /// A `}` was found without a matching `{`.
    ExtraBracket,

    /// Missing closing bracket.
    ///
    /// A `{` was never closed.
    MissingBracket,
}

impl ErrorCategory {
    /// Number of declared categories, `Unknown` included.
    pub const COUNT: usize = 5;

    /// Every declared category, `Unknown` first.
    pub const ALL: [ErrorCategory; ErrorCategory::COUNT] = [
        ErrorCategory::Unknown,
        ErrorCategory::UndefinedControlSequence,
        ErrorCategory::UndefinedSymbol,
        ErrorCategory::ExtraBracket,
        ErrorCategory::MissingBracket,
    ];

    /// Categories tried against an error line, in priority order.
    ///
    /// `Unknown` is never a candidate: it is only assigned as a fallback.
    pub const MATCH_ORDER: [ErrorCategory; ErrorCategory::COUNT - 1] = [
        ErrorCategory::UndefinedControlSequence,
        ErrorCategory::UndefinedSymbol,
        ErrorCategory::ExtraBracket,
        ErrorCategory::MissingBracket,
    ];

    /// Returns the substring identifying this category in a compiler error line.
    ///
    /// The signature of [`ErrorCategory::Unknown`] is empty.
    pub fn signature(&self) -> &'static str {
        match self {
            ErrorCategory::Unknown => "",
            ErrorCategory::UndefinedControlSequence => "Undefined control sequence",
            ErrorCategory::UndefinedSymbol => "Invalid UTF-8 byte sequence",
            ErrorCategory::ExtraBracket => "Extra }, or forgotten $",
            ErrorCategory::MissingBracket => "Missing } inserted",
        }
    }

    /// Returns the snake case name of the category (e.g. "missing_bracket").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Unknown => "unknown",
            ErrorCategory::UndefinedControlSequence => "undefined_control_sequence",
            ErrorCategory::UndefinedSymbol => "undefined_symbol",
            ErrorCategory::ExtraBracket => "extra_bracket",
            ErrorCategory::MissingBracket => "missing_bracket",
        }
    }

    /// Returns a remediation hint for the user, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ErrorCategory::Unknown => None,
            ErrorCategory::UndefinedControlSequence => Some(
                "check the spelling of the command, or whether it needs a package that is not loaded",
            ),
            ErrorCategory::UndefinedSymbol => Some(
                "the formula contains a character the compiler cannot read; use the matching LaTeX command instead",
            ),
            ErrorCategory::ExtraBracket => Some("remove the `}` that has no matching `{`"),
            ErrorCategory::MissingBracket => Some("close every `{` with a matching `}`"),
        }
    }

    /// Position of the category in [`ErrorCategory::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            ErrorCategory::Unknown => 0,
            ErrorCategory::UndefinedControlSequence => 1,
            ErrorCategory::UndefinedSymbol => 2,
            ErrorCategory::ExtraBracket => 3,
            ErrorCategory::MissingBracket => 4,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
