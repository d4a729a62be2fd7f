//! Classification of a scanned compiler log into a [`FormulaError`].

use std::{fs, path::Path, sync::OnceLock};

use log::{debug, error};
use regex::Regex;

use crate::{
    error::{ErrorCategory, FormulaError},
    refine::{RefinerTable, enquote},
    scanner::RawDiagnostic,
};

/// Message used when the log contains no error line.
pub const UNKNOWN_ERROR: &str = "Unknown Error.";

/// Message used when the error line matches no known category.
pub const UNEXPECTED_ERROR: &str = "Unexpected Error.";

/// Classify the error extracted from a compiler log.
///
/// The first category in [`ErrorCategory::MATCH_ORDER`] whose signature
/// occurs in the error text wins, and its refiner shapes the message.
/// Anything else is [`ErrorCategory::Unknown`].
pub fn classify(raw: RawDiagnostic) -> FormulaError {
    error!(
        error_text:? = raw.error_text,
        added_info:? = raw.added_info;
        "LaTeX compiler reported an error"
    );

    let RawDiagnostic {
        error_text,
        added_info,
    } = raw;

    let Some(error_text) = error_text else {
        return FormulaError::new(UNKNOWN_ERROR, ErrorCategory::Unknown);
    };

    let matched = ErrorCategory::MATCH_ORDER
        .into_iter()
        .find(|category| error_text.contains(category.signature()));

    let (category, text, added_info) = match matched {
        Some(category) => {
            let (text, added_info) =
                RefinerTable::standard().refine(category, error_text, added_info);
            (category, text, added_info)
        }
        None => (
            ErrorCategory::Unknown,
            UNEXPECTED_ERROR.to_string(),
            Some(enquote(error_text.trim())),
        ),
    };

    debug!(category:% = category; "Classified compiler error");
    FormulaError::new(compose(&text, added_info.as_deref()), category)
}

/// Scan and classify the text of a compiler log.
pub fn classify_log(log: &str) -> FormulaError {
    classify(RawDiagnostic::scan(log))
}

/// Read, scan and classify the compiler log at `path`.
///
/// # Errors
///
/// Returns the I/O error if the log cannot be read. An unreadable log is
/// never classified.
pub fn classify_file(path: impl AsRef<Path>) -> std::io::Result<FormulaError> {
    let file = fs::File::open(path)?;
    Ok(classify(RawDiagnostic::read_from(file)?))
}

/// Join the error text and context into the final message.
///
/// The trailing period of the text gives way to `": "` followed by the
/// context.
fn compose(error_text: &str, added_info: Option<&str>) -> String {
    match added_info {
        None => error_text.to_string(),
        Some(added_info) => {
            let head = trailing_period().replace(error_text, "");
            format!("{head}: {added_info}")
        }
    }
}

fn trailing_period() -> &'static Regex {
    static TRAILING_PERIOD: OnceLock<Regex> = OnceLock::new();
    TRAILING_PERIOD
        .get_or_init(|| Regex::new(r"\s*\.?\s*$").expect("trailing period pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(error_text: Option<&str>, added_info: Option<&str>) -> RawDiagnostic {
        RawDiagnostic::new(
            error_text.map(str::to_string),
            added_info.map(str::to_string),
        )
    }

    #[test]
    fn test_no_error_line_is_unknown() {
        let err = classify(raw(None, None));

        assert_eq!(err.category(), ErrorCategory::Unknown);
        assert_eq!(err.text(), "Unknown Error.");
    }

    #[test]
    fn test_unmatched_error_line_is_unexpected() {
        let err = classify(raw(Some("  Emergency stop. "), Some("ignored")));

        assert_eq!(err.category(), ErrorCategory::Unknown);
        assert_eq!(err.text(), "Unexpected Error: \"Emergency stop.\"");
    }

    #[test]
    fn test_undefined_control_sequence() {
        let err = classify(raw(
            Some("Undefined control sequence."),
            Some(r"...lass{standalone}\begin{document}$E = \fracc"),
        ));

        assert_eq!(err.category(), ErrorCategory::UndefinedControlSequence);
        assert_eq!(err.text(), r#"Undefined control sequence: "\fracc""#);
    }

    #[test]
    fn test_undefined_control_sequence_without_context() {
        let err = classify(raw(Some("Undefined control sequence."), None));

        assert_eq!(err.text(), "Undefined control sequence.");
    }

    #[test]
    fn test_extra_bracket() {
        let err = classify(raw(
            Some("Extra }, or forgotten $."),
            Some(r"...ument}$a^{2}}"),
        ));

        assert_eq!(err.category(), ErrorCategory::ExtraBracket);
        assert_eq!(err.text(), r#"Extra }: "a^{2}}""#);
    }

    #[test]
    fn test_extra_bracket_without_context() {
        let err = classify(raw(Some("Extra }, or forgotten $."), None));

        assert_eq!(err.category(), ErrorCategory::ExtraBracket);
        assert_eq!(err.text(), "Extra }.");
    }

    #[test]
    fn test_missing_bracket() {
        let err = classify(raw(Some("Missing } inserted."), Some(r"$\frac{1}{2$")));

        assert_eq!(err.category(), ErrorCategory::MissingBracket);
        assert_eq!(err.text(), "Missing }.");
    }

    #[test]
    fn test_undefined_symbol() {
        let err = classify(raw(
            Some("Package inputenc Error: Invalid UTF-8 byte sequence."),
            Some("$\u{FFFD}$"),
        ));

        assert_eq!(err.category(), ErrorCategory::UndefinedSymbol);
        assert_eq!(
            err.text(),
            "Package inputenc Error: Invalid UTF-8 byte sequence."
        );
    }

    #[test]
    fn test_match_order_decides_between_signatures() {
        let err = classify(raw(
            Some("Missing } inserted after Undefined control sequence."),
            None,
        ));

        assert_eq!(err.category(), ErrorCategory::UndefinedControlSequence);
    }

    #[test]
    fn test_whitespace_only_error_text_is_present() {
        let err = classify(raw(Some("   "), None));

        assert_eq!(err.category(), ErrorCategory::Unknown);
        assert_eq!(err.text(), "Unexpected Error: \"\"");
    }

    #[test]
    fn test_compose_without_context() {
        assert_eq!(compose("Missing }.", None), "Missing }.");
    }

    #[test]
    fn test_compose_replaces_trailing_period() {
        assert_eq!(compose("Extra } .  ", Some("\"a}\"")), "Extra }: \"a}\"");
        assert_eq!(compose("No period", Some("x")), "No period: x");
    }

    #[test]
    fn test_classify_log() {
        let log = "! Extra }, or forgotten $.\nl.1 ...ment}$x}\n";

        let err = classify_log(log);

        assert_eq!(err.category(), ErrorCategory::ExtraBracket);
        assert_eq!(err.text(), "Extra }: \"x}\"");
    }

    #[test]
    fn test_classify_missing_file_is_io_error() {
        let result = classify_file("/nonexistent/latexcmd/formula.log");

        assert!(result.is_err());
    }
}
