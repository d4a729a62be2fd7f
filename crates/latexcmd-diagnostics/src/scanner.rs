//! Extraction of the reported error from a LaTeX compiler log.
//!
//! The compiler marks an error with a line starting with `!`, and points at
//! the offending input with a later line starting with `l.<line number>`.
//! [`RawDiagnostic::scan`] pulls both out of a log without interpreting them.

use std::{
    io::{self, Read},
    sync::OnceLock,
};

use log::trace;
use regex::Regex;

/// Prefix of the line carrying the error message.
const ERROR_MARKER: &str = "!";

/// Prefix of the line pointing at the offending input.
const LINE_MARKER: &str = "l.";

/// Error and context lines extracted from a compiler log, untransformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDiagnostic {
    /// The error line with its `"! "` marker removed.
    pub error_text: Option<String>,
    /// The input context line with its `l.<digits> ` prefix removed.
    pub added_info: Option<String>,
}

impl RawDiagnostic {
    /// Create a raw diagnostic from already extracted parts.
    pub fn new(error_text: Option<String>, added_info: Option<String>) -> Self {
        Self {
            error_text,
            added_info,
        }
    }

    /// Scan the text of a compiler log.
    ///
    /// Every `!` line overwrites the error text; the first `l.` line seen
    /// after an error text was found sets the context and ends the scan. Only
    /// the first reported error is therefore extracted.
    pub fn scan(log: &str) -> Self {
        let mut raw = Self::default();

        for line in log.lines() {
            if line.starts_with(ERROR_MARKER) {
                let text = line.strip_prefix("! ").unwrap_or(line);
                raw.error_text = Some(text.to_string());
            }
            if line.starts_with(LINE_MARKER) && raw.error_text.is_some() {
                raw.added_info = Some(line_number_prefix().replace(line, "").into_owned());
                break;
            }
        }

        trace!(raw:?; "Scanned compiler log");
        raw
    }

    /// Read a compiler log to the end and scan it.
    ///
    /// Logs are decoded lossily: TeX writes input bytes verbatim, so a log may
    /// contain invalid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the reader fails.
    pub fn read_from(mut reader: impl Read) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::scan(&String::from_utf8_lossy(&bytes)))
    }
}

fn line_number_prefix() -> &'static Regex {
    static LINE_NUMBER_PREFIX: OnceLock<Regex> = OnceLock::new();
    LINE_NUMBER_PREFIX
        .get_or_init(|| Regex::new(r"^l\.\d+ ").expect("line number pattern is valid"))
}
