//! The standalone document a formula is compiled in.
//!
//! The whole document sits on a single line, so the compiler always reports
//! errors in the formula at `l.1` and shows the formula at the end of the
//! context line.

use std::{fmt, fs, io, path::Path};

use crate::config::DocumentConfig;

/// Base name of the document and of every file the compiler derives from it.
pub const DOCUMENT_STEM: &str = "formula";

/// A formula wrapped in a minimal document.
#[derive(Debug, Clone, Copy)]
pub struct StandaloneDocument<'a> {
    config: &'a DocumentConfig,
    formula: &'a str,
}

impl<'a> StandaloneDocument<'a> {
    /// Wrap `formula` in a document shaped by `config`.
    pub fn new(config: &'a DocumentConfig, formula: &'a str) -> Self {
        Self { config, formula }
    }

    /// Write the document to `path`.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for StandaloneDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\documentclass{{{}}}", self.config.class())?;
        for package in self.config.packages() {
            write!(f, "\\usepackage{{{package}}}")?;
        }
        write!(f, "\\begin{{document}}${}$\\end{{document}}", self.formula)
    }
}
