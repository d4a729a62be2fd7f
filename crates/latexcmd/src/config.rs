//! Configuration types for formula rendering.
//!
//! This module provides configuration structures that select the external
//! programs and shape the document wrapping the formula. All types implement
//! [`serde::Deserialize`] for loading from external sources; missing fields
//! fall back to their defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining toolchain and document settings.
//! - [`ToolchainConfig`] - The compiler and converter programs and converter options.
//! - [`DocumentConfig`] - Document class and packages of the wrapping document.
//!
//! # Example
//!
//! ```
//! # use latexcmd::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.toolchain().latex(), "latex");
//! assert_eq!(config.document().class(), "standalone");
//! ```

use serde::Deserialize;

/// Top-level configuration combining toolchain and document settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Toolchain configuration section.
    #[serde(default)]
    toolchain: ToolchainConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `toolchain` - External programs and converter options.
    /// * `document` - Settings of the wrapping document.
    pub fn new(toolchain: ToolchainConfig, document: DocumentConfig) -> Self {
        Self {
            toolchain,
            document,
        }
    }

    /// Returns the toolchain configuration.
    pub fn toolchain(&self) -> &ToolchainConfig {
        &self.toolchain
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// External programs used for rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Program compiling the document to DVI.
    latex: String,

    /// Program converting DVI to SVG.
    dvisvgm: String,

    /// Render glyphs as paths instead of embedded fonts (`dvisvgm -n`).
    no_fonts: bool,

    /// Compute the exact bounding box of the glyphs (`dvisvgm -e`).
    exact_bbox: bool,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            latex: "latex".to_string(),
            dvisvgm: "dvisvgm".to_string(),
            no_fonts: true,
            exact_bbox: true,
        }
    }
}

impl ToolchainConfig {
    /// Creates a toolchain running the given programs with default options.
    ///
    /// # Arguments
    ///
    /// * `latex` - Name or path of the LaTeX compiler.
    /// * `dvisvgm` - Name or path of the DVI to SVG converter.
    pub fn new(latex: impl Into<String>, dvisvgm: impl Into<String>) -> Self {
        Self {
            latex: latex.into(),
            dvisvgm: dvisvgm.into(),
            ..Self::default()
        }
    }

    /// Sets whether glyphs are rendered as paths.
    pub fn with_no_fonts(mut self, no_fonts: bool) -> Self {
        self.no_fonts = no_fonts;
        self
    }

    /// Sets whether the exact bounding box is computed.
    pub fn with_exact_bbox(mut self, exact_bbox: bool) -> Self {
        self.exact_bbox = exact_bbox;
        self
    }

    /// Returns the LaTeX compiler program.
    pub fn latex(&self) -> &str {
        &self.latex
    }

    /// Returns the DVI to SVG converter program.
    pub fn dvisvgm(&self) -> &str {
        &self.dvisvgm
    }

    /// Returns whether glyphs are rendered as paths instead of fonts.
    pub fn no_fonts(&self) -> bool {
        self.no_fonts
    }

    /// Returns whether the converter computes the exact bounding box.
    pub fn exact_bbox(&self) -> bool {
        self.exact_bbox
    }
}

/// Settings of the standalone document wrapping the formula.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Document class.
    class: String,

    /// Packages loaded in the preamble.
    packages: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            class: "standalone".to_string(),
            packages: Vec::new(),
        }
    }
}

impl DocumentConfig {
    /// Sets the packages loaded in the preamble.
    pub fn with_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the document class.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the packages loaded in the preamble.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }
}
