//! latexcmd - Render LaTeX formulas to SVG.
//!
//! A formula is wrapped in a standalone document, compiled to DVI by `latex`
//! and converted to SVG by `dvisvgm`. When compilation fails, the compiler
//! log is classified into a [`FormulaError`] with a readable message.

pub mod config;
pub mod document;
pub mod toolchain;

mod error;

pub use latexcmd_diagnostics::{ErrorCategory, FormulaError, classify_file};

pub use error::LatexCmdError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::TempDir;

use config::AppConfig;
use document::{DOCUMENT_STEM, StandaloneDocument};
use toolchain::Toolchain;

/// Renderer turning LaTeX formulas into SVG images.
///
/// Every render works in its own temporary directory, which is removed
/// when the render returns, successfully or not. Renders do not share state,
/// so one renderer can be used from several threads at once.
///
/// # Examples
///
/// ```rust,no_run
/// use latexcmd::{FormulaRenderer, config::AppConfig};
///
/// let renderer = FormulaRenderer::new(AppConfig::default());
///
/// // Render to a file
/// renderer
///     .render(r"E = mc^2", "energy.svg")
///     .expect("Failed to render");
///
/// // Or get the SVG text
/// let svg = renderer
///     .render_svg(r"\frac{1}{2} mv^2")
///     .expect("Failed to render");
/// println!("{svg}");
/// ```
#[derive(Debug, Default)]
pub struct FormulaRenderer {
    config: AppConfig,
}

impl FormulaRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Toolchain and document settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the renderer's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the configured toolchain.
    pub fn toolchain(&self) -> Toolchain<'_> {
        Toolchain::new(self.config.toolchain())
    }

    /// Render `formula` and write the SVG to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`LatexCmdError::Formula`] if the compiler rejects the
    /// formula. Every other variant reports a problem with the environment:
    /// missing programs, a failing converter, or I/O.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use latexcmd::{ErrorCategory, FormulaRenderer, LatexCmdError};
    ///
    /// let renderer = FormulaRenderer::default();
    /// match renderer.render(r"\fracc{1}{2}", "half.svg") {
    ///     Err(LatexCmdError::Formula(err)) => {
    ///         assert_eq!(err.category(), ErrorCategory::UndefinedControlSequence);
    ///     }
    ///     other => panic!("unexpected result: {other:?}"),
    /// }
    /// ```
    pub fn render(
        &self,
        formula: &str,
        destination: impl AsRef<Path>,
    ) -> Result<(), LatexCmdError> {
        let destination = destination.as_ref();
        info!(formula, destination:? = destination; "Rendering formula");

        let work_dir = TempDir::with_prefix("latexcmd")?;
        let svg = self.render_in(formula, work_dir.path())?;
        fs::copy(&svg, destination)?;

        info!(destination:? = destination; "SVG exported successfully");
        Ok(())
    }

    /// Render `formula` and return the SVG text.
    ///
    /// # Errors
    ///
    /// Same as [`FormulaRenderer::render`].
    pub fn render_svg(&self, formula: &str) -> Result<String, LatexCmdError> {
        info!(formula; "Rendering formula");

        let work_dir = TempDir::with_prefix("latexcmd")?;
        let svg = self.render_in(formula, work_dir.path())?;
        let svg_string = fs::read_to_string(svg)?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    /// Run the toolchain inside `work_dir` and return the SVG path.
    fn render_in(&self, formula: &str, work_dir: &Path) -> Result<PathBuf, LatexCmdError> {
        let document = work_dir.join(DOCUMENT_STEM).with_extension("tex");
        StandaloneDocument::new(self.config.document(), formula).write_to(&document)?;
        debug!(document:? = document; "Standalone document written");

        let toolchain = self.toolchain();
        let dvi = toolchain.compile(&document, work_dir)?;
        debug!(dvi:? = dvi; "Formula compiled");

        let svg = work_dir.join(DOCUMENT_STEM).with_extension("svg");
        toolchain.convert(&dvi, &svg)?;
        debug!(svg:? = svg; "DVI converted");

        Ok(svg)
    }
}
