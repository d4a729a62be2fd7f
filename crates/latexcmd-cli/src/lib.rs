//! CLI logic for the latexcmd formula renderer.
//!
//! This module contains the core CLI logic: rendering a formula to an SVG
//! file, or reporting whether the LaTeX toolchain is installed.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use latexcmd::{FormulaRenderer, LatexCmdError};

/// Run the latexcmd CLI application
///
/// With `--check`, prints whether each external program is installed.
/// Otherwise renders the formula and writes the SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LatexCmdError` for:
/// - Configuration loading errors
/// - Errors in the formula, classified from the compiler log
/// - Missing or failing external programs
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), LatexCmdError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = FormulaRenderer::new(app_config);

    let Some(formula) = args.formula.as_deref() else {
        return check(&renderer);
    };

    info!(
        formula,
        output_path = args.output;
        "Processing formula"
    );

    renderer.render(formula, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Print the installation status of each program of the toolchain.
fn check(renderer: &FormulaRenderer) -> Result<(), LatexCmdError> {
    let toolchain = renderer.toolchain();

    for (program, installed) in toolchain.status() {
        let status = if installed {
            "installed"
        } else {
            "not installed"
        };
        println!("{program}: {status}");
    }

    toolchain.check()
}
