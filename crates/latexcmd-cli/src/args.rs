//! Command-line argument definitions for the latexcmd CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the formula, the output path,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the latexcmd formula renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// LaTeX formula to render, without surrounding dollar signs
    #[arg(help = "LaTeX formula to render", required_unless_present = "check")]
    pub formula: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "formula.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report whether the LaTeX toolchain is installed, then exit
    #[arg(long, conflicts_with = "formula")]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
