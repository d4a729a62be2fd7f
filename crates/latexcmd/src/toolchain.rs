//! Invocation of the external LaTeX toolchain.
//!
//! The compiler turns the standalone document into DVI; the converter turns
//! DVI into SVG. Both run blocking, with their output discarded: only exit
//! codes and, on compiler failure, the compiler log are consumed.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use log::{debug, info};

use latexcmd_diagnostics::classify_file;

use crate::{LatexCmdError, config::ToolchainConfig};

/// Check whether `program` can be started.
///
/// The program is run with `--version`; it counts as installed unless it
/// cannot be found.
pub fn is_installed(program: &str) -> bool {
    let result = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    !matches!(result, Err(err) if err.kind() == io::ErrorKind::NotFound)
}

/// The compiler and converter configured for rendering.
#[derive(Debug, Clone, Copy)]
pub struct Toolchain<'a> {
    config: &'a ToolchainConfig,
}

impl<'a> Toolchain<'a> {
    pub fn new(config: &'a ToolchainConfig) -> Self {
        Self { config }
    }

    /// Report whether each configured program is installed, compiler first.
    pub fn status(&self) -> [(&'a str, bool); 2] {
        [self.config.latex(), self.config.dvisvgm()]
            .map(|program| (program, is_installed(program)))
    }

    /// Check that both configured programs are installed.
    ///
    /// # Errors
    ///
    /// Returns [`LatexCmdError::MissingTool`] for the first missing program.
    pub fn check(&self) -> Result<(), LatexCmdError> {
        match self.status().into_iter().find(|(_, installed)| !installed) {
            Some((program, _)) => Err(LatexCmdError::MissingTool {
                program: program.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Compile `document` into `output_dir` and return the DVI path.
    ///
    /// The compiler runs non-interactively and halts on the first error.
    ///
    /// # Errors
    ///
    /// - [`LatexCmdError::Formula`] with the classified compiler log if the
    ///   compiler fails
    /// - [`LatexCmdError::Io`] if the compiler fails and its log cannot be read
    /// - [`LatexCmdError::MissingTool`] if the compiler is not installed
    pub fn compile(&self, document: &Path, output_dir: &Path) -> Result<PathBuf, LatexCmdError> {
        let mut output_flag = OsString::from("-output-directory=");
        output_flag.push(output_dir);

        let mut command = Command::new(self.config.latex());
        command
            .arg(document)
            .arg(output_flag)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error");

        let status = run(&mut command, self.config.latex())?;
        let stem = document.file_stem().unwrap_or_default();
        let artifact = output_dir.join(stem);

        if !status.success() {
            let log_path = artifact.with_extension("log");
            info!(status:% = status, log_path:? = log_path; "LaTeX compilation failed");
            return Err(classify_file(&log_path)?.into());
        }

        Ok(artifact.with_extension("dvi"))
    }

    /// Convert the DVI file `dvi` to the SVG file `svg`.
    ///
    /// # Errors
    ///
    /// - [`LatexCmdError::ToolFailed`] if the converter exits unsuccessfully
    /// - [`LatexCmdError::MissingTool`] if the converter is not installed
    pub fn convert(&self, dvi: &Path, svg: &Path) -> Result<(), LatexCmdError> {
        let mut command = Command::new(self.config.dvisvgm());
        command.arg(dvi);
        if self.config.no_fonts() {
            command.arg("-n");
        }
        if self.config.exact_bbox() {
            command.arg("-e");
        }
        command.arg("-o").arg(svg);

        let status = run(&mut command, self.config.dvisvgm())?;
        if !status.success() {
            return Err(LatexCmdError::ToolFailed {
                program: self.config.dvisvgm().to_string(),
                status,
            });
        }

        Ok(())
    }
}

/// Run `command` to completion with its output discarded.
fn run(command: &mut Command, program: &str) -> Result<ExitStatus, LatexCmdError> {
    debug!(command:? = command; "Running external program");

    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LatexCmdError::MissingTool {
                program: program.to_string(),
            },
            _ => LatexCmdError::Io(err),
        })?;

    debug!(program, status:% = status; "External program finished");
    Ok(status)
}
