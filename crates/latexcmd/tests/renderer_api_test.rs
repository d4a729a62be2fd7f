//! Integration tests for the FormulaRenderer API
//!
//! These tests run without a TeX installation.

use latexcmd::{
    FormulaRenderer, LatexCmdError,
    config::{AppConfig, DocumentConfig, ToolchainConfig},
};

const MISSING_PROGRAM: &str = "latexcmd-test-no-such-program";

#[test]
fn test_renderer_api_exists() {
    let renderer = FormulaRenderer::default();

    assert_eq!(renderer.config().toolchain().latex(), "latex");
    assert_eq!(renderer.config().toolchain().dvisvgm(), "dvisvgm");
}

#[test]
fn test_missing_compiler_is_not_classified() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = AppConfig::new(
        ToolchainConfig::new(MISSING_PROGRAM, MISSING_PROGRAM),
        DocumentConfig::default(),
    );
    let renderer = FormulaRenderer::new(config);

    let err = renderer
        .render("x", temp_dir.path().join("out.svg"))
        .expect_err("Rendering without a compiler must fail");

    assert!(
        matches!(err, LatexCmdError::MissingTool { ref program } if program == MISSING_PROGRAM),
        "Unexpected error: {err:?}"
    );
    assert!(err.formula_error().is_none());
    assert!(!temp_dir.path().join("out.svg").exists());
}

#[test]
fn test_toolchain_check_reports_missing_programs() {
    let config = AppConfig::new(
        ToolchainConfig::new(MISSING_PROGRAM, MISSING_PROGRAM),
        DocumentConfig::default(),
    );
    let renderer = FormulaRenderer::new(config);

    let status = renderer.toolchain().status();

    assert_eq!(status, [(MISSING_PROGRAM, false), (MISSING_PROGRAM, false)]);
    assert!(renderer.toolchain().check().is_err());
}
