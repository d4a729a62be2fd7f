//! Example: Rendering formulas and reporting their errors
//!
//! This example renders a few formulas into the current directory. Formulas
//! the compiler rejects are reported with their classified message.

use latexcmd::{FormulaRenderer, LatexCmdError, config::AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let renderer = FormulaRenderer::new(AppConfig::default());

    // Fail early with a clear message if latex or dvisvgm is missing
    renderer.toolchain().check()?;

    let formulas = [
        ("energy", r"E = mc^2"),
        ("kinetic", r"E_k = \frac{1}{2} mv^2"),
        ("typo", r"E = \fracc{1}{2}"),
        ("extra", r"a^{2}} + b^2"),
        ("missing", r"\sqrt{a^2 + b^2"),
    ];

    for (name, formula) in formulas {
        let output = format!("{name}.svg");
        match renderer.render(formula, &output) {
            Ok(()) => println!("{formula:<24} -> {output}"),
            Err(LatexCmdError::Formula(err)) => {
                println!("{formula:<24} -> [{}] {err}", err.category());
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
