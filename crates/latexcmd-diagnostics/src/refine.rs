//! Per-category refinement of raw compiler messages.
//!
//! A [`Refiner`] narrows the error text and context extracted from a log into
//! a form worth showing to the user. Refiners are collected into a
//! [`RefinerTable`] through a [`RefinerRegistry`], which checks at build time
//! that every matchable category has exactly one refiner.

use std::sync::OnceLock;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Signature of a refinement function: `(error_text, added_info)` in,
/// refined `(error_text, added_info)` out.
pub type Refiner = fn(String, Option<String>) -> (String, Option<String>);

/// Defects found while building a [`RefinerTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no refiner registered for {0}")]
    Missing(ErrorCategory),

    #[error("{0} already has a registered refiner")]
    Duplicate(ErrorCategory),
}

/// Collects refiners before they are frozen into a [`RefinerTable`].
#[derive(Debug, Default)]
pub struct RefinerRegistry {
    refiners: [Option<Refiner>; ErrorCategory::COUNT],
    duplicate: Option<ErrorCategory>,
}

impl RefinerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `refiner` for every category in `categories`.
    ///
    /// Registering a category twice is reported by [`RefinerRegistry::build`].
    pub fn register(mut self, categories: &[ErrorCategory], refiner: Refiner) -> Self {
        for category in categories {
            let slot = &mut self.refiners[category.index()];
            if slot.is_some() {
                if self.duplicate.is_none() {
                    self.duplicate = Some(*category);
                }
            } else {
                *slot = Some(refiner);
            }
        }
        self
    }

    /// Freeze the registry into a table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if a category was registered more
    /// than once, and [`RegistryError::Missing`] if a category other than
    /// [`ErrorCategory::Unknown`] has no refiner.
    pub fn build(self) -> Result<RefinerTable, RegistryError> {
        if let Some(category) = self.duplicate {
            return Err(RegistryError::Duplicate(category));
        }

        let missing = ErrorCategory::MATCH_ORDER
            .into_iter()
            .find(|category| self.refiners[category.index()].is_none());
        if let Some(category) = missing {
            return Err(RegistryError::Missing(category));
        }

        Ok(RefinerTable {
            refiners: self.refiners,
        })
    }
}

/// Complete, immutable mapping from category to refiner.
#[derive(Debug)]
pub struct RefinerTable {
    refiners: [Option<Refiner>; ErrorCategory::COUNT],
}

impl RefinerTable {
    /// The table of built-in refiners, built and validated on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in registrations are incomplete, which is a
    /// programming error rather than a runtime condition.
    pub fn standard() -> &'static RefinerTable {
        static STANDARD: OnceLock<RefinerTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            RefinerRegistry::new()
                .register(
                    &[ErrorCategory::UndefinedControlSequence],
                    refine_undefined_control_sequence,
                )
                .register(&[ErrorCategory::ExtraBracket], refine_extra_bracket)
                .register(&[ErrorCategory::MissingBracket], refine_missing_bracket)
                .register(
                    &[ErrorCategory::UndefinedSymbol, ErrorCategory::Unknown],
                    refine_discard_context,
                )
                .build()
                .unwrap_or_else(|err| panic!("invalid built-in refiner table: {err}"))
        })
    }

    /// Returns the refiner registered for `category`.
    ///
    /// Only [`ErrorCategory::Unknown`] may lack a refiner.
    pub fn get(&self, category: ErrorCategory) -> Option<Refiner> {
        self.refiners[category.index()]
    }

    /// Apply the refiner registered for `category`.
    ///
    /// Input passes through unchanged when the category has no refiner.
    pub fn refine(
        &self,
        category: ErrorCategory,
        error_text: String,
        added_info: Option<String>,
    ) -> (String, Option<String>) {
        match self.get(category) {
            Some(refiner) => refiner(error_text, added_info),
            None => (error_text, added_info),
        }
    }
}

/// Wrap `text` in double quotes.
pub fn enquote(text: &str) -> String {
    format!("\"{text}\"")
}

/// Keeps the error text and reduces the context to the offending control
/// sequence, which is the last backslash-led token of the context line.
pub fn refine_undefined_control_sequence(
    error_text: String,
    added_info: Option<String>,
) -> (String, Option<String>) {
    let added_info = added_info.map(|info| {
        let sequence = match info.rsplit_once('\\') {
            Some((_, last)) => format!("\\{last}"),
            None => info,
        };
        enquote(sequence.trim())
    });
    (error_text, added_info)
}

/// Drops the forgotten-dollar part of the message and reduces the context to
/// the formula, without the surrounding document markup.
///
/// The wrapping document places the formula between dollar signs, so the
/// forgotten `$` hint never applies to user input.
pub fn refine_extra_bracket(
    error_text: String,
    added_info: Option<String>,
) -> (String, Option<String>) {
    let head = error_text.split(',').next().unwrap_or_default();
    let added_info = added_info.map(|info| {
        let formula = info.rsplit('$').next().unwrap_or_default();
        enquote(formula.trim())
    });
    (format!("{head}."), added_info)
}

/// States only the missing bracket and drops the context.
///
/// The compiler's suggestion is always the closing brace of the wrapping
/// document, which tells the user nothing.
pub fn refine_missing_bracket(
    error_text: String,
    _added_info: Option<String>,
) -> (String, Option<String>) {
    let head = error_text.split('}').next().unwrap_or_default();
    (format!("{head}}}."), None)
}

/// Keeps the error text and drops the context.
pub fn refine_discard_context(
    error_text: String,
    _added_info: Option<String>,
) -> (String, Option<String>) {
    (error_text, None)
}
