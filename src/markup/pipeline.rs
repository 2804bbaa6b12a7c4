//! The four-stage rewrite: ignore, placeholder, extract, compose.

use super::compose::compose;
use super::diagnostics::{
    Diagnostic, check_duplicate_ids, check_insertion_marker, check_unmatched_markers,
};
use super::extract::extract;
use super::{ignore, placeholder};

/// Output of [`transform_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    /// The transformed document. Identical to what [`transform`] returns.
    pub output: String,
    /// Number of template regions extracted.
    pub template_count: usize,
    /// Conditions worth reporting, in the order they were detected.
    pub diagnostics: Vec<Diagnostic>,
}

impl TransformReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Transform one document.
pub fn transform(source: &str) -> String {
    transform_with_report(source).output
}

/// Transform one document and report what it silently dropped or left behind.
pub fn transform_with_report(source: &str) -> TransformReport {
    let text = ignore::strip(source);
    let text = placeholder::resolve(&text);
    let extraction = extract(&text);

    tracing::trace!(
        templates = extraction.regions.len(),
        "extracted template regions"
    );

    let mut diagnostics = Vec::new();
    diagnostics.extend(check_insertion_marker(
        &extraction.stripped_text,
        &extraction.regions,
    ));
    diagnostics.extend(check_duplicate_ids(&extraction.regions));

    let output = compose(&extraction.stripped_text, &extraction.regions);
    diagnostics.extend(check_unmatched_markers(&output));

    TransformReport {
        output,
        template_count: extraction.regions.len(),
        diagnostics,
    }
}
