//! Reporting for the conditions the pipeline otherwise handles silently.
//!
//! The pipeline never fails. These checks make its degenerate outcomes
//! visible: tags dropped for want of an insertion marker, ids that collide,
//! and markers that never found a partner.

use super::compose::has_insertion_marker;
use super::extract::TemplateRegion;
use super::patterns::PAIRED_MARKER;
use std::collections::HashMap;
use std::fmt;

/// Kinds of diagnostics a transform can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Templates were extracted but there was nowhere to insert them.
    MissingInsertionMarker,
    /// Two or more templates share an id.
    DuplicateTemplateId,
    /// A paired marker survived the pipeline without its partner.
    UnmatchedMarker,
}

impl DiagnosticKind {
    /// Short machine-friendly name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingInsertionMarker => "missing-insertion-marker",
            Self::DuplicateTemplateId => "duplicate-template-id",
            Self::UnmatchedMarker => "unmatched-marker",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Report a missing insertion marker when there are templates to insert.
pub fn check_insertion_marker(
    stripped_text: &str,
    regions: &[TemplateRegion],
) -> Option<Diagnostic> {
    if regions.is_empty() || has_insertion_marker(stripped_text) {
        return None;
    }

    Some(Diagnostic::new(
        DiagnosticKind::MissingInsertionMarker,
        format!(
            "{} template(s) extracted but no <!-- templates --> marker found; tags were dropped",
            regions.len()
        ),
    ))
}

/// Report each id used by more than one region, in first-occurrence order.
pub fn check_duplicate_ids(regions: &[TemplateRegion]) -> Vec<Diagnostic> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for id in regions.iter().filter_map(TemplateRegion::id) {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|id| {
            let count = counts[id];
            (count > 1).then(|| {
                Diagnostic::new(
                    DiagnosticKind::DuplicateTemplateId,
                    format!(
                        "template id '{}' is used {} times; the last definition wins",
                        id, count
                    ),
                )
            })
        })
        .collect()
}

/// Report every paired marker left in the final output.
pub fn check_unmatched_markers(output: &str) -> Vec<Diagnostic> {
    PAIRED_MARKER
        .find_iter(output)
        .map(|m| {
            Diagnostic::new(
                DiagnosticKind::UnmatchedMarker,
                format!("unmatched marker '{}' at byte {}", m.as_str(), m.start()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::extract::find_all;

    #[test]
    fn test_missing_marker_reported_only_with_regions() {
        let regions = find_all("<!-- template:a -->x<!-- /template -->");

        let diag = check_insertion_marker("<body></body>", &regions).unwrap();
        assert_eq!(diag.kind, DiagnosticKind::MissingInsertionMarker);
        assert!(diag.message.contains("1 template(s)"));

        assert!(check_insertion_marker("<!-- templates -->", &regions).is_none());
        assert!(check_insertion_marker("<body></body>", &[]).is_none());
    }

    #[test]
    fn test_duplicate_ids_reported_once_per_id() {
        let regions = find_all(concat!(
            "<!-- template:b -->1<!-- /template -->",
            "<!-- template:a -->2<!-- /template -->",
            "<!-- template:b -->3<!-- /template -->",
            "<!-- template:a -->4<!-- /template -->",
            "<!-- template:b -->5<!-- /template -->",
            "<!-- template:c -->6<!-- /template -->",
        ));

        let diags = check_duplicate_ids(&regions);
        assert_eq!(diags.len(), 2);
        assert!(diags[0].message.contains("'b' is used 3 times"));
        assert!(diags[1].message.contains("'a' is used 2 times"));
    }

    #[test]
    fn test_duplicate_ids_are_case_sensitive() {
        let regions = find_all(
            "<!-- template:Row -->1<!-- /template --><!-- template:row -->2<!-- /template -->",
        );
        assert!(check_duplicate_ids(&regions).is_empty());
    }

    #[test]
    fn test_unmatched_markers_in_document_order() {
        let diags = check_unmatched_markers("a<!-- /ignore -->b<!-- template:x -->c");
        assert_eq!(diags.len(), 2);
        assert!(diags[0].message.contains("'<!-- /ignore -->' at byte 1"));
        assert!(diags[1].message.contains("'<!-- template:x -->'"));
    }

    #[test]
    fn test_no_unmatched_markers_in_clean_output() {
        let out = "<!-- regular comment --><script type='text/html' id='a'>x</script>";
        assert!(check_unmatched_markers(out).is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(DiagnosticKind::DuplicateTemplateId, "dup");
        assert_eq!(diag.to_string(), "[duplicate-template-id] dup");
    }
}
