//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Configuration for htmlsplice.
///
/// This struct represents the contents of `htmlsplice.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diagnostic policies
    // =========================================================================
    /// Templates were extracted but the document has no `<!-- templates -->` marker.
    #[serde(default)]
    pub missing_marker: DiagnosticPolicy,

    /// Two templates in one document share an id.
    #[serde(default)]
    pub duplicate_id: DiagnosticPolicy,

    /// A paired marker was left in the output without its partner.
    #[serde(default = "default_unmatched_marker")]
    pub unmatched_marker: DiagnosticPolicy,

    // =========================================================================
    // Targets
    // =========================================================================
    /// Named batches, run by `htmlsplice build [TARGET...]`.
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing_marker: DiagnosticPolicy::default(),
            duplicate_id: DiagnosticPolicy::default(),
            unmatched_marker: default_unmatched_marker(),
            targets: BTreeMap::new(),
        }
    }
}
