//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{DiagnosticPolicy, Target};
use crate::error::{Result, SpliceError};
use crate::markup::DiagnosticKind;
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "htmlsplice.yaml";

/// Starter config written by `htmlsplice init`.
pub const CONFIG_TEMPLATE: &str = "\
# htmlsplice configuration

# What to do when a document's templates have no <!-- templates --> marker.
# One of: ignore, warn, fail
missing_marker: warn

# What to do when two templates in one document share an id.
duplicate_id: warn

# What to do when a marker is left in the output without its partner.
unmatched_marker: ignore

# Named batches. Paths and globs are relative to this file.
targets:
  pages:
    files:
      - \"src/**/*.html\"
    dest: dist
";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SpliceError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SpliceError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SpliceError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every target lists at least one non-empty `files` entry
    /// - every target has a non-empty `dest`
    pub fn validate(&self) -> Result<()> {
        for (name, target) in &self.targets {
            if target.files.is_empty() {
                return Err(SpliceError::UserError(format!(
                    "config validation failed: target '{}' has no files",
                    name
                )));
            }
            if target.files.iter().any(|f| f.trim().is_empty()) {
                return Err(SpliceError::UserError(format!(
                    "config validation failed: target '{}' has an empty files entry",
                    name
                )));
            }
            if target.dest.trim().is_empty() {
                return Err(SpliceError::UserError(format!(
                    "config validation failed: target '{}' has no dest",
                    name
                )));
            }
        }

        Ok(())
    }

    /// The configured policy for a diagnostic kind.
    pub fn policy_for(&self, kind: DiagnosticKind) -> DiagnosticPolicy {
        match kind {
            DiagnosticKind::MissingInsertionMarker => self.missing_marker,
            DiagnosticKind::DuplicateTemplateId => self.duplicate_id,
            DiagnosticKind::UnmatchedMarker => self.unmatched_marker,
        }
    }

    /// Pick targets by name, or every target when `names` is empty.
    ///
    /// Unknown names are a user error listing what is available.
    pub fn select_targets(&self, names: &[String]) -> Result<Vec<(&str, &Target)>> {
        if names.is_empty() {
            return Ok(self
                .targets
                .iter()
                .map(|(name, target)| (name.as_str(), target))
                .collect());
        }

        names
            .iter()
            .map(|name| {
                self.targets
                    .get_key_value(name)
                    .map(|(name, target)| (name.as_str(), target))
                    .ok_or_else(|| {
                        let available: Vec<&str> =
                            self.targets.keys().map(String::as_str).collect();
                        SpliceError::UserError(format!(
                            "unknown target '{}' (available: {})",
                            name,
                            if available.is_empty() {
                                "none".to_string()
                            } else {
                                available.join(", ")
                            }
                        ))
                    })
            })
            .collect()
    }
}
