//! Configuration types and defaults for htmlsplice.

use serde::Deserialize;

/// What to do when a transform reports a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticPolicy {
    /// Say nothing.
    Ignore,
    /// Log a warning and still write the file (default).
    #[default]
    Warn,
    /// Skip writing the file and count it as failed.
    Fail,
}

/// A named batch of source files sharing one destination directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Target {
    /// Source paths or glob patterns, relative to the config file's directory.
    pub files: Vec<String>,

    /// Destination directory, relative to the config file's directory.
    pub dest: String,
}

impl Target {
    pub fn new<I, S>(files: I, dest: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            dest: dest.into(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_unmatched_marker() -> DiagnosticPolicy {
    DiagnosticPolicy::Ignore
}
