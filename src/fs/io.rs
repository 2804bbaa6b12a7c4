//! Reading sources and resolving destinations.

use crate::error::{Result, SpliceError};
use std::path::{Path, PathBuf};

/// Read the full text of one source document.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        SpliceError::IoError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// `dest/<file name of source>`.
pub fn destination_for(dest_dir: &Path, source: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        SpliceError::UserError(format!(
            "source path '{}' has no file name",
            source.display()
        ))
    })?;

    Ok(dest_dir.join(name))
}
