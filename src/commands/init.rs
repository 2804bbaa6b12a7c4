//! Implementation of the `htmlsplice init` command.

use crate::config::{CONFIG_TEMPLATE, DEFAULT_CONFIG_FILE};
use crate::context::current_dir;
use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::Path;

/// Execute the `htmlsplice init` command.
///
/// Idempotent: an existing config file is left untouched.
pub fn cmd_init() -> Result<()> {
    let cwd = current_dir()?;
    let path = cwd.join(DEFAULT_CONFIG_FILE);

    if write_starter_config(&path)? {
        println!("Created {}.", path.display());
        println!();
        println!("Edit its `targets:` section, then run `htmlsplice build`.");
    } else {
        println!("{} already exists; leaving it unchanged.", path.display());
    }

    Ok(())
}

/// Write the starter config unless `path` exists. Returns whether it wrote.
pub fn write_starter_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    atomic_write_file(path, CONFIG_TEMPLATE)?;
    Ok(true)
}
