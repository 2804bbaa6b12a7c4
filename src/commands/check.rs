//! Implementation of the `htmlsplice check` command.
//!
//! Runs the full pipeline on each file without writing anything and reports
//! every diagnostic regardless of the configured policies.

use crate::cli::CheckArgs;
use crate::context::ProjectContext;
use crate::discovery::resolve_files;
use crate::error::{Result, SpliceError};
use crate::fs::read_source;
use crate::markup::{Diagnostic, transform_with_report};
use std::path::PathBuf;

/// Diagnostics found in one file.
#[derive(Debug)]
pub struct FileCheck {
    pub path: PathBuf,
    pub result: Result<Vec<Diagnostic>>,
}

/// Execute the `htmlsplice check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let ctx = ProjectContext::resolve(args.config.as_deref())?;
    let files = files_to_check(&ctx, &args.files)?;

    let checks = check_files(files);
    print_checks(&checks);
    summarize(&checks)
}

/// Files named on the command line, relative to the working directory, or
/// every configured target's files when none are named.
pub fn files_to_check(ctx: &ProjectContext, files: &[String]) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return resolve_files(&ctx.cwd, files);
    }

    ctx.require_config_file()?;
    let mut resolved = Vec::new();
    for (_, target) in ctx.config.select_targets(&[])? {
        resolved.extend(resolve_files(&ctx.base_dir, &target.files)?);
    }
    Ok(resolved)
}

/// Check every file in order.
pub fn check_files(files: Vec<PathBuf>) -> Vec<FileCheck> {
    files
        .into_iter()
        .map(|path| {
            let result = read_source(&path).map(|source| transform_with_report(&source).diagnostics);
            FileCheck { path, result }
        })
        .collect()
}

/// Turn check results into the command's exit status.
///
/// I/O failures take precedence over diagnostics.
pub fn summarize(checks: &[FileCheck]) -> Result<()> {
    let unreadable = checks.iter().filter(|c| c.result.is_err()).count();
    if unreadable > 0 {
        return Err(SpliceError::BatchFailed {
            failed: unreadable,
            total: checks.len(),
            checks_only: false,
        });
    }

    let (diagnostics, files) = checks
        .iter()
        .filter_map(|c| c.result.as_ref().ok())
        .filter(|d| !d.is_empty())
        .fold((0, 0), |(diagnostics, files), d| (diagnostics + d.len(), files + 1));

    if diagnostics > 0 {
        return Err(SpliceError::CheckFailed(format!(
            "{} diagnostic(s) in {} file(s)",
            diagnostics, files
        )));
    }

    Ok(())
}

fn print_checks(checks: &[FileCheck]) {
    for check in checks {
        match &check.result {
            Ok(diagnostics) => {
                for diagnostic in diagnostics {
                    println!("{}: {}", check.path.display(), diagnostic);
                }
            }
            Err(err) => println!("{}: {}", check.path.display(), err),
        }
    }

    println!("Checked {} file(s).", checks.len());
}
