//! Implementation of the `htmlsplice build` command.

use super::batch::{BatchSummary, Job, run_batch};
use crate::cli::BuildArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::discovery::resolve_files;
use crate::error::{Result, SpliceError};
use std::path::Path;

/// Execute the `htmlsplice build` command.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let ctx = ProjectContext::resolve(args.config.as_deref())?;
    let jobs = build_jobs(&ctx, &args)?;

    let summary = run_batch(jobs, &ctx.config);
    print_summary(&summary);
    summary.into_result()
}

/// Jobs for one `build` invocation.
///
/// Ad-hoc inputs and `--dest` are relative to the working directory; target
/// paths are relative to the config file's directory.
pub fn build_jobs(ctx: &ProjectContext, args: &BuildArgs) -> Result<Vec<Job>> {
    match &args.dest {
        Some(dest) => adhoc_jobs(&ctx.cwd, &args.inputs, dest),
        None => {
            ctx.require_config_file()?;
            target_jobs(&ctx.base_dir, &ctx.config, &args.inputs)
        }
    }
}

/// Jobs for `build --dest DIR FILE...`.
pub fn adhoc_jobs(base: &Path, inputs: &[String], dest: &Path) -> Result<Vec<Job>> {
    if inputs.is_empty() {
        return Err(SpliceError::UserError(
            "no input files given.\nUsage: htmlsplice build --dest <DIR> <FILE>...".to_string(),
        ));
    }

    let dest_dir = base.join(dest);
    Ok(resolve_files(base, inputs)?
        .into_iter()
        .map(|source| Job::new(source, &dest_dir))
        .collect())
}

/// Jobs for the named targets (every target when `names` is empty).
pub fn target_jobs(base: &Path, config: &Config, names: &[String]) -> Result<Vec<Job>> {
    let targets = config.select_targets(names)?;
    if targets.is_empty() {
        return Err(SpliceError::UserError(
            "config defines no targets.\nAdd a `targets:` section to the config file."
                .to_string(),
        ));
    }

    let mut jobs = Vec::new();
    for (name, target) in targets {
        let dest_dir = base.join(&target.dest);
        let files = resolve_files(base, &target.files)?;
        tracing::info!(target_name = name, files = files.len(), "building target");
        jobs.extend(files.into_iter().map(|source| Job::new(source, &dest_dir)));
    }

    Ok(jobs)
}

fn print_summary(summary: &BatchSummary) {
    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(success) => println!(
                "  {} -> {} ({} template(s))",
                outcome.job.source.display(),
                success.destination.display(),
                success.template_count
            ),
            Err(err) => println!("  {} FAILED: {}", outcome.job.source.display(), err),
        }
    }

    println!();
    println!(
        "Built {} of {} file(s).",
        summary.succeeded(),
        summary.total()
    );
}
