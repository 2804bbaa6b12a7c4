//! Implementation of the `htmlsplice render` command.

use super::batch::apply_policies;
use crate::cli::RenderArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::fs::read_source;
use crate::markup::transform_with_report;
use std::path::Path;

/// Execute the `htmlsplice render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let ctx = ProjectContext::resolve(None)?;
    let output = render_file(&ctx.base_dir.join(&args.file), &ctx.config)?;
    print!("{}", output);
    Ok(())
}

/// Transform one file, applying the config's diagnostic policies.
pub fn render_file(path: &Path, config: &Config) -> Result<String> {
    let source = read_source(path)?;
    let report = transform_with_report(&source);
    apply_policies(path, &report, config)?;
    Ok(report.output)
}
