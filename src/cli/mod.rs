//! CLI argument parsing for htmlsplice.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// htmlsplice: extract inline HTML templates into script-tag templates.
///
/// Source documents mark regions with HTML comments:
/// - `<!-- ignore -->...<!-- /ignore -->` is deleted
/// - `<!-- placeholder: VALUE -->...<!-- /placeholder -->` becomes VALUE
/// - `<!-- template:ID -->BODY<!-- /template -->` moves to `<!-- templates -->`
///   as `<script type='text/html' id='ID'>BODY</script>`
#[derive(Parser, Debug)]
#[command(name = "htmlsplice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for htmlsplice.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transform files and write them to a destination directory.
    ///
    /// With `--dest`, transforms the given files. Otherwise runs the named
    /// targets from the config file (all targets when none are named).
    Build(BuildArgs),

    /// Transform one file and print the result to stdout.
    Render(RenderArgs),

    /// Transform without writing and report every diagnostic.
    ///
    /// Exits with code 2 if any diagnostic is found.
    Check(CheckArgs),

    /// Write a starter htmlsplice.yaml in the current directory.
    Init,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Target names from the config file, or source files when `--dest` is given.
    pub inputs: Vec<String>,

    /// Destination directory for an ad-hoc build of the given files.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Config file path (default: htmlsplice.yaml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Source document to transform.
    pub file: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files or globs to check. Without any, checks every configured target.
    pub files: Vec<String>,

    /// Config file path (default: htmlsplice.yaml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
