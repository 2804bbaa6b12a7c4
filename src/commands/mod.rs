//! Command implementations for htmlsplice.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod batch;
mod build;
mod check;
mod init;
mod render;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build::cmd_build(args),
        Command::Render(args) => render::cmd_render(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Init => init::cmd_init(),
    }
}
