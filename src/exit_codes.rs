//! Exit code constants for the htmlsplice CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unknown target)
//! - 2: Check failure (a diagnostic escalated to an error)
//! - 3: I/O failure (unreadable source, unwritable destination)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or invalid glob.
pub const USER_ERROR: i32 = 1;

/// Check failure: a diagnostic whose policy is `fail`, or any diagnostic under `check`.
pub const CHECK_FAILURE: i32 = 2;

/// I/O failure: a source could not be read or a destination could not be written.
pub const IO_FAILURE: i32 = 3;
