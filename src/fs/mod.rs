//! Filesystem utilities for htmlsplice.
//!
//! Reading a source document, resolving where its output goes, and writing
//! the output atomically so a destination is never left half-written.

pub mod atomic;
mod io;

pub use atomic::atomic_write_file;
pub use io::{destination_for, read_source};
