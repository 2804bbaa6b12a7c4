//! Error types for the htmlsplice CLI.
//!
//! The markup pipeline itself never fails; these errors come from the layer
//! around it (arguments, config, discovery, reading and writing files).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for htmlsplice operations.
#[derive(Error, Debug)]
pub enum SpliceError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading a source or writing a destination failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A diagnostic was escalated to a failure.
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// One or more files of a batch failed; the rest were processed.
    #[error("{failed} of {total} file(s) failed")]
    BatchFailed {
        failed: usize,
        total: usize,
        /// True when every failure in the batch was a check failure.
        checks_only: bool,
    },
}

impl SpliceError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpliceError::UserError(_) => exit_codes::USER_ERROR,
            SpliceError::IoError(_) => exit_codes::IO_FAILURE,
            SpliceError::CheckFailed(_) => exit_codes::CHECK_FAILURE,
            SpliceError::BatchFailed {
                checks_only: true, ..
            } => exit_codes::CHECK_FAILURE,
            SpliceError::BatchFailed { .. } => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for htmlsplice operations.
pub type Result<T> = std::result::Result<T, SpliceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SpliceError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = SpliceError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn check_failed_has_correct_exit_code() {
        let err = SpliceError::CheckFailed("missing marker".to_string());
        assert_eq!(err.exit_code(), exit_codes::CHECK_FAILURE);
    }

    #[test]
    fn batch_failure_exit_code_depends_on_cause() {
        let io = SpliceError::BatchFailed {
            failed: 1,
            total: 3,
            checks_only: false,
        };
        assert_eq!(io.exit_code(), exit_codes::IO_FAILURE);

        let checks = SpliceError::BatchFailed {
            failed: 2,
            total: 3,
            checks_only: true,
        };
        assert_eq!(checks.exit_code(), exit_codes::CHECK_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SpliceError::IoError("failed to read 'a.html'".to_string());
        assert_eq!(err.to_string(), "I/O error: failed to read 'a.html'");

        let err = SpliceError::BatchFailed {
            failed: 1,
            total: 4,
            checks_only: false,
        };
        assert_eq!(err.to_string(), "1 of 4 file(s) failed");
    }
}
