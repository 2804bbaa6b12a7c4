//! Per-file transform jobs and batch execution.
//!
//! Every file is an independent job. A failing job (unreadable source,
//! unwritable destination, or a diagnostic whose policy is `fail`) is
//! reported and counted; the remaining jobs still run.

use crate::config::{Config, DiagnosticPolicy};
use crate::error::{Result, SpliceError};
use crate::fs::{atomic_write_file, destination_for, read_source};
use crate::markup::{Diagnostic, TransformReport, transform_with_report};
use std::path::{Path, PathBuf};

/// One source document and the directory its output goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub dest_dir: PathBuf,
}

impl Job {
    pub fn new(source: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_dir: dest_dir.into(),
        }
    }
}

/// What happened to one job.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: Job,
    pub result: Result<JobSuccess>,
}

/// A job that produced output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSuccess {
    /// Where the output was written.
    pub destination: PathBuf,
    pub template_count: usize,
    /// Diagnostics that were reported as warnings.
    pub warnings: usize,
}

/// Result of running a batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }

    /// `Ok` when every job succeeded, otherwise a `BatchFailed` error.
    pub fn into_result(self) -> Result<()> {
        let failed = self.failed();
        if failed == 0 {
            return Ok(());
        }

        let checks_only = self
            .outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err())
            .all(|e| matches!(e, SpliceError::CheckFailed(_)));

        Err(SpliceError::BatchFailed {
            failed,
            total: self.total(),
            checks_only,
        })
    }
}

/// Run every job in order.
pub fn run_batch(jobs: Vec<Job>, config: &Config) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for job in jobs {
        let result = run_job(&job, config);
        match &result {
            Ok(success) => tracing::info!(
                source = %job.source.display(),
                destination = %success.destination.display(),
                templates = success.template_count,
                "wrote"
            ),
            Err(err) => tracing::error!(source = %job.source.display(), "{}", err),
        }
        summary.outcomes.push(JobOutcome { job, result });
    }

    summary
}

/// Read, transform and write one file.
pub fn run_job(job: &Job, config: &Config) -> Result<JobSuccess> {
    let destination = destination_for(&job.dest_dir, &job.source)?;
    let source = read_source(&job.source)?;
    let report = transform_with_report(&source);

    let warnings = apply_policies(&job.source, &report, config)?;
    atomic_write_file(&destination, &report.output)?;

    Ok(JobSuccess {
        destination,
        template_count: report.template_count,
        warnings,
    })
}

/// Log or escalate the report's diagnostics according to `config`.
///
/// Returns the number of diagnostics logged as warnings, or `CheckFailed`
/// for the first diagnostic whose policy is `fail`.
pub fn apply_policies(source: &Path, report: &TransformReport, config: &Config) -> Result<usize> {
    let mut warnings = 0;

    for diagnostic in &report.diagnostics {
        match config.policy_for(diagnostic.kind) {
            DiagnosticPolicy::Ignore => {}
            DiagnosticPolicy::Warn => {
                warn_diagnostic(source, diagnostic);
                warnings += 1;
            }
            DiagnosticPolicy::Fail => {
                return Err(SpliceError::CheckFailed(format!(
                    "{}: {}",
                    source.display(),
                    diagnostic
                )));
            }
        }
    }

    Ok(warnings)
}

fn warn_diagnostic(source: &Path, diagnostic: &Diagnostic) {
    tracing::warn!(
        source = %source.display(),
        kind = %diagnostic.kind,
        "{}",
        diagnostic.message
    );
}
