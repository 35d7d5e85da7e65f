//! Observer hooks for pipeline runs.
//!
//! The pipeline stays quiet by default; callers that want logging or alerting
//! attach a [`PipelineObserver`] through
//! [`crate::pipeline::PipelineOptions`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TsvError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (validation failed).
    Error,
    /// Critical error (I/O or other infrastructure failures).
    Critical,
}

/// Classify an error for observer reporting.
pub fn severity_of(error: &TsvError) -> Severity {
    match error {
        TsvError::Io(_) => Severity::Critical,
        _ => Severity::Error,
    }
}

/// Context about one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// The source path of the run.
    pub path: PathBuf,
}

/// Stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    /// Rows that survived cleansing and filtering.
    pub rows_kept: usize,
    /// Input lines that cleansing or filtering discarded.
    pub rows_dropped: usize,
}

/// Observer interface for pipeline outcomes.
pub trait PipelineObserver: Send + Sync {
    /// Called when a run succeeds.
    fn on_success(&self, _ctx: &PipelineContext, _stats: PipelineStats) {}

    /// Called when a run fails.
    fn on_failure(&self, _ctx: &PipelineContext, _severity: Severity, _error: &TsvError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a composite from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        eprintln!(
            "[tsv][ok] path={} kept={} dropped={}",
            ctx.path.display(),
            stats.rows_kept,
            stats.rows_dropped
        );
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        eprintln!(
            "[tsv][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        eprintln!(
            "[ALERT][tsv][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}

/// Appends pipeline events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for FileObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        self.append_line(&format!(
            "{} ok path={} kept={} dropped={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows_kept,
            stats.rows_dropped
        ));
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &TsvError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
