//! End-to-end orchestration: read, validate, filter, persist, compute.
//!
//! [`run`] drives one full pass over a source file:
//!
//! 1. read the file into memory,
//! 2. [`crate::format::validate`] it into a cleansed dataset,
//! 3. apply the request's select filter, if any,
//! 4. write the result next to the source as `filtered<file_name>`,
//! 5. render the requested statistic, if any.
//!
//! Validation and I/O errors short-circuit the run; a missing filter or
//! statistic field only produces a diagnostic line in the report.
//!
//! ```no_run
//! use tsv_pipeline::pipeline::{run, TsvRequest};
//! use tsv_pipeline::stats::Statistic;
//!
//! # fn main() -> Result<(), tsv_pipeline::TsvError> {
//! let request = TsvRequest::builder("people.tsv")
//!     .select("city", "London")
//!     .compute("age", Statistic::Stats)
//!     .build()?;
//! let report = run(&request)?;
//! for line in &report.lines {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod observability;
pub mod request;

pub use observability::{
    CompositeObserver, FileObserver, PipelineContext, PipelineObserver, PipelineStats, Severity,
    StdErrObserver,
};
pub use request::{ComputeRequest, RequestBuilder, SelectFilter, SelectTarget, TsvRequest};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::TsvResult;
use crate::format;
use crate::report::{self, FIELD_NOT_FOUND_DIAGNOSTIC};
use crate::stats;
use crate::types::DataSet;

use observability::severity_of;

/// Options controlling pipeline runs.
///
/// Use [`Default`] for a quiet run with no observer.
#[derive(Clone, Default)]
pub struct PipelineOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Option<Severity>,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Where the filtered file was written.
    pub output_path: PathBuf,
    /// Rows written to the filtered file (header line excluded).
    pub rows_written: usize,
    /// Diagnostics and rendered statistic sentences, in emission order.
    pub lines: Vec<String>,
}

/// Run a request with default options (no observer).
pub fn run(request: &TsvRequest) -> TsvResult<PipelineReport> {
    run_with_options(request, &PipelineOptions::default())
}

/// Run a request, reporting the outcome to the configured observer.
pub fn run_with_options(
    request: &TsvRequest,
    options: &PipelineOptions,
) -> TsvResult<PipelineReport> {
    let ctx = PipelineContext {
        path: request.source().to_path_buf(),
    };
    match execute(request) {
        Ok((report, stats)) => {
            if let Some(observer) = &options.observer {
                observer.on_success(&ctx, stats);
            }
            Ok(report)
        }
        Err(error) => {
            let severity = severity_of(&error);
            if let Some(observer) = &options.observer {
                observer.on_failure(&ctx, severity, &error);
                match options.alert_at_or_above {
                    Some(threshold) if severity >= threshold => {
                        observer.on_alert(&ctx, severity, &error);
                    }
                    _ => {}
                }
            }
            Err(error)
        }
    }
}

fn execute(request: &TsvRequest) -> TsvResult<(PipelineReport, PipelineStats)> {
    let raw = fs::read_to_string(request.source())?;
    let input_lines = raw.lines().count();

    let mut dataset = format::validate(&raw)?;
    let mut lines = Vec::new();

    if let Some(filter) = request.select() {
        dataset = apply_select(&dataset, filter, &mut lines);
    }

    let output_path = filtered_path(request.source());
    fs::write(&output_path, dataset.to_tsv())?;

    if let Some(compute) = request.compute() {
        lines.extend(report::render(&dataset, &compute.field, compute.statistic));
    }

    let stats = PipelineStats {
        rows_kept: dataset.row_count(),
        rows_dropped: input_lines.saturating_sub(dataset.row_count()),
    };
    let report = PipelineReport {
        output_path,
        rows_written: dataset.row_count(),
        lines,
    };
    Ok((report, stats))
}

/// Keep only rows matching the select filter's target value.
///
/// A missing filter field leaves the dataset unfiltered and emits the
/// standard diagnostic, the same laxness the statistics report with.
fn apply_select(dataset: &DataSet, filter: &SelectFilter, lines: &mut Vec<String>) -> DataSet {
    match stats::field_index(&dataset.header, &filter.field) {
        Some(idx) => dataset.filter_rows(|row| {
            row.get(idx).is_some_and(|value| filter.target.matches(value))
        }),
        None => {
            lines.push(FIELD_NOT_FOUND_DIAGNOSTIC.to_string());
            dataset.clone()
        }
    }
}

/// Output path: the source file name prefixed with `filtered`, in the same
/// directory.
fn filtered_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("filtered{name}"))
}

#[cfg(test)]
mod tests {
    use super::filtered_path;
    use std::path::Path;

    #[test]
    fn filtered_path_prefixes_the_file_name() {
        assert_eq!(
            filtered_path(Path::new("data/people.tsv")),
            Path::new("data/filteredpeople.tsv")
        );
        assert_eq!(
            filtered_path(Path::new("people.tsv")),
            Path::new("filteredpeople.tsv")
        );
    }
}
