//! `tsv-pipeline` is a small library for validating, cleansing, filtering,
//! and summarizing tab-separated files.
//!
//! A file's first line names its columns; its second line (the first data
//! row) fixes the per-column type [`types::Shape`] — which columns hold
//! base-10 integers and which hold text. Every line is then cleansed against
//! that shape: lines whose recomputed shape differs are dropped silently.
//! The survivors form an in-memory [`types::DataSet`] that the statistics
//! engine and the select filter operate on.
//!
//! There is deliberately no quoting, escaping, or embedded-delimiter
//! support: fields are strictly tab-delimited, whitespace-trimmed, and empty
//! tokens produced by ragged delimiters collapse.
//!
//! ## Quick example: validate and summarize
//!
//! ```rust
//! use tsv_pipeline::format::validate;
//! use tsv_pipeline::report::render;
//! use tsv_pipeline::stats::Statistic;
//!
//! let raw = "name\tage\r\nAda\t36\r\nBob\t41\r\nnot a valid row\r\nEve\t29\r\n";
//! let dataset = validate(raw).unwrap();
//! assert_eq!(dataset.row_count(), 3); // the malformed row is gone
//!
//! let lines = render(&dataset, "age", Statistic::Average);
//! assert_eq!(lines, vec!["The value of AVERAGE is 35.".to_string()]);
//! ```
//!
//! ## Full pipeline over a file
//!
//! [`pipeline::run`] reads a source file, validates it, applies an optional
//! exact-match select filter, writes the cleansed result next to the source
//! as `filtered<file_name>`, and renders an optional statistic:
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
//! println!("wrote {} rows to {}", report.rows_written, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`format`]: header parsing, shape inference, and cleansing
//! - [`stats`]: per-column aggregates (count/sum/average/min/max/...)
//! - [`report`]: the presentation layer rendering fixed sentence forms
//! - [`pipeline`]: request configuration and end-to-end orchestration
//! - [`types`]: shape + in-memory dataset types
//! - [`error`]: the error type shared across all of the above
//!
//! ## Statistic semantics worth knowing
//!
//! - `MIN`/`MAX` are numeric-first: integer comparison when anything in the
//!   column parses, lexicographic comparison otherwise.
//! - `SUM` silently skips non-numeric values; `AVERAGE` still divides by the
//!   **total** row count, so skipped rows dilute the mean.
//! - `AVERAGE` and `STANDARD_DEVIATION` use truncating integer arithmetic;
//!   the deviation denominator is `count - 1`.

pub mod error;
pub mod format;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod types;

pub use error::{TsvError, TsvResult};
