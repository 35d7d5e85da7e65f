//! Rendering of computed statistics into user-facing sentences.
//!
//! All user-visible output goes through this module so the statistic engine
//! can stay `Result`-based. The sentence forms are fixed:
//!
//! - `The value of <STAT_NAME> is <value>.`
//! - a missing field is reported as `Accurate field not specified.` on its
//!   own line, and the statistic renders as `unavailable`
//! - `STATS` renders its sub-fields as
//!   `COUNT: <c> SUM: <s> AVERAGE: <a> STANDARD_DEVIATION: <d>`
//!
//! Division faults (average of an empty dataset, standard deviation of a
//! single row) are local to the one statistic; they render as unavailable
//! instead of aborting.

use crate::error::{TsvError, TsvResult};
use crate::stats::{self, StatValue, Statistic};
use crate::types::DataSet;

/// Diagnostic emitted when the requested column is absent from the header.
pub const FIELD_NOT_FOUND_DIAGNOSTIC: &str = "Accurate field not specified.";

/// Diagnostic emitted when a sum stayed at zero because nothing parsed.
pub const NON_NUMERIC_DIAGNOSTIC: &str = "Record is not a number.";

const SD_ZERO: &str = "either unavailable or the field only has the same number in it";
const STATS_ZERO: &str = "either unavailable or the field only has zeros in it";

fn sentence(statistic: Statistic, value: impl std::fmt::Display) -> String {
    format!("The value of {statistic} is {value}.")
}

/// Compute `statistic` over `field` and render the output lines.
///
/// Each statistic dispatches independently; diagnostics precede the value
/// line. A `FieldNotFound` never aborts the run — it renders in place.
pub fn render(dataset: &DataSet, field: &str, statistic: Statistic) -> Vec<String> {
    match statistic {
        Statistic::AllSame => render_all_same(dataset, field),
        Statistic::Count => vec![sentence(statistic, stats::count(dataset))],
        Statistic::Min => render_extremum(statistic, stats::min(dataset, field)),
        Statistic::Max => render_extremum(statistic, stats::max(dataset, field)),
        Statistic::Sum => render_sum(dataset, field),
        Statistic::Average => render_average(dataset, field),
        Statistic::StandardDeviation => render_standard_deviation(dataset, field),
        Statistic::Stats => render_stats(dataset, field),
    }
}

fn render_all_same(dataset: &DataSet, field: &str) -> Vec<String> {
    match stats::all_same(dataset, field) {
        Ok(same) => vec![sentence(Statistic::AllSame, same)],
        // Lax fallback: a missing field still reports true, after the
        // diagnostic.
        Err(_) => vec![
            FIELD_NOT_FOUND_DIAGNOSTIC.to_string(),
            sentence(Statistic::AllSame, true),
        ],
    }
}

fn render_extremum(
    statistic: Statistic,
    outcome: TsvResult<Option<StatValue>>,
) -> Vec<String> {
    match outcome {
        Ok(Some(value)) => vec![sentence(statistic, value)],
        Ok(None) => vec![sentence(statistic, "unavailable")],
        Err(_) => vec![
            FIELD_NOT_FOUND_DIAGNOSTIC.to_string(),
            sentence(statistic, "unavailable"),
        ],
    }
}

fn render_sum(dataset: &DataSet, field: &str) -> Vec<String> {
    match stats::sum(dataset, field) {
        // A sum of exactly zero is indistinguishable from "nothing parsed";
        // both render as unavailable.
        Ok(0) => vec![
            NON_NUMERIC_DIAGNOSTIC.to_string(),
            sentence(Statistic::Sum, "unavailable"),
        ],
        Ok(total) => vec![sentence(Statistic::Sum, total)],
        Err(_) => vec![
            FIELD_NOT_FOUND_DIAGNOSTIC.to_string(),
            sentence(Statistic::Sum, "unavailable"),
        ],
    }
}

fn render_average(dataset: &DataSet, field: &str) -> Vec<String> {
    match stats::average(dataset, field) {
        Ok(mean) => vec![sentence(Statistic::Average, mean)],
        Err(TsvError::FieldNotFound { .. }) => vec![
            FIELD_NOT_FOUND_DIAGNOSTIC.to_string(),
            sentence(Statistic::Average, "unavailable"),
        ],
        Err(_) => vec![sentence(Statistic::Average, "unavailable")],
    }
}

fn render_standard_deviation(dataset: &DataSet, field: &str) -> Vec<String> {
    match stats::standard_deviation(dataset, field) {
        Ok(0) => vec![sentence(Statistic::StandardDeviation, SD_ZERO)],
        Ok(sd) => vec![sentence(Statistic::StandardDeviation, sd)],
        Err(TsvError::FieldNotFound { .. }) => vec![
            FIELD_NOT_FOUND_DIAGNOSTIC.to_string(),
            sentence(Statistic::StandardDeviation, SD_ZERO),
        ],
        Err(_) => vec![sentence(Statistic::StandardDeviation, SD_ZERO)],
    }
}

fn render_stats(dataset: &DataSet, field: &str) -> Vec<String> {
    let total = match stats::sum(dataset, field) {
        Ok(total) => total,
        Err(_) => {
            return vec![
                FIELD_NOT_FOUND_DIAGNOSTIC.to_string(),
                sentence(Statistic::Stats, STATS_ZERO),
            ];
        }
    };
    let mean = stats::average(dataset, field).ok();
    let sd = stats::standard_deviation(dataset, field).ok();

    if total == 0 && mean.unwrap_or(0) == 0 && sd.unwrap_or(0) == 0 {
        return vec![sentence(Statistic::Stats, STATS_ZERO)];
    }

    let composite = format!(
        "COUNT: {} SUM: {} AVERAGE: {} STANDARD_DEVIATION: {}",
        stats::count(dataset),
        total,
        display_or_unavailable(mean),
        display_or_unavailable(sd),
    );
    vec![sentence(Statistic::Stats, composite)]
}

fn display_or_unavailable(value: Option<i64>) -> String {
    value.map_or_else(|| "unavailable".to_string(), |v| v.to_string())
}
