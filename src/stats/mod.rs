//! Summary statistics over a cleansed [`crate::types::DataSet`].
//!
//! Each aggregate resolves its column through [`field_index`] (linear scan,
//! **last** match wins for duplicated header names) and then walks the column
//! once. Numeric aggregates parse each value as `i64` and silently skip
//! values that do not parse; [`aggregate::min`] and [`aggregate::max`] fall
//! back to lexicographic comparison when no value in the column is numeric.
//!
//! "No data" is reported through `Option`/`Result` rather than extreme
//! sentinel integers: an empty dataset yields `Ok(None)` from min/max, `0`
//! from sum, and a [`crate::error::TsvError::DivisionByZero`] from average
//! and standard deviation.
//!
//! ## Example
//!
//! ```rust
//! use tsv_pipeline::format::validate;
//! use tsv_pipeline::stats::aggregate;
//!
//! let ds = validate("id\tscore\r\n1\t10\r\n2\t20\r\n3\t30\r\n").unwrap();
//! assert_eq!(aggregate::sum(&ds, "score").unwrap(), 60);
//! assert_eq!(aggregate::average(&ds, "score").unwrap(), 20);
//! ```

pub mod aggregate;

pub use aggregate::{
    all_same, average, count, field_index, max, min, standard_deviation, sum,
};

use std::fmt;

use serde::{Deserialize, Serialize};

/// The statistics a compute request can ask for.
///
/// Serialized spellings match the rendered statistic names
/// (`ALLSAME`, `STANDARD_DEVIATION`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    /// Whether every value in the column is identical.
    #[serde(rename = "ALLSAME")]
    AllSame,
    /// Number of rows (field-independent).
    #[serde(rename = "COUNT")]
    Count,
    /// Smallest value (numeric-first, lexicographic fallback).
    #[serde(rename = "MIN")]
    Min,
    /// Largest value (numeric-first, lexicographic fallback).
    #[serde(rename = "MAX")]
    Max,
    /// Sum of the values that parse as integers.
    #[serde(rename = "SUM")]
    Sum,
    /// Composite of count, sum, average, and standard deviation.
    #[serde(rename = "STATS")]
    Stats,
    /// Truncating integer mean (sum over total row count).
    #[serde(rename = "AVERAGE")]
    Average,
    /// Truncating integer population standard deviation.
    #[serde(rename = "STANDARD_DEVIATION")]
    StandardDeviation,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AllSame => "ALLSAME",
            Self::Count => "COUNT",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::Stats => "STATS",
            Self::Average => "AVERAGE",
            Self::StandardDeviation => "STANDARD_DEVIATION",
        };
        f.write_str(name)
    }
}

/// A computed min/max result: numeric when any value in the column parsed as
/// an integer, textual otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    /// Numeric result.
    Int(i64),
    /// Lexicographic result.
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Statistic;

    #[test]
    fn statistic_display_matches_rendered_names() {
        assert_eq!(Statistic::AllSame.to_string(), "ALLSAME");
        assert_eq!(Statistic::StandardDeviation.to_string(), "STANDARD_DEVIATION");
        assert_eq!(Statistic::Stats.to_string(), "STATS");
    }

    #[test]
    fn statistic_serde_round_trips_rendered_names() {
        let json = serde_json::to_string(&Statistic::StandardDeviation).unwrap();
        assert_eq!(json, "\"STANDARD_DEVIATION\"");
        let back: Statistic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Statistic::StandardDeviation);
    }
}
