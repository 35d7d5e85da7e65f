//! Aggregate operations over a single dataset column.

use crate::error::{TsvError, TsvResult};
use crate::types::DataSet;

use super::{StatValue, Statistic};

/// Locate a column by exact name match.
///
/// When multiple header fields share the name, the **last** matching index
/// wins.
pub fn field_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().rposition(|field| field == name)
}

fn resolve(dataset: &DataSet, field: &str) -> TsvResult<usize> {
    field_index(&dataset.header, field).ok_or_else(|| TsvError::FieldNotFound {
        name: field.to_string(),
    })
}

/// Whether every row's value in `field` is byte-for-byte identical.
///
/// An empty or single-row dataset is trivially `true`.
pub fn all_same(dataset: &DataSet, field: &str) -> TsvResult<bool> {
    let idx = resolve(dataset, field)?;
    let mut values = dataset.column(idx);
    Ok(match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    })
}

/// Number of rows in the dataset. Field-independent.
pub fn count(dataset: &DataSet) -> i64 {
    dataset.row_count() as i64
}

/// Largest value in `field`, numeric-first.
///
/// Values that parse as `i64` compete numerically; values that do not compete
/// lexicographically, seeded with the first row's raw value. The numeric
/// winner is returned when at least one value parsed; otherwise the
/// lexicographic one. `Ok(None)` for an empty dataset.
pub fn max(dataset: &DataSet, field: &str) -> TsvResult<Option<StatValue>> {
    let idx = resolve(dataset, field)?;
    Ok(best(dataset, idx, Direction::Max))
}

/// Smallest value in `field`; mirror of [`max`].
pub fn min(dataset: &DataSet, field: &str) -> TsvResult<Option<StatValue>> {
    let idx = resolve(dataset, field)?;
    Ok(best(dataset, idx, Direction::Min))
}

#[derive(Clone, Copy)]
enum Direction {
    Min,
    Max,
}

impl Direction {
    fn wins_num(self, candidate: i64, best: i64) -> bool {
        match self {
            Self::Min => candidate < best,
            Self::Max => candidate > best,
        }
    }

    fn wins_text(self, candidate: &str, best: &str) -> bool {
        match self {
            Self::Min => candidate < best,
            Self::Max => candidate > best,
        }
    }
}

/// Shared min/max walk over the numeric and lexicographic tracks.
fn best(dataset: &DataSet, idx: usize, direction: Direction) -> Option<StatValue> {
    let mut best_num: Option<i64> = None;
    let mut best_text: Option<&str> = None;

    for value in dataset.column(idx) {
        // The text track is seeded with the first row's raw value, numeric
        // or not; values that parse never update it afterwards.
        if best_text.is_none() {
            best_text = Some(value);
        }
        match value.parse::<i64>() {
            Ok(n) => {
                best_num = Some(match best_num {
                    Some(b) if !direction.wins_num(n, b) => b,
                    _ => n,
                });
            }
            Err(_) => {
                if let Some(b) = best_text {
                    if direction.wins_text(value, b) {
                        best_text = Some(value);
                    }
                }
            }
        }
    }

    match (best_num, best_text) {
        (Some(n), _) => Some(StatValue::Int(n)),
        (None, Some(t)) => Some(StatValue::Text(t.to_string())),
        (None, None) => None,
    }
}

/// Sum of every value in `field` that parses as an integer.
///
/// Non-numeric values are silently skipped; an empty dataset (or a column
/// with no numeric values) sums to `0`.
pub fn sum(dataset: &DataSet, field: &str) -> TsvResult<i64> {
    let idx = resolve(dataset, field)?;
    Ok(dataset
        .column(idx)
        .filter_map(|value| value.parse::<i64>().ok())
        .sum())
}

/// Truncating integer mean: [`sum`] divided by [`count`].
///
/// The denominator is the **total row count**, not the number of values that
/// parsed — rows whose value is skipped by [`sum`] still dilute the mean.
/// Fails with [`TsvError::DivisionByZero`] on an empty dataset.
pub fn average(dataset: &DataSet, field: &str) -> TsvResult<i64> {
    let rows = count(dataset);
    if rows == 0 {
        return Err(TsvError::DivisionByZero {
            statistic: Statistic::Average.to_string(),
            rows: 0,
        });
    }
    Ok(sum(dataset, field)? / rows)
}

/// Truncating integer standard deviation of `field`.
///
/// Squared deviations from [`average`] are accumulated over parsed values
/// only (same skip policy as [`sum`]), divided (truncating) by `count - 1`,
/// then reduced by integer square root. Fails with
/// [`TsvError::DivisionByZero`] when the dataset has fewer than two rows.
pub fn standard_deviation(dataset: &DataSet, field: &str) -> TsvResult<i64> {
    let rows = count(dataset);
    if rows <= 1 {
        return Err(TsvError::DivisionByZero {
            statistic: Statistic::StandardDeviation.to_string(),
            rows: dataset.row_count(),
        });
    }
    let idx = resolve(dataset, field)?;
    let mean = average(dataset, field)?;
    let squared_sum: i64 = dataset
        .column(idx)
        .filter_map(|value| value.parse::<i64>().ok())
        .map(|v| (v - mean).pow(2))
        .sum();
    Ok((squared_sum / (rows - 1)).isqrt())
}
