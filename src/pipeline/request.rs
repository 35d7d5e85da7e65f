//! Immutable pipeline request configuration.
//!
//! A [`TsvRequest`] is built through the fluent [`RequestBuilder`] and
//! validated once at [`RequestBuilder::build`]; after that it never changes.
//! Absent filters are `Option::None`, not marker field names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TsvError, TsvResult};
use crate::stats::Statistic;

/// Target value of an exact-match select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectTarget {
    /// Match rows whose value parses to this integer.
    Number(i64),
    /// Match rows whose value equals this string byte-for-byte.
    Text(String),
}

impl SelectTarget {
    /// Whether a raw field value matches this target.
    ///
    /// Numeric targets compare the parsed value, so `007` matches a target of
    /// `7`; values that do not parse simply never match.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Number(n) => value.parse::<i64>() == Ok(*n),
            Self::Text(s) => value == s,
        }
    }
}

impl From<i64> for SelectTarget {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SelectTarget {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SelectTarget {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Exact-match row filter on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectFilter {
    /// Column to match against.
    pub field: String,
    /// Value a row must carry to be kept.
    pub target: SelectTarget,
}

/// A statistic to compute over one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Column the statistic is computed over.
    pub field: String,
    /// Which statistic to compute.
    pub statistic: Statistic,
}

/// A finalized pipeline request: source file, optional select filter,
/// optional statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsvRequest {
    source: PathBuf,
    select: Option<SelectFilter>,
    compute: Option<ComputeRequest>,
}

impl TsvRequest {
    /// Start building a request for `source`.
    pub fn builder(source: impl Into<PathBuf>) -> RequestBuilder {
        RequestBuilder {
            source: source.into(),
            select: None,
            compute: None,
        }
    }

    /// Path of the file to validate and filter.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The select filter, if any.
    pub fn select(&self) -> Option<&SelectFilter> {
        self.select.as_ref()
    }

    /// The compute request, if any.
    pub fn compute(&self) -> Option<&ComputeRequest> {
        self.compute.as_ref()
    }
}

/// Fluent builder for [`TsvRequest`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    source: PathBuf,
    select: Option<SelectFilter>,
    compute: Option<ComputeRequest>,
}

impl RequestBuilder {
    /// Keep only rows whose `field` value matches `target` exactly.
    pub fn select(mut self, field: impl Into<String>, target: impl Into<SelectTarget>) -> Self {
        self.select = Some(SelectFilter {
            field: field.into(),
            target: target.into(),
        });
        self
    }

    /// Compute `statistic` over `field` after filtering.
    pub fn compute(mut self, field: impl Into<String>, statistic: Statistic) -> Self {
        self.compute = Some(ComputeRequest {
            field: field.into(),
            statistic,
        });
        self
    }

    /// Validate and finalize the request.
    pub fn build(self) -> TsvResult<TsvRequest> {
        if self.source.as_os_str().is_empty() {
            return Err(TsvError::InvalidRequest {
                message: "source path is empty".to_string(),
            });
        }
        if let Some(filter) = &self.select {
            if filter.field.is_empty() {
                return Err(TsvError::InvalidRequest {
                    message: "select filter has an empty field name".to_string(),
                });
            }
        }
        if let Some(compute) = &self.compute {
            if compute.field.is_empty() {
                return Err(TsvError::InvalidRequest {
                    message: "compute request has an empty field name".to_string(),
                });
            }
        }
        Ok(TsvRequest {
            source: self.source,
            select: self.select,
            compute: self.compute,
        })
    }
}
