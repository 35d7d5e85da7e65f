//! Core data model types.
//!
//! Validation produces an in-memory [`DataSet`]: a header [`Record`], the
//! reference [`Shape`] inferred from the first data row, and the cleansed rows
//! that matched it.

use std::fmt;

/// A single record: trimmed field values, one per column.
pub type Record = Vec<String>;

/// Per-column classification used for shape inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The field parses completely as a base-10 signed 64-bit integer.
    Numeric,
    /// Anything else (including floats — only plain integers count as numeric).
    Text,
}

impl FieldKind {
    /// Classify a single (already trimmed) field value.
    pub fn of(value: &str) -> Self {
        if value.parse::<i64>().is_ok() {
            Self::Numeric
        } else {
            Self::Text
        }
    }
}

/// The per-column type shape of a record.
///
/// Shapes compare positionally and by exact length: a row with a different
/// field count than the reference row never has an equal shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape(Vec<FieldKind>);

impl Shape {
    /// Derive the shape of a record, one flag per field.
    pub fn of(fields: &[String]) -> Self {
        Self(fields.iter().map(|f| FieldKind::of(f)).collect())
    }

    /// Number of columns described by this shape.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the shape describes zero columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders the flag-string form: `0` for numeric columns, `1` for text.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.0 {
            let flag = match kind {
                FieldKind::Numeric => '0',
                FieldKind::Text => '1',
            };
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

/// In-memory cleansed tabular dataset.
///
/// Rows are stored as `Vec<Record>` in file order. Invariant: every row's
/// shape equals [`DataSet::shape`], which implies every row has the same field
/// count as the reference data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Header record (canonical field names).
    pub header: Record,
    /// Reference shape inferred from the first data row.
    pub shape: Shape,
    /// Cleansed rows, in file order.
    pub rows: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from its parts.
    pub fn new(header: Record, shape: Shape, rows: Vec<Record>) -> Self {
        Self {
            header,
            shape,
            rows,
        }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the values of one column, in row order.
    ///
    /// Rows without that column are skipped; given the shape invariant this
    /// only happens for an out-of-range index.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(move |row| {
            row.get(idx).map(String::as_str)
        })
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the header and reference shape.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[String]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            header: self.header.clone(),
            shape: self.shape.clone(),
            rows,
        }
    }

    /// Serialize back to TSV text: the header line followed by every row,
    /// fields joined by single tabs, each line terminated with `\r\n`.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        if !self.header.is_empty() {
            out.push_str(&self.header.join("\t"));
            out.push_str("\r\n");
        }
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push_str("\r\n");
        }
        out
    }
}
