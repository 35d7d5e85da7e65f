//! Format validation and cleansing.
//!
//! A well-formed file is tab-separated text whose first line names the
//! columns and whose second line (the first data row) fixes the per-column
//! type [`Shape`] for the rest of the file. Validation composes three steps:
//!
//! - [`parse_header`]: read and tokenize the first line
//! - [`derive_shape`]: infer the reference shape from the first data row
//! - [`cleanse`]: keep only the lines whose recomputed shape matches
//!
//! [`validate`] runs all three and produces a [`DataSet`]. There is no
//! quoting or escaping support; fields are strictly tab-delimited and
//! whitespace-trimmed.

pub mod cleanse;

pub use cleanse::{cleanse, split_fields};

use crate::error::{TsvError, TsvResult};
use crate::types::{DataSet, Record, Shape};

/// Read the header (first line) of a raw file.
///
/// Fails with [`TsvError::NoHeader`] when the file has zero lines or its
/// first line is empty after trimming.
pub fn parse_header(raw: &str) -> TsvResult<Record> {
    match raw.lines().next() {
        Some(line) if !line.trim().is_empty() => Ok(split_fields(line)),
        _ => Err(TsvError::NoHeader),
    }
}

/// Infer the reference [`Shape`] from the second line (the first data row).
///
/// Fails with [`TsvError::MalformedHeader`] when the line is absent or when
/// its cleansed field count differs from the header's.
pub fn derive_shape(raw: &str, header_len: usize) -> TsvResult<Shape> {
    let Some(line) = raw.lines().nth(1) else {
        return Err(TsvError::MalformedHeader {
            expected: header_len,
            found: 0,
        });
    };
    let fields = split_fields(line);
    if fields.len() != header_len {
        return Err(TsvError::MalformedHeader {
            expected: header_len,
            found: fields.len(),
        });
    }
    Ok(Shape::of(&fields))
}

/// Validate a raw file into a cleansed [`DataSet`].
///
/// On [`TsvError::NoHeader`] / [`TsvError::MalformedHeader`] no cleansing is
/// attempted; the error short-circuits the whole pipeline.
pub fn validate(raw: &str) -> TsvResult<DataSet> {
    let header = parse_header(raw)?;
    let shape = derive_shape(raw, header.len())?;
    let rows = cleanse(raw, &shape);
    Ok(DataSet::new(header, shape, rows))
}

#[cfg(test)]
mod tests {
    use super::{derive_shape, parse_header, validate};
    use crate::error::TsvError;

    #[test]
    fn parse_header_reads_first_line_fields() {
        let header = parse_header("id\tname\r\n1\tAda\r\n").unwrap();
        assert_eq!(header, vec!["id".to_string(), "name".to_string()]);
    }

    #[test]
    fn parse_header_fails_on_empty_file() {
        assert!(matches!(parse_header(""), Err(TsvError::NoHeader)));
    }

    #[test]
    fn parse_header_fails_on_blank_first_line() {
        assert!(matches!(parse_header("  \t \r\ndata\r\n"), Err(TsvError::NoHeader)));
    }

    #[test]
    fn derive_shape_fails_without_a_data_row() {
        let err = derive_shape("id\tname\r\n", 2).unwrap_err();
        assert!(matches!(
            err,
            TsvError::MalformedHeader {
                expected: 2,
                found: 0
            }
        ));
    }

    #[test]
    fn derive_shape_fails_on_field_count_mismatch() {
        let err = derive_shape("id\tname\r\n1\tAda\textra\r\n", 2).unwrap_err();
        assert!(matches!(
            err,
            TsvError::MalformedHeader {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn validate_builds_dataset_with_matching_rows_only() {
        let raw = "id\tname\r\n1\tAda\r\n2\tBob\r\nnot\ta\tmatch\r\n3\tEve\r\n";
        let ds = validate(raw).unwrap();
        assert_eq!(ds.header, vec!["id".to_string(), "name".to_string()]);
        assert_eq!(ds.shape.to_string(), "01");
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.rows[2], vec!["3".to_string(), "Eve".to_string()]);
    }

    #[test]
    fn validate_keeps_header_as_row_when_all_columns_are_text() {
        // With a fully textual shape the header line itself matches it and
        // survives cleansing as a data row.
        let raw = "name\tcity\r\nAda\tLondon\r\n";
        let ds = validate(raw).unwrap();
        assert_eq!(ds.shape.to_string(), "11");
        assert_eq!(
            ds.rows,
            vec![
                vec!["name".to_string(), "city".to_string()],
                vec!["Ada".to_string(), "London".to_string()],
            ]
        );
    }

    #[test]
    fn validate_drops_header_when_shape_has_numeric_columns() {
        let raw = "id\tname\r\n1\tAda\r\n";
        let ds = validate(raw).unwrap();
        assert_eq!(ds.rows, vec![vec!["1".to_string(), "Ada".to_string()]]);
    }

    #[test]
    fn cleansing_is_idempotent() {
        let raw = "id\tname\r\n1\tAda\r\nbad line\r\n2\tBob\r\n";
        let first = validate(raw).unwrap();
        let second = validate(&first.to_tsv()).unwrap();
        assert_eq!(first, second);
    }
}
