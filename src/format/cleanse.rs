//! Line tokenization and shape-based cleansing.

use crate::types::{Record, Shape};

/// Split a line into trimmed fields.
///
/// Tokens are separated by single tab characters; each token is trimmed of
/// surrounding whitespace and dropped entirely if nothing remains. Consecutive
/// or trailing tabs therefore collapse, so the field count of a ragged line
/// can shrink.
pub fn split_fields(line: &str) -> Record {
    line.split('\t')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep every line of `raw` whose recomputed shape equals `shape`.
///
/// All lines take part, the header line included: a header whose columns are
/// all textual matches a fully textual reference shape and is kept as a data
/// row. Non-conforming lines are dropped silently.
pub fn cleanse(raw: &str, shape: &Shape) -> Vec<Record> {
    raw.lines()
        .map(split_fields)
        .filter(|fields| Shape::of(fields) == *shape)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{cleanse, split_fields};
    use crate::types::Shape;

    fn record(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn split_fields_trims_whitespace() {
        assert_eq!(split_fields(" 1 \t Ada "), record(&["1", "Ada"]));
    }

    #[test]
    fn split_fields_collapses_empty_tokens() {
        assert_eq!(split_fields("1\t\t\tAda\t"), record(&["1", "Ada"]));
        assert_eq!(split_fields("\t \t"), Vec::<String>::new());
    }

    #[test]
    fn cleanse_keeps_only_matching_shapes() {
        let shape = Shape::of(&record(&["1", "Ada"]));
        let raw = "id\tname\r\n1\tAda\r\nno\tnumber\r\n2\tBob\r\n";
        let rows = cleanse(raw, &shape);
        assert_eq!(rows, vec![record(&["1", "Ada"]), record(&["2", "Bob"])]);
    }

    #[test]
    fn cleanse_drops_rows_with_differing_field_counts() {
        let shape = Shape::of(&record(&["1", "Ada"]));
        let raw = "1\tAda\r\n2\tBob\textra\r\n3\r\n4\tEve\r\n";
        let rows = cleanse(raw, &shape);
        assert_eq!(rows, vec![record(&["1", "Ada"]), record(&["4", "Eve"])]);
    }

    #[test]
    fn cleanse_normalizes_ragged_delimiters_before_matching() {
        let shape = Shape::of(&record(&["1", "Ada"]));
        // Double tabs collapse, so this line still matches the shape.
        let rows = cleanse("5\t\t\tEve\t\r\n", &shape);
        assert_eq!(rows, vec![record(&["5", "Eve"])]);
    }

    #[test]
    fn cleanse_is_idempotent_over_its_own_output() {
        let shape = Shape::of(&record(&["1", "Ada"]));
        let raw = "1\tAda\r\nbad row here\r\n2\tBob\r\n";
        let once = cleanse(raw, &shape);

        let rejoined: String = once
            .iter()
            .map(|row| format!("{}\r\n", row.join("\t")))
            .collect();
        assert_eq!(cleanse(&rejoined, &shape), once);
    }
}
