use std::fs;

use tsv_pipeline::format::validate;
use tsv_pipeline::report::render;
use tsv_pipeline::stats::{self, StatValue, Statistic};
use tsv_pipeline::types::DataSet;

fn people() -> DataSet {
    let raw = fs::read_to_string("tests/fixtures/people.tsv").unwrap();
    validate(&raw).unwrap()
}

#[test]
fn count_counts_cleansed_rows() {
    let ds = people();
    assert_eq!(stats::count(&ds), 4);
}

#[test]
fn sum_and_average_over_age() {
    let ds = people();
    // Ages 36, 41, 29, 33 (the "thirty" row was cleansed away).
    assert_eq!(stats::sum(&ds, "age").unwrap(), 139);
    assert_eq!(stats::average(&ds, "age").unwrap(), 34);
}

#[test]
fn min_max_over_numeric_and_textual_columns() {
    let ds = people();
    assert_eq!(stats::max(&ds, "age").unwrap(), Some(StatValue::Int(41)));
    assert_eq!(stats::min(&ds, "age").unwrap(), Some(StatValue::Int(29)));
    assert_eq!(
        stats::max(&ds, "name").unwrap(),
        Some(StatValue::Text("Lu".to_string()))
    );
    assert_eq!(
        stats::min(&ds, "name").unwrap(),
        Some(StatValue::Text("Ada".to_string()))
    );
}

#[test]
fn all_same_over_city_and_duplicated_values() {
    let ds = people();
    assert!(!stats::all_same(&ds, "city").unwrap());

    let uniform = validate("id\tcity\r\n1\tLondon\r\n2\tLondon\r\n").unwrap();
    assert!(stats::all_same(&uniform, "city").unwrap());
}

#[test]
fn field_index_prefers_the_last_duplicate() {
    let ds = validate("A\tB\tA\r\n1\tx\t2\r\n").unwrap();
    assert_eq!(stats::field_index(&ds.header, "A"), Some(2));
}

#[test]
fn standard_deviation_over_age() {
    let ds = people();
    // mean 34; squared deviations 4 + 49 + 25 + 1 = 79; 79/3 = 26; isqrt = 5.
    assert_eq!(stats::standard_deviation(&ds, "age").unwrap(), 5);
}

#[test]
fn renders_exact_sentences_end_to_end() {
    let ds = people();
    assert_eq!(
        render(&ds, "age", Statistic::Count),
        vec!["The value of COUNT is 4.".to_string()]
    );
    assert_eq!(
        render(&ds, "age", Statistic::Sum),
        vec!["The value of SUM is 139.".to_string()]
    );
    assert_eq!(
        render(&ds, "age", Statistic::Max),
        vec!["The value of MAX is 41.".to_string()]
    );
    assert_eq!(
        render(&ds, "name", Statistic::Min),
        vec!["The value of MIN is Ada.".to_string()]
    );
    assert_eq!(
        render(&ds, "age", Statistic::Stats),
        vec![
            "The value of STATS is COUNT: 4 SUM: 139 AVERAGE: 34 STANDARD_DEVIATION: 5."
                .to_string()
        ]
    );
}

#[test]
fn each_statistic_dispatches_independently() {
    let ds = people();
    // STANDARD_DEVIATION must not drag the STATS composite along with it.
    assert_eq!(
        render(&ds, "age", Statistic::StandardDeviation),
        vec!["The value of STANDARD_DEVIATION is 5.".to_string()]
    );
}

#[test]
fn missing_field_reports_but_does_not_abort() {
    let ds = people();
    let lines = render(&ds, "salary", Statistic::Sum);
    assert_eq!(
        lines,
        vec![
            "Accurate field not specified.".to_string(),
            "The value of SUM is unavailable.".to_string(),
        ]
    );
    // Sibling computations still work afterwards.
    assert_eq!(stats::sum(&ds, "age").unwrap(), 139);
}
