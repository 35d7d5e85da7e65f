use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tsv_pipeline::format::validate;
use tsv_pipeline::report::render;
use tsv_pipeline::stats::Statistic;

/// Generate a TSV with `rows` data rows; every tenth row is malformed so the
/// cleanser has work to do.
fn generate_tsv(rows: usize) -> String {
    let mut out = String::from("id\tname\tscore\r\n");
    out.push_str("0\trow0\t50\r\n");
    for i in 1..rows {
        if i % 10 == 0 {
            out.push_str("this line does not conform\r\n");
        } else {
            out.push_str(&format!("{i}\trow{i}\t{}\r\n", (i * 7) % 100));
        }
    }
    out
}

fn bench_validate(c: &mut Criterion) {
    let raw = generate_tsv(10_000);
    c.bench_function("validate_10k_rows", |b| {
        b.iter(|| validate(black_box(&raw)).unwrap())
    });
}

fn bench_statistics(c: &mut Criterion) {
    let raw = generate_tsv(10_000);
    let ds = validate(&raw).unwrap();
    c.bench_function("stats_composite_10k_rows", |b| {
        b.iter(|| render(black_box(&ds), "score", Statistic::Stats))
    });
}

criterion_group!(benches, bench_validate, bench_statistics);
criterion_main!(benches);
