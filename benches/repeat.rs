#[macro_use]
extern crate criterion;

use criterion::Criterion;

use pegraph::character::digit;

fn repeat_digits(c: &mut Criterion) {
    let data = "1".repeat(64);
    let parser = digit().star();

    parser.parse(&data).into_outcome().expect("should parse correctly");
    c.bench_function("repeat digits", move |b| {
        b.iter(|| parser.parse(&data).into_outcome().unwrap());
    });
}

fn repeat_and_flatten(c: &mut Criterion) {
    let data = "1".repeat(64);
    let parser = digit().plus().flatten();

    c.bench_function("repeat and flatten", move |b| {
        b.iter(|| parser.parse(&data).into_outcome().unwrap());
    });
}

criterion_group!(benches, repeat_digits, repeat_and_flatten);
criterion_main!(benches);
