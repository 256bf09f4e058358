use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_fixtures::decimal::{fraction_digits, Fraction};
use numeric_fixtures::{
    write_fixture, Composer, Decimal, Dialect, FeatureArea, Fixture, Generator, Metadata,
};

fn dialects() -> Vec<(&'static str, Dialect)> {
    let hex = Dialect::builder()
        .with_mantissa_radix(16)
        .with_exponent_base(Some(2))
        .with_exponent_radix(Some(10))
        .with_exponent_char('p')
        .with_base_prefix(Some('x'))
        .build()
        .unwrap();
    let binary = Dialect::builder()
        .with_mantissa_radix(2)
        .with_base_prefix(Some('b'))
        .build()
        .unwrap();
    let literal = Dialect::builder()
        .with_no_exponent(true)
        .with_digit_separator(None)
        .build()
        .unwrap();

    vec![
        ("decimal", Dialect::default()),
        ("hex", hex),
        ("binary", binary),
        ("literal", literal),
    ]
}

fn benchmark_generate_fixture(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_fixture");

    for (name, dialect) in dialects() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &dialect, |b, dialect| {
            b.iter(|| Fixture::generate(black_box(dialect), Metadata::new("Bench", "bench")))
        });
    }

    group.finish();
}

fn benchmark_write_fixture(c: &mut Criterion) {
    let dialect = Dialect::default();
    let metadata = Metadata::new("Bench", "bench").with_description(Some("streamed"));

    c.bench_function("write_fixture_to_string", |b| {
        b.iter(|| {
            let mut text = String::new();
            write_fixture(black_box(&dialect), black_box(&metadata), &mut text).unwrap();
            text
        })
    });
}

fn benchmark_persisted_text(c: &mut Criterion) {
    let fixture = Fixture::generate(&Dialect::default(), Metadata::new("Bench", "bench")).unwrap();

    c.bench_function("fixture_to_string", |b| {
        b.iter(|| black_box(&fixture).to_string())
    });
}

fn benchmark_feature_areas(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_area");
    let dialect = Dialect::default();
    let generator = Generator::new(&dialect);

    for area in FeatureArea::SEQUENCE {
        group.bench_with_input(
            BenchmarkId::from_parameter(area.comment()),
            &area,
            |b, area| b.iter(|| generator.collect(black_box(*area))),
        );
    }

    group.finish();
}

fn benchmark_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for (name, dialect) in dialects() {
        let composer = Composer::new(&dialect);
        let value = Decimal::new(11, 11, 2).exponent(-3);
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| composer.compose(black_box(value)))
        });
    }

    group.finish();
}

fn benchmark_fraction_digits(c: &mut Criterion) {
    let terminating = Fraction::new(3u32, 1024u32).unwrap();
    let repeating = Fraction::new(1u32, 3u32).unwrap();

    c.bench_function("fraction_digits_terminating", |b| {
        b.iter(|| fraction_digits(black_box(&terminating), 10))
    });
    c.bench_function("fraction_digits_repeating", |b| {
        b.iter(|| fraction_digits(black_box(&repeating), 10))
    });
}

criterion_group!(
    benches,
    benchmark_generate_fixture,
    benchmark_write_fixture,
    benchmark_persisted_text,
    benchmark_feature_areas,
    benchmark_compose,
    benchmark_fraction_digits
);
criterion_main!(benches);
