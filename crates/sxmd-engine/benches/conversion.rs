use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sxmd_engine::convert;
mod common;

fn bench_convert_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);

    for size in [10, 100, 1000] {
        let content = common::generate_xmd_content(size);
        group.bench_with_input(BenchmarkId::new("xmd", size), &content, |b, content| {
            b.iter(|| convert(std::hint::black_box(content)));
        });
    }

    let prose = common::generate_prose(1000);
    group.bench_function("prose_only", |b| {
        b.iter(|| convert(std::hint::black_box(&prose)));
    });

    group.finish();
}

fn bench_fixtures(c: &mut Criterion) {
    let fixtures = common::fixture_contents();
    c.bench_function("fixtures", |b| {
        b.iter(|| {
            for content in &fixtures {
                std::hint::black_box(convert(content));
            }
        });
    });
}

criterion_group!(benches, bench_convert_sizes, bench_fixtures);
criterion_main!(benches);
