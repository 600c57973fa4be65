//! Criterion benchmarks for parsing and rendering shell integration features.
//!
//! Run with: `cargo bench -p shell_integration`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use shell_integration::{parse_cli, FeatureSet, RenderMode};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let inputs = [
        ("empty", ""),
        ("global_true", "true"),
        ("single_flag", "sudo"),
        ("cursor", "cursor:underline:steady"),
        (
            "everything",
            "cursor:block:blink,no-path,ssh-env,ssh-terminfo,sudo,no-title",
        ),
    ];
    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse_cli(Some(black_box(input))))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let features = FeatureSet::all(true);

    group.bench_function("config", |b| {
        b.iter(|| black_box(&features).render(RenderMode::Config))
    });
    group.bench_function("env", |b| {
        b.iter(|| black_box(&features).render(RenderMode::Env))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
