use addon_validator::core::filter::Filter;
use addon_validator::core::harness::{self, ExecutionMode};
use addon_validator::core::registry;
use addon_validator::plugins::reference_bundle;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_filter_resolution(c: &mut Criterion) {
    let registries = registry::global().expect("bootstrap");
    let mut group = c.benchmark_group("filter_resolution");

    for (label, disabled, enabled) in [
        ("all", "", ""),
        ("disabled", "AM0001,AM0003", ""),
        ("enabled", "", "AM0002, AM0004"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let filter = Filter::new(&registries.validators, disabled, enabled)
                    .expect("valid filter");
                black_box(filter.len());
            });
        });
    }
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let registries = registry::global().expect("bootstrap");
    let filter = Filter::new(&registries.validators, "", "").expect("valid filter");
    let mut group = c.benchmark_group("validate_matrix");

    for n_bundles in [1usize, 16, 128] {
        let bundles = vec![reference_bundle(); n_bundles];
        for (label, mode) in [
            ("sequential", ExecutionMode::Sequential),
            ("parallel", ExecutionMode::Parallel),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n_bundles), &bundles, |b, bundles| {
                b.iter(|| black_box(harness::run_matrix(filter.validators(), bundles, mode)));
            });
        }
    }
    group.finish();
}

fn bench_self_tests(c: &mut Criterion) {
    let tests = registry::global().expect("bootstrap").tests.all();
    c.bench_function("run_self_tests", |b| {
        b.iter(|| black_box(harness::run_self_tests(&tests)));
    });
}

criterion_group!(benches, bench_filter_resolution, bench_matrix, bench_self_tests);
criterion_main!(benches);
