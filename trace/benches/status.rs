use criterion::{criterion_group, criterion_main, Criterion};

use span_status::{Status, StatusCanonicalCode};

fn benchmark_create_template(c: &mut Criterion) {
    c.bench_function("create_template", |b| {
        b.iter(|| Status::create(StatusCanonicalCode::Ok, None))
    });
}

fn benchmark_create_with_description(c: &mut Criterion) {
    c.bench_function("create_with_description", |b| {
        b.iter(|| Status::create(StatusCanonicalCode::Error, Some("timeout contacting upstream")))
    });
}

criterion_group!(
    benches,
    benchmark_create_template,
    benchmark_create_with_description
);

criterion_main!(benches);
