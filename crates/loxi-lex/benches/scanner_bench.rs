//! Scanner throughput benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use loxi_lex::scan;

fn bench_scan_arithmetic(c: &mut Criterion) {
    let source = "print (1 + 2.5) * 3 - 4 / 5;\n".repeat(200);
    c.bench_function("scan_arithmetic", |b| b.iter(|| scan(black_box(&source))));
}

fn bench_scan_strings(c: &mut Criterion) {
    let source = "\"one string\" + \"another\nmultiline string\";\n".repeat(200);
    c.bench_function("scan_strings", |b| b.iter(|| scan(black_box(&source))));
}

criterion_group!(benches, bench_scan_arithmetic, bench_scan_strings);
criterion_main!(benches);
