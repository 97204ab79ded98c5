//! Benchmarks for measurement and fixed-width resizing.
//!
//! Run with: cargo bench -p tabula-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tabula_text::{Alignment, measure, resize};

fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn mixed_text(len: usize) -> String {
    "Grüße \u{1F600} naïve café "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    for len in [8, 64, 512] {
        let ascii = ascii_text(len);
        let mixed = mixed_text(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("ascii", len), &ascii, |b, s| {
            b.iter(|| measure(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("mixed", len), &mixed, |b, s| {
            b.iter(|| measure(black_box(s)))
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let text = mixed_text(32);
    for (name, target) in [("pad", 48), ("truncate", 16)] {
        for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
            group.bench_function(format!("{name}/{alignment}"), |b| {
                b.iter(|| resize(black_box(&text), black_box(target), alignment))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_measure, bench_resize);
criterion_main!(benches);
