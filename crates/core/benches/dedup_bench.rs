use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use seqdedup_core::approx_dedup::ApproxDeduplicator;
use seqdedup_core::exact_dedup::ExactDeduplicator;
use seqdedup_core::key::DuplicateType;
use seqdedup_formats::SeqRecord;

fn make_records(count: usize, distinct: usize) -> Vec<SeqRecord> {
    (0..count)
        .map(|i| {
            SeqRecord::new(
                format!("read_{} sample", i % distinct),
                format!("ACGTACGTAC{}", i % distinct),
            )
        })
        .collect()
}

fn bench_exact_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_dedup");
    group.throughput(Throughput::Elements(10_000));

    let unique = make_records(10_000, 10_000);
    group.bench_function("10k_unique", |b| {
        b.iter(|| {
            let mut dedup = ExactDeduplicator::with_capacity(DuplicateType::HeaderExact, 10_000);
            for record in &unique {
                black_box(dedup.is_duplicate(record));
            }
        });
    });

    let half_dup = make_records(10_000, 5_000);
    group.bench_function("10k_50pct_dup", |b| {
        b.iter(|| {
            let mut dedup = ExactDeduplicator::with_capacity(DuplicateType::HeaderExact, 10_000);
            for record in &half_dup {
                black_box(dedup.is_duplicate(record));
            }
        });
    });

    group.bench_function("10k_id_and_sequence", |b| {
        b.iter(|| {
            let mut dedup = ExactDeduplicator::with_capacity(DuplicateType::IdAndSequence, 10_000);
            for record in &half_dup {
                black_box(dedup.is_duplicate(record));
            }
        });
    });

    group.finish();
}

fn bench_approx_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("approx_dedup");
    group.throughput(Throughput::Elements(10_000));

    let half_dup = make_records(10_000, 5_000);
    group.bench_function("10k_two_pass", |b| {
        b.iter(|| {
            let mut dedup = ApproxDeduplicator::with_capacity(DuplicateType::HeaderExact, 10_000);
            for record in &half_dup {
                dedup.observe(record);
            }
            for record in &half_dup {
                black_box(dedup.take_first(record));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_exact_dedup, bench_approx_dedup);
criterion_main!(benches);
