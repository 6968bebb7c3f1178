use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vocab_core::VocabEntry;
use vocab_index::{Scorer, VectorCache};

fn sample_entries(n: usize) -> Vec<VocabEntry> {
    (0..n)
        .map(|i| {
            VocabEntry::new(
                i.to_string(),
                format!("word{} house garden", i % 97),
                format!("Wort{} Haus Garten", i % 89),
                format!("từ{} nhà vườn", i % 83),
            )
        })
        .collect()
}

fn bench_search_1000_entries(c: &mut Criterion) {
    let entries = sample_entries(1000);
    let scorer = Scorer::default();

    c.bench_function("search_1000_entries", |b| {
        b.iter(|| scorer.rank(black_box("haus garden"), &entries).len());
    });
}

fn bench_search_1000_entries_cached(c: &mut Criterion) {
    let entries = sample_entries(1000);
    let scorer = Scorer::default();
    let mut cache = VectorCache::new(scorer.config());

    c.bench_function("search_1000_entries_cached", |b| {
        b.iter(|| {
            scorer
                .rank_cached(black_box("haus garden"), &entries, &mut cache)
                .len()
        });
    });
}

criterion_group!(
    benches,
    bench_search_1000_entries,
    bench_search_1000_entries_cached
);
criterion_main!(benches);
