//! Benchmark for the vanity commit search

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vanity_core::digest::{TrialHasher, digest};
use vanity_core::record::split;
use vanity_core::{SearchConfig, search};

const COMMIT: &[u8] = b"tree 0000000000000000000000000000000000000000
parent 1111111111111111111111111111111111111111
author Author Name <author@example.com> 1577872800 +0000
committer Committer Name <committer@example.com> 1577876400 +0100

Subject line of a reasonably sized commit message

A body paragraph long enough that re-hashing the header block on every
trial is a noticeable share of the work. Most real commits look like this.
";

fn bench_digest(c: &mut Criterion) {
    let parts = split(COMMIT).unwrap();

    c.bench_function("digest_one_shot", |b| {
        let mut n: u64 = 1_000_000;
        b.iter(|| {
            n += 1;
            digest(parts.head, "c0ffee", black_box(n), parts.tail)
        })
    });

    c.bench_function("digest_cached", |b| {
        let mut hasher = TrialHasher::new(parts, "c0ffee");
        let mut n: u64 = 1_000_000;
        b.iter(|| {
            n += 1;
            hasher.digest(black_box(n))
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let config = SearchConfig::new("c0f", "c0ffee");

    c.bench_function("search_3_nibbles", |b| {
        b.iter(|| search(black_box(COMMIT), &config).unwrap())
    });
}

criterion_group!(benches, bench_digest, bench_search);
criterion_main!(benches);
