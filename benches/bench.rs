use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_bst::LinkedBst;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const WORDS: usize = 25_000;
const LOOKUPS: usize = 1000;

fn rng() -> StdRng { StdRng::seed_from_u64(0x5eed) }

/// Distinct lowercase words in ascending order, standing in for a dictionary file.
fn dictionary(rng: &mut StdRng) -> Vec<String> {
    let mut words: Vec<String> = (0..WORDS * 11 / 10)
        .map(|_| {
            let len = rng.gen_range(3..10);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect();

    words.sort();
    words.dedup();
    words.truncate(WORDS);
    words
}

/// Looks up a sample of dictionary words in a plain vector and in trees built from the same
/// words in sorted order, in shuffled order, and in sorted order followed by a rebalance.
fn word_search(c: &mut Criterion) {
    let mut rng = rng();
    let words = dictionary(&mut rng);
    let lookups: Vec<&String> = (0..LOOKUPS).filter_map(|_| words.choose(&mut rng)).collect();

    let sorted: LinkedBst<&String> = words.iter().collect();

    let mut shuffled_words: Vec<&String> = words.iter().collect();
    shuffled_words.shuffle(&mut rng);
    let shuffled: LinkedBst<&String> = shuffled_words.into_iter().collect();

    let mut rebalanced: LinkedBst<&String> = words.iter().collect();
    rebalanced.rebalance();

    let mut group = c.benchmark_group("word_search");

    group.bench_function("list", |b| b.iter(|| {
        for word in &lookups {
            black_box(words.iter().find(|w| w == word));
        }
    }));

    for (name, bst) in [("sorted_bst", &sorted), ("shuffled_bst", &shuffled), ("rebalanced_bst", &rebalanced)] {
        group.bench_function(name, |b| b.iter(|| {
            for word in &lookups {
                black_box(bst.find(word));
            }
        }));
    }

    group.finish();
}

fn add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove");

    for n in [100usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = rng();
            let mut bst: LinkedBst<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

            b.iter(|| {
                let k = rng.gen_range(0..n);
                bst.add(k);
                black_box(bst.remove(&k))
            });
        });

        group.bench_with_input(BenchmarkId::new("rebalanced_seq", n), &n, |b, &n| {
            let mut bst: LinkedBst<usize> = (0..n).map(|i| i * 2).collect();
            bst.rebalance();

            let mut i = 1;
            b.iter(|| {
                bst.add(i);
                black_box(bst.remove(&i)).ok();
                i = (i + 2) % (2 * n);
            });
        });
    }

    group.finish();
}

fn find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for n in [100usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = rng();
            let mut keys: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            let bst: LinkedBst<usize> = keys.iter().cloned().collect();
            keys.shuffle(&mut rng);

            let mut i = 0;
            b.iter(|| {
                let found = bst.find(&keys[i]);
                i = (i + 1) % n;
                black_box(found);
            });
        });

        group.bench_with_input(BenchmarkId::new("rebalanced_seq", n), &n, |b, &n| {
            let mut bst: LinkedBst<usize> = (0..n).collect();
            bst.rebalance();

            let mut i = 0;
            b.iter(|| {
                let found = bst.find(&i);
                i = (i + 1) % n;
                black_box(found);
            });
        });
    }

    group.finish();
}

fn traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for n in [100usize, 1000, 100_000] {
        let mut rng = rng();
        let bst: LinkedBst<u32> = (0..n).map(|_| rng.gen()).collect();

        group.bench_with_input(BenchmarkId::new("iter", n), &bst, |b, bst| b.iter(|| {
            for item in bst { black_box(item); }
        }));

        group.bench_with_input(BenchmarkId::new("rebalance", n), &bst, |b, bst| {
            let mut bst = bst.clone();
            b.iter(|| bst.rebalance());
        });
    }

    group.finish();
}

criterion_group!(benches, word_search, add_remove, find, traverse);
criterion_main!(benches);
