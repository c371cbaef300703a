use btree::BTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;

const TREE_SIZE: u64 = 10_000;

fn shuffled_keys() -> Vec<u64> {
    let mut keys: Vec<u64> = (0..TREE_SIZE).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(42));
    keys
}

fn insertion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let keys = shuffled_keys();

    for degree in [2, 6, 16, 64] {
        group.bench_with_input(BenchmarkId::new("btree", degree), &degree, |b, &degree| {
            b.iter(|| {
                let mut tree = BTree::new(degree).unwrap();
                for key in &keys {
                    tree.insert(*key);
                }
                black_box(tree);
            })
        });
    }

    group.bench_function("std_btreeset", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
            black_box(set);
        })
    });

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let keys = shuffled_keys();

    let mut std_set = BTreeSet::new();
    std_set.extend(keys.iter().copied());

    for degree in [2, 6, 16, 64] {
        let mut tree = BTree::new(degree).unwrap();
        tree.extend(keys.iter().copied());
        group.bench_with_input(BenchmarkId::new("btree", degree), &tree, |b, tree| {
            b.iter(|| {
                for key in keys.iter().step_by(7) {
                    black_box(tree.search(black_box(key)));
                }
            })
        });
    }

    group.bench_function("std_btreeset", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(7) {
                black_box(std_set.contains(black_box(key)));
            }
        })
    });

    group.finish();
}

fn removal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let keys = shuffled_keys();

    for degree in [2, 6, 16, 64] {
        let mut tree = BTree::new(degree).unwrap();
        tree.extend(keys.iter().copied());
        group.bench_with_input(BenchmarkId::new("btree", degree), &tree, |b, tree| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in &keys {
                        tree.remove(key);
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn traversal_benchmark(c: &mut Criterion) {
    let mut tree = BTree::with_default_degree();
    tree.extend(shuffled_keys());

    c.bench_function("traverse_default_degree", |b| {
        b.iter(|| black_box(tree.traverse().sum::<u64>()))
    });
}

criterion_group!(
    benches,
    insertion_benchmark,
    lookup_benchmark,
    removal_benchmark,
    traversal_benchmark
);
criterion_main!(benches);
