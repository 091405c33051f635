use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use rbtree_set::red_black_tree::RedBlackSet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_red_black_set_insert(c: &mut Criterion) {
    c.bench_function("bench red_black_tree insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = RedBlackSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_red_black_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench red_black_tree contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_red_black_set_insert_remove(c: &mut Criterion) {
    c.bench_function("bench red_black_tree insert remove", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = RedBlackSet::with_capacity(NUM_OF_OPERATIONS);
            let mut keys = Vec::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                set.insert(key);
                keys.push(key);
            }
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_red_black_set_insert,
    bench_red_black_set_contains,
    bench_red_black_set_insert_remove
);
criterion_main!(benches);
