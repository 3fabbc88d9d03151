//! Union-Find Doubling Comparison
//!
//! Times how long each union-find variant takes to connect `n` sites with
//! random pairs, for `n = 200, 400, … 12800` by default.
//!
//! Run with: cargo run --example union_find -p lapbench-demos --release -- --runs 10

use lapbench::BenchmarkRunner;
use lapbench_demos::union_find::{
    HeightWeightedUnionFind, SizeWeightedUnionFind, UnionFind, count_unions,
};
use std::hint::black_box;

fn connect_all<U: UnionFind>(mut uf: U) -> usize {
    count_unions(&mut uf, &mut rand::thread_rng())
}

fn main() {
    let suite = vec![
        BenchmarkRunner::new("weighted quick union by height", |n: &mut usize| {
            black_box(connect_all(HeightWeightedUnionFind::new(*n, false)));
        }),
        BenchmarkRunner::new(
            "weighted quick union by height with path compression",
            |n: &mut usize| {
                black_box(connect_all(HeightWeightedUnionFind::new(*n, true)));
            },
        ),
        BenchmarkRunner::new("weighted quick union with path compression", |n: &mut usize| {
            black_box(connect_all(SizeWeightedUnionFind::new(*n)));
        }),
    ];

    if let Err(e) = lapbench::run(suite) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
