//! This benchmark measures the cost of comparing basic graph patterns
//! whose triple patterns are listed in opposite orders,
//! which is the worst case for the first candidate tried by the matching.

use algiso_algebra::{algebra_element, triple};
use algiso_isomorphism::isomorphic_trees;
use algiso_tree::Tree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_bgp(size: usize, prefix: &str, reversed: bool) -> Tree {
    let mut patterns: Vec<_> = (0..size)
        .map(|i| {
            triple(
                format!("?{prefix}{i}"),
                "http://example.org/p",
                format!("?{prefix}{}", i + 1),
            )
        })
        .collect();
    if reversed {
        patterns.reverse();
    }
    algebra_element("bgp", patterns).unwrap()
}

fn reversed_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversed chain");
    for size in [2, 4, 6, 8] {
        let expected = make_bgp(size, "x", false);
        let actual = make_bgp(size, "y", true);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(expected, actual),
            |b, (expected, actual)| {
                b.iter(|| black_box(isomorphic_trees(expected, actual)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, reversed_chain);
criterion_main!(benches);
