//! Property-based checks of the clustering engine against a flood-fill oracle.
//!
//! Grids are drawn with small palettes so that large regions, merges, and
//! ragged final rows all show up frequently.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::{
    ClusterEngine, ClusterEngineBuilder, ClusterSet, GridShape, MergeStrategy,
    test_utils::{flood_fill_regions, neighbors, suite_proptest_config},
};

#[derive(Debug, Clone)]
struct GridFixture {
    cells: Vec<u8>,
    columns: usize,
}

fn grid_strategy() -> impl Strategy<Value = GridFixture> {
    (1_usize..=12, 1_u8..=4).prop_flat_map(|(columns, palette)| {
        prop::collection::vec(0..palette, 0..=columns * 12)
            .prop_map(move |cells| GridFixture { cells, columns })
    })
}

fn engine(min_cluster_size: usize, strategy: MergeStrategy) -> ClusterEngine {
    ClusterEngineBuilder::new()
        .with_min_cluster_size(min_cluster_size)
        .with_merge_strategy(strategy)
        .with_grid_shape(GridShape::Lenient)
        .build()
        .expect("configuration must be valid")
}

fn run(fixture: &GridFixture, engine: &ClusterEngine) -> ClusterSet {
    engine
        .find_clusters(&fixture.cells, fixture.columns)
        .expect("lenient grids with columns >= 1 must cluster")
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn matches_flood_fill_oracle(
        fixture in grid_strategy(),
        min in 1_usize..=5,
        strategy in prop_oneof![Just(MergeStrategy::UnionFind), Just(MergeStrategy::EagerRewrite)],
    ) {
        let expected: Vec<Vec<usize>> = flood_fill_regions(&fixture.cells, fixture.columns)
            .into_iter()
            .filter(|region| region.len() >= min)
            .collect();
        let actual = run(&fixture, &engine(min, strategy)).into_cell_lists();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn strategies_agree(fixture in grid_strategy()) {
        let union_find = run(&fixture, &engine(3, MergeStrategy::UnionFind));
        let eager = run(&fixture, &engine(3, MergeStrategy::EagerRewrite));
        prop_assert_eq!(union_find, eager);
    }

    #[test]
    fn clusters_are_partitioned_homogeneous_and_large(fixture in grid_strategy()) {
        let set = run(&fixture, &ClusterEngine::default());
        let mut seen = HashSet::new();
        for cluster in &set {
            prop_assert!(cluster.len() >= 3);
            let first = fixture.cells[cluster.cells()[0]];
            for &cell in cluster.cells() {
                prop_assert!(cell < fixture.cells.len());
                prop_assert!(seen.insert(cell), "cell {} appears twice", cell);
                prop_assert_eq!(fixture.cells[cell], first);
                prop_assert_eq!(set.cluster_of(cell), Some(cluster.id()));
            }
        }
    }

    #[test]
    fn clusters_are_connected_and_maximal(fixture in grid_strategy()) {
        let set = run(&fixture, &engine(1, MergeStrategy::UnionFind));
        let len = fixture.cells.len();
        for cluster in &set {
            let members: HashSet<usize> = cluster.cells().iter().copied().collect();
            let color = fixture.cells[cluster.cells()[0]];

            for &cell in cluster.cells() {
                for neighbor in neighbors(cell, len, fixture.columns) {
                    if fixture.cells[neighbor] == color {
                        prop_assert!(members.contains(&neighbor), "cluster misses neighbor {}", neighbor);
                    }
                }
            }

            let mut reached = HashSet::from([cluster.cells()[0]]);
            let mut stack = vec![cluster.cells()[0]];
            while let Some(current) = stack.pop() {
                for neighbor in neighbors(current, len, fixture.columns) {
                    if members.contains(&neighbor) && reached.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
            prop_assert_eq!(reached, members);
        }
    }

    #[test]
    fn repeated_runs_are_identical(fixture in grid_strategy()) {
        let engine = ClusterEngine::default();
        let before = fixture.cells.clone();
        let first = run(&fixture, &engine);
        let second = run(&fixture, &engine);
        prop_assert_eq!(first, second);
        prop_assert_eq!(before, fixture.cells);
    }
}
