//! Property-based tests for sampling and routing.
//!
//! # Invariants tested
//!
//! - **Sample size:** the selector returns exactly `round(N * p)` indices.
//! - **No duplicates:** sampled indices are distinct and inside the pool.
//! - **Reproducibility:** a fixed seed reproduces the same sample.
//! - **Matrix shape:** distances are symmetric with a zero diagonal, and zero
//!   only on the diagonal when positions are distinct.
//! - **Route validity:** every route is a permutation starting at its vertex.
//! - **Determinism:** planning twice yields the same route.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spotcheck_core::{
    DistanceMatrix, GridPosition, MAX_SAMPLE, RoutePlanner, SampleSelector, sample_size,
};

/// Strategy for a pool size and a ratio that keeps the sample within capacity.
fn pool_and_ratio() -> impl Strategy<Value = (usize, f64)> {
    (1_usize..=200).prop_flat_map(|pool| (Just(pool), 0.0_f64..=1.0))
}

/// Strategy for between one and `MAX_SAMPLE` grid positions.
fn positions() -> impl Strategy<Value = Vec<GridPosition>> {
    proptest::collection::vec(
        (0_u16..64, 0_u16..64).prop_map(|(row, column)| GridPosition::new(row, column)),
        1..=MAX_SAMPLE,
    )
}

/// Strategy for positions with no two assets sharing a cell.
fn distinct_positions() -> impl Strategy<Value = Vec<GridPosition>> {
    proptest::collection::hash_set((0_u16..16, 0_u16..16), 1..=MAX_SAMPLE).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(row, column)| GridPosition::new(row, column))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: accepted samples have the rounded size with distinct indices.
    #[test]
    fn selector_returns_distinct_indices(
        (pool, ratio) in pool_and_ratio(),
        seed in any::<u64>(),
    ) {
        let selector = SampleSelector::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match sample_size(pool, ratio) {
            Ok(size) if size <= MAX_SAMPLE => {
                let picked = selector
                    .select_indices(pool, ratio, &mut rng)
                    .expect("selection within capacity");
                prop_assert_eq!(picked.len(), size);
                prop_assert!(picked.iter().all(|&idx| idx < pool));
                let unique: HashSet<_> = picked.iter().collect();
                prop_assert_eq!(unique.len(), size);
            }
            _ => {
                prop_assert!(selector.select_indices(pool, ratio, &mut rng).is_err());
            }
        }
    }

    /// Property: a fixed seed reproduces the same selection.
    #[test]
    fn selector_is_reproducible(seed in any::<u64>(), pool in 5_usize..100) {
        let selector = SampleSelector::default();
        let ratio = 4.0 / 100.0;
        let first = selector.select_indices(pool, ratio, &mut ChaCha8Rng::seed_from_u64(seed));
        let second = selector.select_indices(pool, ratio, &mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }

    /// Property: the matrix is symmetric with a zero diagonal.
    #[test]
    fn matrix_is_symmetric(points in positions()) {
        let matrix = DistanceMatrix::from_positions(&points);
        prop_assert_eq!(matrix.size(), points.len());
        for i in 0..points.len() {
            prop_assert_eq!(matrix.get(i, i), Some(0));
            for j in 0..points.len() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    /// Property: with distinct positions a zero entry occurs only on the diagonal.
    #[test]
    fn zero_distance_only_on_diagonal(points in distinct_positions()) {
        let matrix = DistanceMatrix::from_positions(&points);
        for i in 0..points.len() {
            for j in 0..points.len() {
                prop_assert_eq!(matrix.get(i, j) == Some(0), i == j);
            }
        }
    }

    /// Property: every route is a permutation beginning at its start vertex.
    #[test]
    fn routes_are_permutations(points in positions()) {
        let matrix = DistanceMatrix::from_positions(&points);
        let planner = RoutePlanner::new(&matrix);
        for start in 0..points.len() {
            let route = planner.plan(start).expect("start within matrix");
            prop_assert_eq!(route.start(), Some(start));
            prop_assert_eq!(route.stops().len(), points.len());
            prop_assert_eq!(route.legs().len(), points.len() - 1);
            let unique: HashSet<_> = route.stops().iter().collect();
            prop_assert_eq!(unique.len(), points.len());
        }
    }

    /// Property: planning is deterministic for a given matrix and start.
    #[test]
    fn planning_is_idempotent(points in positions(), start_seed in any::<usize>()) {
        let matrix = DistanceMatrix::from_positions(&points);
        let start = start_seed % points.len();
        let planner = RoutePlanner::new(&matrix);
        let first = planner.plan(start).expect("start within matrix");
        let second = planner.plan(start).expect("start within matrix");
        prop_assert_eq!(first, second);
    }
}
