//! Shared test utilities for `katamari-core`.

use std::collections::VecDeque;

use katamari_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KATAMARI_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Breadth-first flood fill over horizontal and vertical neighbors.
///
/// Returns every connected same-color region, each sorted ascending, ordered
/// by smallest member. Serves as the reference the raster pass must match.
pub(crate) fn flood_fill_regions<C: Eq>(cells: &[C], columns: usize) -> Vec<Vec<usize>> {
    let mut visited = vec![false; cells.len()];
    let mut regions = Vec::new();

    for start in 0..cells.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut region = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            region.push(current);
            for neighbor in neighbors(current, cells.len(), columns) {
                if !visited[neighbor] && cells[neighbor] == cells[current] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        region.sort_unstable();
        regions.push(region);
    }

    regions
}

/// Returns the in-bounds horizontal and vertical neighbors of `index`.
pub(crate) fn neighbors(index: usize, len: usize, columns: usize) -> Vec<usize> {
    let column = index % columns;
    let mut out = Vec::with_capacity(4);
    if column > 0 {
        out.push(index - 1);
    }
    if column + 1 < columns && index + 1 < len {
        out.push(index + 1);
    }
    if index >= columns {
        out.push(index - columns);
    }
    if index + columns < len {
        out.push(index + columns);
    }
    out
}
