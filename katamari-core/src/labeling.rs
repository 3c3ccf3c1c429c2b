//! Single forward raster pass that assigns provisional labels.

use tracing::debug;

use crate::{
    forest::{Equivalence, Label},
    grid::Grid,
};

/// Provisional labels for every cell together with the equivalence structure
/// that relates them.
#[derive(Debug)]
pub(crate) struct ProvisionalLabels<E> {
    pub(crate) labels: Vec<Label>,
    pub(crate) classes: E,
}

/// Visits each cell once in row-major order and labels it from its left and
/// up neighbors.
///
/// Left wins over up. When both neighbors match, the cell keeps the left
/// label and the up label's class is merged into it.
pub(crate) fn label_cells<C: Eq, E: Equivalence>(
    grid: &Grid<'_, C>,
    mut classes: E,
) -> ProvisionalLabels<E> {
    let mut labels: Vec<Label> = Vec::with_capacity(grid.len());

    for index in 0..grid.len() {
        let left = grid.left_neighbor(index);
        let up = grid.up_neighbor(index);
        let left_label = left
            .filter(|_| grid.same_color(index, left))
            .and_then(|n| labels.get(n).copied());
        let up_label = up
            .filter(|_| grid.same_color(index, up))
            .and_then(|n| labels.get(n).copied());

        let label = match (left_label, up_label) {
            (Some(left_label), Some(up_label)) => {
                classes.union(left_label, up_label);
                left_label
            }
            (Some(left_label), None) => left_label,
            (None, Some(up_label)) => up_label,
            (None, None) => classes.make_label(),
        };
        labels.push(label);
    }

    debug!(
        cells = grid.len(),
        provisional_labels = classes.len(),
        "raster labeling completed"
    );
    ProvisionalLabels { labels, classes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::{LabelForest, RewriteTable};

    fn raw(labels: &[Label]) -> Vec<usize> {
        labels.iter().map(|label| label.get()).collect()
    }

    #[test]
    fn cells_inherit_matching_neighbor_labels() {
        // A B
        // A A   cell 2 takes the up label, cell 3 the left one.
        let colors = ['A', 'B', 'A', 'A'];
        let grid = Grid::new(&colors, 2).expect("valid grid");
        let pass = label_cells(&grid, LabelForest::default());
        assert_eq!(raw(&pass.labels), vec![0, 1, 0, 0]);
        assert_eq!(pass.classes.len(), 2);
    }

    #[test]
    fn merge_links_left_and_up_classes() {
        // A B A
        // A A A   the last cell keeps left label 0 and merges label 2 above.
        let colors = ['A', 'B', 'A', 'A', 'A', 'A'];
        let grid = Grid::new(&colors, 3).expect("valid grid");
        let mut pass = label_cells(&grid, LabelForest::default());
        assert_eq!(raw(&pass.labels), vec![0, 1, 2, 0, 0, 0]);
        let first = pass.classes.find(pass.labels[0]);
        assert_eq!(pass.classes.find(pass.labels[2]), first);
        assert_ne!(pass.classes.find(pass.labels[1]), first);
    }

    #[test]
    fn strategies_share_provisional_labels() {
        let colors = [1, 2, 1, 1, 1, 1, 2, 2, 1];
        let grid = Grid::new(&colors, 3).expect("valid grid");
        let forest = label_cells(&grid, LabelForest::default());
        let table = label_cells(&grid, RewriteTable::default());
        assert_eq!(forest.labels, table.labels);
        assert_eq!(forest.classes.len(), table.classes.len());
    }

    #[test]
    fn empty_grid_yields_no_labels() {
        let grid = Grid::<u8>::new(&[], 3).expect("valid grid");
        let pass = label_cells(&grid, LabelForest::default());
        assert!(pass.labels.is_empty());
        assert!(pass.classes.is_empty());
    }
}
