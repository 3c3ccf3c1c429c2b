//! Row-major grid addressing over a borrowed sequence of cell colors.
//!
//! Cells are identified purely by their linear index. Neighbor lookups only
//! look backwards (left and up) because the raster pass visits those cells
//! before the current one.

use std::num::NonZeroUsize;

use crate::{Result, error::ClusterError};

/// Borrowed view of a colored grid laid out in row-major order.
///
/// The final row may be shorter than `columns` unless the grid was built with
/// [`Grid::rectangular`].
///
/// # Examples
/// ```
/// use katamari_core::Grid;
///
/// let colors = [1, 1, 2, 2, 3, 3];
/// let grid = Grid::new(&colors, 3)?;
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.position(4), Some((1, 1)));
/// assert_eq!(grid.left_neighbor(3), None);
/// assert_eq!(grid.up_neighbor(4), Some(1));
/// # Ok::<(), katamari_core::ClusterError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a, C> {
    cells: &'a [C],
    columns: NonZeroUsize,
}

impl<'a, C> Grid<'a, C> {
    /// Wraps `cells` as a grid of `columns` cells per row, accepting a short
    /// final row.
    ///
    /// # Errors
    /// Returns [`ClusterError::ZeroColumns`] when `columns` is zero.
    pub fn new(cells: &'a [C], columns: usize) -> Result<Self> {
        let columns = NonZeroUsize::new(columns).ok_or(ClusterError::ZeroColumns)?;
        Ok(Self { cells, columns })
    }

    /// Wraps `cells` as a grid whose length must be a whole number of rows.
    ///
    /// # Errors
    /// Returns [`ClusterError::ZeroColumns`] when `columns` is zero and
    /// [`ClusterError::RaggedGrid`] when `cells.len()` is not a multiple of
    /// `columns`.
    ///
    /// # Examples
    /// ```
    /// use katamari_core::{ClusterError, Grid};
    ///
    /// let err = Grid::rectangular(&[0, 0, 0], 2).expect_err("3 cells do not fill 2-wide rows");
    /// assert_eq!(err, ClusterError::RaggedGrid { cells: 3, columns: 2 });
    /// ```
    pub fn rectangular(cells: &'a [C], columns: usize) -> Result<Self> {
        let grid = Self::new(cells, columns)?;
        if cells.len() % grid.columns.get() != 0 {
            return Err(ClusterError::RaggedGrid {
                cells: cells.len(),
                columns,
            });
        }
        Ok(grid)
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the grid contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the row width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Returns the number of rows, counting a short final row.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.columns.get())
    }

    /// Returns the color of the cell at `index`.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<&'a C> {
        self.cells.get(index)
    }

    /// Maps a linear index to `(row, column)`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index / self.columns, index % self.columns))
    }

    /// Maps `(row, column)` back to a linear index.
    ///
    /// # Examples
    /// ```
    /// use katamari_core::Grid;
    ///
    /// let grid = Grid::new(&[0; 6], 3)?;
    /// assert_eq!(grid.index_of(1, 2), Some(5));
    /// assert_eq!(grid.index_of(0, 3), None);
    /// assert_eq!(grid.index_of(2, 0), None);
    /// # Ok::<(), katamari_core::ClusterError>(())
    /// ```
    #[must_use]
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if column >= self.columns.get() {
            return None;
        }
        row.checked_mul(self.columns.get())
            .and_then(|base| base.checked_add(column))
            .filter(|&index| index < self.cells.len())
    }

    /// Returns whether `index` sits after the first column.
    #[must_use]
    pub fn has_left_neighbor(&self, index: usize) -> bool {
        index % self.columns != 0
    }

    /// Returns the index of the cell to the left of `index`, if any.
    #[must_use]
    pub fn left_neighbor(&self, index: usize) -> Option<usize> {
        self.has_left_neighbor(index).then(|| index - 1)
    }

    /// Returns whether `index` sits below the first row.
    #[must_use]
    pub fn has_up_neighbor(&self, index: usize) -> bool {
        index >= self.columns.get()
    }

    /// Returns the index of the cell above `index`, if any.
    #[must_use]
    pub fn up_neighbor(&self, index: usize) -> Option<usize> {
        index.checked_sub(self.columns.get())
    }
}

impl<C: Eq> Grid<'_, C> {
    /// Returns whether the cell at `neighbor` shares the color of `index`.
    pub(crate) fn same_color(&self, index: usize, neighbor: Option<usize>) -> bool {
        match (neighbor.and_then(|n| self.color(n)), self.color(index)) {
            (Some(other), Some(current)) => other == current,
            _ => false,
        }
    }
}
