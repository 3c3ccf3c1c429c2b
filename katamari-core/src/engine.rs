//! Clustering orchestration for the katamari core library.
//!
//! Provides the [`ClusterEngine`] entry point, which validates a grid, runs
//! the raster labeling pass with the configured merge strategy, and resolves
//! the surviving clusters.

use std::num::NonZeroUsize;

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::{ClusterEngineBuilder, DEFAULT_MIN, GridShape, MergeStrategy},
    error::ClusterError,
    forest::{Equivalence, LabelForest, RewriteTable},
    grid::Grid,
    labeling::label_cells,
    resolve::resolve_clusters,
    result::ClusterSet,
};

/// Stateless clustering engine.
///
/// Every call owns its scratch state, so one engine can be shared freely
/// across threads.
///
/// # Examples
/// ```
/// use katamari_core::ClusterEngineBuilder;
///
/// let engine = ClusterEngineBuilder::new().build()?;
/// // A A B
/// // A B B
/// // A B B
/// let colors = ['A', 'A', 'B', 'A', 'B', 'B', 'A', 'B', 'B'];
/// let clusters = engine.find_clusters(&colors, 3)?;
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[0].cells(), &[0, 1, 3, 6]);
/// assert_eq!(clusters[1].cells(), &[2, 4, 5, 7, 8]);
/// # Ok::<(), katamari_core::ClusterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEngine {
    min_cluster_size: NonZeroUsize,
    merge_strategy: MergeStrategy,
    grid_shape: GridShape,
}

impl Default for ClusterEngine {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN,
            MergeStrategy::default(),
            GridShape::default(),
        )
    }
}

impl ClusterEngine {
    pub(crate) fn new(
        min_cluster_size: NonZeroUsize,
        merge_strategy: MergeStrategy,
        grid_shape: GridShape,
    ) -> Self {
        Self {
            min_cluster_size,
            merge_strategy,
            grid_shape,
        }
    }

    /// Returns a builder populated with default parameters.
    #[must_use]
    pub fn builder() -> ClusterEngineBuilder {
        ClusterEngineBuilder::new()
    }

    /// Returns the minimum cluster size configured for this instance.
    #[must_use]
    pub fn min_cluster_size(&self) -> NonZeroUsize {
        self.min_cluster_size
    }

    /// Returns the merge strategy used during labeling.
    #[must_use]
    pub fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Returns the grid shape rule applied to inputs.
    #[must_use]
    pub fn grid_shape(&self) -> GridShape {
        self.grid_shape
    }

    /// Finds every connected same-color region of at least
    /// [`Self::min_cluster_size`] cells.
    ///
    /// `cells` is read in row-major order with `columns` cells per row. The
    /// input is never modified and repeated calls return equal sets.
    ///
    /// # Errors
    /// Returns [`ClusterError::ZeroColumns`] when `columns` is zero and, for
    /// engines configured with [`GridShape::Rectangular`],
    /// [`ClusterError::RaggedGrid`] when the cells do not fill whole rows.
    ///
    /// # Examples
    /// ```
    /// use katamari_core::ClusterEngineBuilder;
    ///
    /// let engine = ClusterEngineBuilder::new().build()?;
    /// let checkerboard = [0, 1, 0, 1, 1, 0, 1, 0];
    /// assert!(engine.find_clusters(&checkerboard, 4)?.is_empty());
    /// # Ok::<(), katamari_core::ClusterError>(())
    /// ```
    #[instrument(
        name = "core.find_clusters",
        err,
        skip(self, cells),
        fields(
            cells = cells.len(),
            columns = columns,
            min_cluster_size = %self.min_cluster_size,
            strategy = ?self.merge_strategy
        ),
    )]
    pub fn find_clusters<C: Eq>(&self, cells: &[C], columns: usize) -> Result<ClusterSet> {
        let grid = self.validate(cells, columns)?;
        let clusters = match self.merge_strategy {
            MergeStrategy::UnionFind => {
                self.cluster_with(&grid, LabelForest::with_capacity(grid.len()))
            }
            MergeStrategy::EagerRewrite => {
                self.cluster_with(&grid, RewriteTable::with_capacity(grid.len()))
            }
        };
        info!(
            clusters = clusters.len(),
            clustered_cells = clusters.clustered_cells(),
            "clustering completed"
        );
        Ok(clusters)
    }

    fn validate<'a, C>(&self, cells: &'a [C], columns: usize) -> Result<Grid<'a, C>> {
        let grid = match self.grid_shape {
            GridShape::Lenient => Grid::new(cells, columns),
            GridShape::Rectangular => Grid::rectangular(cells, columns),
        };
        grid.inspect_err(|err: &ClusterError| {
            warn!(
                cells = cells.len(),
                columns,
                code = %err.code(),
                "rejecting invalid grid"
            );
        })
    }

    fn cluster_with<C: Eq, E: Equivalence>(&self, grid: &Grid<'_, C>, classes: E) -> ClusterSet {
        let pass = label_cells(grid, classes);
        let clusters = resolve_clusters(pass, self.min_cluster_size);
        ClusterSet::new(clusters, grid.len(), grid.columns())
    }
}

/// Finds clusters of at least three same-color cells with the default engine.
///
/// # Errors
/// Returns [`ClusterError::ZeroColumns`] when `columns` is zero.
///
/// # Examples
/// ```
/// use katamari_core::find_clusters;
///
/// let clusters = find_clusters(&[4, 4, 4, 4], 4)?;
/// assert_eq!(clusters.into_cell_lists(), vec![vec![0, 1, 2, 3]]);
/// # Ok::<(), katamari_core::ClusterError>(())
/// ```
pub fn find_clusters<C: Eq>(cells: &[C], columns: usize) -> Result<ClusterSet> {
    ClusterEngine::default().find_clusters(cells, columns)
}
