//! Builder utilities for configuring [`ClusterEngine`] instances.
//!
//! Exposes the merge strategy and grid shape selection surface together with
//! the validation performed before an engine is constructed.

use std::num::NonZeroUsize;

use crate::{Result, engine::ClusterEngine, error::ClusterError};

/// Smallest cluster reported by default; regions of one or two cells are
/// never highlighted.
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 3;

pub(crate) const DEFAULT_MIN: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MIN_CLUSTER_SIZE) {
    Some(size) => size,
    None => panic!("DEFAULT_MIN_CLUSTER_SIZE must be non-zero"),
};

/// Selects how provisional labels are merged during the raster pass.
///
/// Both strategies produce identical clusters. `EagerRewrite` trades a
/// quadratic worst case for trivially flat lookups.
///
/// # Examples
/// ```
/// use katamari_core::MergeStrategy;
///
/// assert_eq!(MergeStrategy::default(), MergeStrategy::UnionFind);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Union by rank with path compression.
    #[default]
    UnionFind,
    /// Rewrite every label of the absorbed class on each merge.
    EagerRewrite,
}

/// Selects how strictly the cell count must match the row width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridShape {
    /// Accept a short final row.
    #[default]
    Lenient,
    /// Require the cell count to be a multiple of the row width.
    Rectangular,
}

/// Configures and constructs [`ClusterEngine`] instances.
///
/// # Examples
/// ```
/// use katamari_core::{ClusterEngineBuilder, GridShape, MergeStrategy};
///
/// let engine = ClusterEngineBuilder::new()
///     .with_min_cluster_size(4)
///     .with_merge_strategy(MergeStrategy::EagerRewrite)
///     .with_grid_shape(GridShape::Rectangular)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.min_cluster_size().get(), 4);
/// assert_eq!(engine.merge_strategy(), MergeStrategy::EagerRewrite);
/// assert_eq!(engine.grid_shape(), GridShape::Rectangular);
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEngineBuilder {
    min_cluster_size: usize,
    merge_strategy: MergeStrategy,
    grid_shape: GridShape,
}

impl Default for ClusterEngineBuilder {
    fn default() -> Self {
        Self {
            min_cluster_size: DEFAULT_MIN_CLUSTER_SIZE,
            merge_strategy: MergeStrategy::default(),
            grid_shape: GridShape::default(),
        }
    }
}

impl ClusterEngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use katamari_core::{ClusterEngineBuilder, GridShape, MergeStrategy};
    ///
    /// let builder = ClusterEngineBuilder::new();
    /// assert_eq!(builder.min_cluster_size(), 3);
    /// assert_eq!(builder.merge_strategy(), MergeStrategy::UnionFind);
    /// assert_eq!(builder.grid_shape(), GridShape::Lenient);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the minimum number of cells a reported cluster must have.
    #[must_use]
    pub fn with_min_cluster_size(mut self, size: usize) -> Self {
        self.min_cluster_size = size;
        self
    }

    /// Returns the configured minimum cluster size.
    #[must_use]
    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    /// Sets the strategy used to merge provisional labels.
    #[must_use]
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Returns the configured merge strategy.
    #[must_use]
    pub fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Sets how strictly grids must be rectangular.
    #[must_use]
    pub fn with_grid_shape(mut self, shape: GridShape) -> Self {
        self.grid_shape = shape;
        self
    }

    /// Returns the configured grid shape rule.
    #[must_use]
    pub fn grid_shape(&self) -> GridShape {
        self.grid_shape
    }

    /// Validates the configuration and constructs a [`ClusterEngine`].
    ///
    /// # Errors
    /// Returns [`ClusterError::InvalidMinClusterSize`] when the minimum
    /// cluster size is zero.
    ///
    /// # Examples
    /// ```
    /// use katamari_core::{ClusterEngineBuilder, ClusterError};
    ///
    /// let err = ClusterEngineBuilder::new()
    ///     .with_min_cluster_size(0)
    ///     .build()
    ///     .expect_err("zero is rejected");
    /// assert_eq!(err, ClusterError::InvalidMinClusterSize { got: 0 });
    /// ```
    pub fn build(self) -> Result<ClusterEngine> {
        let min_cluster_size = NonZeroUsize::new(self.min_cluster_size).ok_or(
            ClusterError::InvalidMinClusterSize {
                got: self.min_cluster_size,
            },
        )?;

        Ok(ClusterEngine::new(
            min_cluster_size,
            self.merge_strategy,
            self.grid_shape,
        ))
    }
}
