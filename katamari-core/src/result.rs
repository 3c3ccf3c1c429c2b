//! Result types for clustering operations.
//!
//! A [`ClusterSet`] lists the surviving clusters in first-discovery order and
//! answers per-cell membership queries for callers that drive highlighting.

use std::ops::Index;

/// Identifier assigned to a cluster: its position within the [`ClusterSet`].
///
/// # Examples
/// ```
/// use katamari_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(usize);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

/// Cell indices of one maximal same-color region, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: ClusterId,
    cells: Vec<usize>,
}

impl Cluster {
    pub(crate) fn new(id: ClusterId, cells: Vec<usize>) -> Self {
        Self { id, cells }
    }

    /// Returns the identifier of this cluster.
    #[must_use]
    pub fn id(&self) -> ClusterId {
        self.id
    }

    /// Returns the member cell indices in ascending order.
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Returns the number of member cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; clusters are never empty. Provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns whether `index` is a member of this cluster.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.binary_search(&index).is_ok()
    }

    /// Consumes the cluster and returns its member indices.
    #[must_use]
    pub fn into_cells(self) -> Vec<usize> {
        self.cells
    }
}

/// Output of [`crate::ClusterEngine::find_clusters`].
///
/// # Examples
/// ```
/// use katamari_core::find_clusters;
///
/// let set = find_clusters(&[7, 7, 7, 2], 4)?;
/// assert_eq!(set.len(), 1);
/// assert_eq!(set[0].cells(), &[0, 1, 2]);
/// assert_eq!(set.cluster_of(2).map(|id| id.get()), Some(0));
/// assert_eq!(set.cluster_of(3), None);
/// # Ok::<(), katamari_core::ClusterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
    assignments: Vec<Option<ClusterId>>,
    columns: usize,
}

impl ClusterSet {
    pub(crate) fn new(clusters: Vec<Cluster>, cell_count: usize, columns: usize) -> Self {
        let mut assignments = vec![None; cell_count];
        for cluster in &clusters {
            for &cell in cluster.cells() {
                if let Some(slot) = assignments.get_mut(cell) {
                    *slot = Some(cluster.id());
                }
            }
        }
        Self {
            clusters,
            assignments,
            columns,
        }
    }

    /// Returns the clusters in first-discovery order.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns the cluster with identifier `id`.
    #[must_use]
    pub fn get(&self, id: ClusterId) -> Option<&Cluster> {
        self.clusters.get(id.get())
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns whether no cluster survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the number of cells in the clustered grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns the row width of the clustered grid.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cluster containing `index`, or `None` when the cell is not
    /// part of any reported cluster or lies outside the grid.
    #[must_use]
    pub fn cluster_of(&self, index: usize) -> Option<ClusterId> {
        self.assignments.get(index).copied().flatten()
    }

    /// Returns the per-cell cluster membership in row-major order.
    #[must_use]
    pub fn assignments(&self) -> &[Option<ClusterId>] {
        &self.assignments
    }

    /// Counts the cells that belong to some cluster.
    #[must_use]
    pub fn clustered_cells(&self) -> usize {
        self.iter().map(Cluster::len).sum()
    }

    /// Returns an iterator over the clusters.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Consumes the set and returns the member indices of each cluster.
    #[must_use]
    pub fn into_cell_lists(self) -> Vec<Vec<usize>> {
        self.clusters.into_iter().map(Cluster::into_cells).collect()
    }
}

impl Index<usize> for ClusterSet {
    type Output = Cluster;

    fn index(&self, index: usize) -> &Self::Output {
        &self.clusters[index]
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
