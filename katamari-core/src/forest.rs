//! Equivalence structures over provisional labels.
//!
//! The raster pass discovers that two labels belong to the same region only
//! after both have been handed out, so labels are merged into equivalence
//! classes instead of being rewritten in place. [`LabelForest`] is the
//! union-find used by default; [`RewriteTable`] keeps every label pointing
//! directly at its class and rewrites the absorbed class on each merge.

/// Provisional label handed out by an [`Equivalence`] structure.
///
/// Labels can only be minted by [`Equivalence::make_label`], so every label a
/// caller holds is known to the structure that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(usize);

impl Label {
    /// Returns the dense numeric value of the label.
    ///
    /// # Examples
    /// ```
    /// use katamari_core::{Equivalence, LabelForest};
    ///
    /// let mut forest = LabelForest::default();
    /// assert_eq!(forest.make_label().get(), 0);
    /// assert_eq!(forest.make_label().get(), 1);
    /// ```
    #[rustfmt::skip]
    #[must_use]
    pub fn get(self) -> usize { self.0 }
}

/// Partition of provisional labels into equivalence classes.
///
/// # Panics
/// Implementations panic when `find` or `union` receive a label minted by a
/// different structure. Such a label is a programming error, not input.
pub trait Equivalence {
    /// Creates a fresh label in a singleton class.
    fn make_label(&mut self) -> Label;

    /// Returns the canonical representative of the class containing `label`.
    fn find(&mut self, label: Label) -> Label;

    /// Merges the classes containing `left` and `right` and returns the
    /// surviving representative.
    fn union(&mut self, left: Label, right: Label) -> Label;

    /// Returns the number of labels minted so far.
    fn len(&self) -> usize;

    /// Returns whether no labels have been minted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Union-find forest with union by rank and path compression.
///
/// # Examples
/// ```
/// use katamari_core::{Equivalence, LabelForest};
///
/// let mut forest = LabelForest::default();
/// let a = forest.make_label();
/// let b = forest.make_label();
/// let c = forest.make_label();
/// forest.union(a, b);
/// assert_eq!(forest.find(a), forest.find(b));
/// assert_ne!(forest.find(a), forest.find(c));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabelForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl LabelForest {
    /// Creates an empty forest with room for `capacity` labels.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }
}

impl Equivalence for LabelForest {
    fn make_label(&mut self) -> Label {
        let label = self.parent.len();
        self.parent.push(label);
        self.rank.push(0);
        Label(label)
    }

    fn find(&mut self, label: Label) -> Label {
        let mut root = label.0;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = label.0;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Label(root)
    }

    fn union(&mut self, left: Label, right: Label) -> Label {
        let mut left = self.find(left).0;
        let mut right = self.find(right).0;
        if left == right {
            return Label(left);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        Label(left)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Flat label table that rewrites every member of the absorbed class on merge.
///
/// `find` is a single lookup, while `union` costs one pass over all labels.
/// The partition it produces matches [`LabelForest`] exactly.
///
/// # Examples
/// ```
/// use katamari_core::{Equivalence, RewriteTable};
///
/// let mut table = RewriteTable::default();
/// let a = table.make_label();
/// let b = table.make_label();
/// assert_eq!(table.union(a, b), a);
/// assert_eq!(table.find(b), a);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RewriteTable {
    class_of: Vec<usize>,
}

impl RewriteTable {
    /// Creates an empty table with room for `capacity` labels.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            class_of: Vec::with_capacity(capacity),
        }
    }
}

impl Equivalence for RewriteTable {
    fn make_label(&mut self) -> Label {
        let label = self.class_of.len();
        self.class_of.push(label);
        Label(label)
    }

    fn find(&mut self, label: Label) -> Label {
        Label(self.class_of[label.0])
    }

    fn union(&mut self, left: Label, right: Label) -> Label {
        let keep = self.class_of[left.0];
        let absorb = self.class_of[right.0];
        if keep != absorb {
            for class in self.class_of.iter_mut().filter(|class| **class == absorb) {
                *class = keep;
            }
        }
        Label(keep)
    }

    fn len(&self) -> usize {
        self.class_of.len()
    }
}
