//! Collapses provisional labels into final clusters and drops small ones.

use std::{collections::HashMap, num::NonZeroUsize};

use crate::{
    forest::Equivalence,
    labeling::ProvisionalLabels,
    result::{Cluster, ClusterId},
};

/// Groups cells by the root of their provisional label, keeping roots in the
/// order they are first seen and discarding groups below `min_cluster_size`.
pub(crate) fn resolve_clusters<E: Equivalence>(
    pass: ProvisionalLabels<E>,
    min_cluster_size: NonZeroUsize,
) -> Vec<Cluster> {
    let ProvisionalLabels {
        labels,
        mut classes,
    } = pass;

    let mut slot_of_root = HashMap::with_capacity(classes.len());
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (index, label) in labels.into_iter().enumerate() {
        let root = classes.find(label);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.push(index);
        }
    }

    groups
        .into_iter()
        .filter(|cells| cells.len() >= min_cluster_size.get())
        .enumerate()
        .map(|(id, cells)| Cluster::new(ClusterId::new(id), cells))
        .collect()
}
