//! Katamari core library.
//!
//! Finds the maximal same-color connected groups of a colored grid in a
//! single forward raster pass. Provisional labels are merged through an
//! [`Equivalence`] structure as the scan discovers that two of them belong
//! to the same region, then collapsed into [`Cluster`]s and filtered by a
//! minimum size.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod engine;
mod error;
#[cfg(feature = "field")]
mod field;
mod forest;
mod grid;
mod labeling;
mod resolve;
mod result;

#[cfg(test)]
mod property;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{ClusterEngineBuilder, DEFAULT_MIN_CLUSTER_SIZE, GridShape, MergeStrategy},
    engine::{ClusterEngine, find_clusters},
    error::{ClusterError, ClusterErrorCode, Result},
    forest::{Equivalence, Label, LabelForest, RewriteTable},
    grid::Grid,
    result::{Cluster, ClusterId, ClusterSet},
};

#[cfg(feature = "field")]
#[cfg_attr(docsrs, doc(cfg(feature = "field")))]
pub use crate::{
    error::{FieldError, FieldErrorCode},
    field::{
        COLOR_RANGE, COLUMN_RANGE, DEFAULT_COLORS, DEFAULT_COLUMNS, DEFAULT_ROWS, Field,
        FieldSpec, ROW_RANGE,
    },
};
