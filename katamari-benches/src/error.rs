//! Benchmark setup error type.
//!
//! Lets setup functions propagate fixture and engine failures with `?`.

use katamari_core::{ClusterError, FieldError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Field generation rejected its parameters.
    #[error("field generation failed: {0}")]
    Field(#[from] FieldError),
    /// The engine rejected its configuration or input.
    #[error("clustering failed: {0}")]
    Cluster(#[from] ClusterError),
}
