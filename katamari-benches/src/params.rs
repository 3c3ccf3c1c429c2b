//! Benchmark parameter types.

use std::fmt;

/// Parameters for a clustering benchmark run over a square field.
#[derive(Clone, Debug)]
pub struct ClusteringBenchParams {
    /// Number of rows and columns in the field.
    pub side: usize,
    /// Number of distinct colors.
    pub colors: usize,
}

impl fmt::Display for ClusteringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0},colors={1}", self.side, self.colors)
    }
}
