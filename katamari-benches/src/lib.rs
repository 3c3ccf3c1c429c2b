//! Benchmark support crate for katamari.
//!
//! Provides seeded field fixtures and parameter types used by the Criterion
//! clustering benchmarks.

pub mod error;
pub mod params;

use katamari_core::{Field, FieldSpec};

use crate::error::BenchSetupError;

/// Seed shared by every benchmark fixture.
pub const SEED: u64 = 42;

/// Generates the square field described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Field`] when the dimensions or color count are
/// unusable.
///
/// # Examples
/// ```
/// use katamari_benches::{field_fixture, params::ClusteringBenchParams};
///
/// let field = field_fixture(&ClusteringBenchParams { side: 4, colors: 2 })?;
/// assert_eq!(field.cells().len(), 16);
/// # Ok::<(), katamari_benches::error::BenchSetupError>(())
/// ```
pub fn field_fixture(params: &params::ClusteringBenchParams) -> Result<Field, BenchSetupError> {
    let spec = FieldSpec::new(params.side, params.side, params.colors)?;
    Ok(spec.generate(SEED))
}
