use katamari_core::{ClusterError, ClusterErrorCode};
#[cfg(feature = "field")]
use katamari_core::{FieldError, FieldErrorCode};
use rstest::rstest;

#[rstest]
#[case(ClusterError::ZeroColumns, ClusterErrorCode::ZeroColumns, "KATAMARI_ZERO_COLUMNS")]
#[case(
    ClusterError::RaggedGrid { cells: 5, columns: 2 },
    ClusterErrorCode::RaggedGrid,
    "KATAMARI_RAGGED_GRID",
)]
#[case(
    ClusterError::InvalidMinClusterSize { got: 0 },
    ClusterErrorCode::InvalidMinClusterSize,
    "KATAMARI_INVALID_MIN_CLUSTER_SIZE",
)]
fn returns_expected_cluster_code(
    #[case] error: ClusterError,
    #[case] expected: ClusterErrorCode,
    #[case] raw: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), raw);
    assert_eq!(error.code().to_string(), raw);
}

#[cfg(feature = "field")]
#[rstest]
#[case(FieldError::ZeroRows, FieldErrorCode::ZeroRows, "FIELD_ZERO_ROWS")]
#[case(FieldError::ZeroColumns, FieldErrorCode::ZeroColumns, "FIELD_ZERO_COLUMNS")]
#[case(
    FieldError::InvalidColorCount { got: 0 },
    FieldErrorCode::InvalidColorCount,
    "FIELD_INVALID_COLOR_COUNT",
)]
#[case(
    FieldError::TooManyCells { rows: usize::MAX, columns: 2 },
    FieldErrorCode::TooManyCells,
    "FIELD_TOO_MANY_CELLS",
)]
fn returns_expected_field_code(
    #[case] error: FieldError,
    #[case] expected: FieldErrorCode,
    #[case] raw: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), raw);
}

#[rstest]
#[case(ClusterError::ZeroColumns, "grid must have at least one column")]
#[case(
    ClusterError::RaggedGrid { cells: 7, columns: 3 },
    "grid of 7 cells does not divide into rows of 3 columns",
)]
#[case(
    ClusterError::InvalidMinClusterSize { got: 0 },
    "min_cluster_size must be at least 1 (got 0)",
)]
fn cluster_errors_render_messages(#[case] error: ClusterError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
