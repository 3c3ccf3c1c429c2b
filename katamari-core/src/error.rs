//! Error types for the katamari core library.
//!
//! Defines the error enums exposed by the public API and a convenient result
//! alias. Every variant carries a stable machine-readable code so callers can
//! report failures without matching on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when configuring or running [`crate::ClusterEngine`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ClusterError {
    /// Row width must be at least one cell.
    #[error("grid must have at least one column")]
    ZeroColumns,
    /// The cell count is not a whole number of rows.
    #[error("grid of {cells} cells does not divide into rows of {columns} columns")]
    RaggedGrid {
        /// Number of cells supplied by the caller.
        cells: usize,
        /// Row width supplied by the caller.
        columns: usize,
    },
    /// Minimum cluster size must be greater than zero.
    #[error("min_cluster_size must be at least 1 (got {got})")]
    InvalidMinClusterSize {
        /// The invalid minimum cluster size supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ClusterError`] variants.
    enum ClusterErrorCode for ClusterError {
        /// Row width must be at least one cell.
        ZeroColumns => ZeroColumns => "KATAMARI_ZERO_COLUMNS",
        /// The cell count is not a whole number of rows.
        RaggedGrid => RaggedGrid { .. } => "KATAMARI_RAGGED_GRID",
        /// Minimum cluster size must be greater than zero.
        InvalidMinClusterSize => InvalidMinClusterSize { .. } => "KATAMARI_INVALID_MIN_CLUSTER_SIZE",
    }
}

/// Error produced when a [`crate::FieldSpec`] describes an unusable field.
#[cfg(feature = "field")]
#[cfg_attr(docsrs, doc(cfg(feature = "field")))]
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FieldError {
    /// A field needs at least one row.
    #[error("field must have at least one row")]
    ZeroRows,
    /// A field needs at least one column.
    #[error("field must have at least one column")]
    ZeroColumns,
    /// The field has more cells than `usize` can count.
    #[error("field of {rows} rows by {columns} columns has too many cells")]
    TooManyCells {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// Color count must fit the `u8` palette index and be non-zero.
    #[error("color count must be between 1 and 256 (got {got})")]
    InvalidColorCount {
        /// The unsupported color count supplied by the caller.
        got: usize,
    },
}

#[cfg(feature = "field")]
define_error_codes! {
    /// Stable codes describing [`FieldError`] variants.
    enum FieldErrorCode for FieldError {
        /// A field needs at least one row.
        ZeroRows => ZeroRows => "FIELD_ZERO_ROWS",
        /// A field needs at least one column.
        ZeroColumns => ZeroColumns => "FIELD_ZERO_COLUMNS",
        /// The field has more cells than `usize` can count.
        TooManyCells => TooManyCells { .. } => "FIELD_TOO_MANY_CELLS",
        /// Color count must fit the `u8` palette index and be non-zero.
        InvalidColorCount => InvalidColorCount { .. } => "FIELD_INVALID_COLOR_COUNT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ClusterError>;
