//! Seeded random playing fields.
//!
//! A field is what the presentation layer regenerates whenever the player
//! asks for a new board or moves one of the size sliders: a grid of palette
//! indices drawn uniformly from `0..colors`. The same seed always yields the
//! same field.

use std::{num::NonZeroUsize, ops::RangeInclusive};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::error::FieldError;

/// Default row count of a freshly opened board.
pub const DEFAULT_ROWS: usize = 5;
/// Default column count of a freshly opened board.
pub const DEFAULT_COLUMNS: usize = 5;
/// Default number of distinct colors.
pub const DEFAULT_COLORS: usize = 3;
/// Row counts offered by the board size slider.
pub const ROW_RANGE: RangeInclusive<usize> = 3..=20;
/// Column counts offered by the board size slider.
pub const COLUMN_RANGE: RangeInclusive<usize> = 3..=20;
/// Color counts offered by the palette slider.
pub const COLOR_RANGE: RangeInclusive<usize> = 1..=10;

const MAX_COLORS: usize = u8::MAX as usize + 1;

const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(DEFAULT_COLUMNS) {
    Some(width) => width,
    None => panic!("DEFAULT_COLUMNS must be non-zero"),
};

/// Dimensions and palette size of a field to generate.
///
/// # Examples
/// ```
/// use katamari_core::FieldSpec;
///
/// let spec = FieldSpec::new(4, 6, 3)?;
/// let field = spec.generate(7);
/// assert_eq!(field.rows(), 4);
/// assert_eq!(field.columns(), 6);
/// assert!(field.cells().iter().all(|&color| color < 3));
/// assert_eq!(field, spec.generate(7));
/// # Ok::<(), katamari_core::FieldError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    rows: usize,
    columns: NonZeroUsize,
    colors: usize,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_WIDTH,
            colors: DEFAULT_COLORS,
        }
    }
}

impl FieldSpec {
    /// Validates and creates a field specification.
    ///
    /// # Errors
    /// Returns [`FieldError::ZeroRows`] or [`FieldError::ZeroColumns`] for
    /// empty dimensions, [`FieldError::TooManyCells`] when `rows * columns`
    /// overflows `usize`, and [`FieldError::InvalidColorCount`] when `colors`
    /// is zero or exceeds 256.
    pub fn new(rows: usize, columns: usize, colors: usize) -> Result<Self, FieldError> {
        if rows == 0 {
            return Err(FieldError::ZeroRows);
        }
        let Some(width) = NonZeroUsize::new(columns) else {
            return Err(FieldError::ZeroColumns);
        };
        if rows.checked_mul(columns).is_none() {
            return Err(FieldError::TooManyCells { rows, columns });
        }
        if colors == 0 || colors > MAX_COLORS {
            return Err(FieldError::InvalidColorCount { got: colors });
        }
        Ok(Self {
            rows,
            columns: width,
            colors,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Returns the number of distinct colors.
    #[must_use]
    pub fn colors(&self) -> usize {
        self.colors
    }

    /// Returns whether every dimension lies within the slider ranges.
    #[must_use]
    pub fn within_slider_ranges(&self) -> bool {
        ROW_RANGE.contains(&self.rows)
            && COLUMN_RANGE.contains(&self.columns.get())
            && COLOR_RANGE.contains(&self.colors)
    }

    /// Draws a field with colors chosen uniformly from `0..colors`.
    #[instrument(
        name = "core.generate_field",
        skip(self),
        fields(rows = self.rows, columns = self.columns.get(), colors = self.colors),
    )]
    #[must_use]
    pub fn generate(&self, seed: u64) -> Field {
        let mut rng = SmallRng::seed_from_u64(seed);
        // `new` rejects dimensions whose product overflows.
        let cell_count = self.rows * self.columns.get();
        let cells = (0..cell_count)
            .map(|_| palette_index(rng.gen_range(0..self.colors)))
            .collect();
        debug!(cells = cell_count, "field generated");
        Field {
            cells,
            columns: self.columns,
        }
    }
}

fn palette_index(color: usize) -> u8 {
    u8::try_from(color).unwrap_or(u8::MAX)
}

/// Owned rectangular grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: Vec<u8>,
    columns: NonZeroUsize,
}

impl Field {
    /// Returns the palette index of every cell in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the row width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Consumes the field and returns its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 3, 3, FieldError::ZeroRows)]
    #[case(3, 0, 3, FieldError::ZeroColumns)]
    #[case(3, 3, 0, FieldError::InvalidColorCount { got: 0 })]
    #[case(3, 3, 257, FieldError::InvalidColorCount { got: 257 })]
    #[case(usize::MAX, 2, 3, FieldError::TooManyCells { rows: usize::MAX, columns: 2 })]
    #[case(2, usize::MAX, 3, FieldError::TooManyCells { rows: 2, columns: usize::MAX })]
    fn rejects_unusable_specs(
        #[case] rows: usize,
        #[case] columns: usize,
        #[case] colors: usize,
        #[case] expected: FieldError,
    ) {
        let err = FieldSpec::new(rows, columns, colors).expect_err("spec must be rejected");
        assert_eq!(err, expected);
    }

    #[test]
    fn default_matches_initial_board() {
        let spec = FieldSpec::default();
        assert_eq!((spec.rows(), spec.columns(), spec.colors()), (5, 5, 3));
        assert!(spec.within_slider_ranges());
    }

    #[test]
    fn accepts_full_palette() {
        let spec = FieldSpec::new(2, 2, 256).expect("256 colors fit a u8 palette");
        assert!(!spec.within_slider_ranges());
        assert_eq!(spec.generate(1).cells().len(), 4);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let spec = FieldSpec::new(10, 12, 4).expect("valid spec");
        assert_eq!(spec.generate(42), spec.generate(42));
        assert_ne!(spec.generate(42), spec.generate(43));
    }

    #[test]
    fn single_color_field_is_uniform() {
        let field = FieldSpec::new(3, 4, 1).expect("valid spec").generate(9);
        assert_eq!(field.rows(), 3);
        assert_eq!(field.into_cells(), vec![0; 12]);
    }

    #[test]
    fn largest_representable_field_is_accepted() {
        let spec = FieldSpec::new(usize::MAX, 1, 2).expect("product fits in usize");
        assert_eq!(spec.rows(), usize::MAX);
        assert_eq!(spec.columns(), 1);
    }
}
