//! Plain-text grid files.
//!
//! Each non-blank line is one row of whitespace-separated unsigned color ids.
//! Lines starting with `#` are comments. Every row must have the same length.

use std::io::BufRead;

use tracing::debug;

use super::commands::CliError;

/// Cells parsed from a grid file together with the row width.
///
/// An empty file yields no cells and zero columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGrid {
    /// Color ids in row-major order.
    pub cells: Vec<u32>,
    /// Number of cells per row.
    pub columns: usize,
}

impl ParsedGrid {
    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len().checked_div(self.columns).unwrap_or(0)
    }
}

/// Parses a grid from `reader`.
///
/// Line and token positions in errors are one-based.
///
/// # Errors
/// Returns [`CliError::Read`] when the reader fails, [`CliError::Parse`] for a
/// token that is not an unsigned integer, and [`CliError::RaggedRow`] when a
/// row's length differs from the first row's.
///
/// # Examples
/// ```
/// use katamari_cli::cli::parse_grid;
///
/// let grid = parse_grid("# board\n1 1 2\n3 1 2\n".as_bytes())?;
/// assert_eq!(grid.cells, vec![1, 1, 2, 3, 1, 2]);
/// assert_eq!(grid.columns, 3);
/// assert_eq!(grid.rows(), 2);
/// # Ok::<(), katamari_cli::cli::CliError>(())
/// ```
pub fn parse_grid(reader: impl BufRead) -> Result<ParsedGrid, CliError> {
    let mut cells = Vec::new();
    let mut columns: Option<usize> = None;

    for (offset, line) in reader.lines().enumerate() {
        let line_number = offset + 1;
        let line = line.map_err(|source| CliError::Read {
            line: line_number,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let before = cells.len();
        for (token_index, token) in trimmed.split_whitespace().enumerate() {
            let color = token.parse::<u32>().map_err(|source| CliError::Parse {
                line: line_number,
                column: token_index + 1,
                token: token.to_owned(),
                source,
            })?;
            cells.push(color);
        }

        let width = cells.len() - before;
        match columns {
            None => columns = Some(width),
            Some(expected) if expected != width => {
                return Err(CliError::RaggedRow {
                    line: line_number,
                    expected,
                    got: width,
                });
            }
            Some(_) => {}
        }
    }

    let columns = columns.unwrap_or(0);
    debug!(cells = cells.len(), columns, "grid file parsed");
    Ok(ParsedGrid { cells, columns })
}
