use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell. `0` is empty; any positive value is a tile.
///
/// The domain convention is powers of two, but nothing here assumes it:
/// the engine only compares cells for equality and sums them on merge.
pub type Cell = u64;

/// One row of the grid, ordered along the slide axis.
pub type Row = Vec<Cell>;

/// Errors surfaced by grid construction and cell population.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid is not square: {rows} rows but a row of width {width}")]
    NotSquare { rows: usize, width: usize },
    #[error("column index {index} out of range for grid of size {size}")]
    ColumnOutOfRange { index: usize, size: usize },
    #[error("asked for {requested} random cells but only {available} are empty")]
    InsufficientEmptyCells { requested: usize, available: usize },
}

/// A square grid of cells.
///
/// Row order and within-row order are both significant; transforms permute
/// one or both. Every operation is pure: it borrows the grid and returns a
/// fresh one, so callers own the canonical "current grid" and decide when to
/// replace it with a result.
///
/// ```
/// use grid_2048::grid::Grid;
///
/// let g = Grid::empty(4);
/// assert_eq!(g.size(), 4);
/// assert!(g.rows().iter().all(|row| row.iter().all(|&c| c == 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid(Vec<Row>);

impl Grid {
    /// An all-zero grid of `size` rows by `size` columns.
    pub fn empty(size: usize) -> Self {
        Grid(vec![vec![0; size]; size])
    }

    /// Build a grid from rows, failing fast if the input is not square.
    ///
    /// ```
    /// use grid_2048::grid::{Grid, GridError};
    ///
    /// assert!(Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).is_ok());
    /// assert_eq!(
    ///     Grid::from_rows(vec![vec![2, 0, 0], vec![0, 4, 0]]),
    ///     Err(GridError::NotSquare { rows: 2, width: 3 }),
    /// );
    /// ```
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, GridError> {
        let size = rows.len();
        for row in &rows {
            if row.len() != size {
                return Err(GridError::NotSquare { rows: size, width: row.len() });
            }
        }
        Ok(Grid(rows))
    }

    /// Number of rows (= number of columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Borrow the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Consume the grid, returning its rows.
    #[inline]
    pub fn into_rows(self) -> Vec<Row> {
        self.0
    }

    /// The cell at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// A new grid with the row order reversed; row contents untouched.
    pub fn reversed_rows(&self) -> Grid {
        Grid(self.0.iter().rev().cloned().collect())
    }

    /// The values at `index` from every row, in row order.
    ///
    /// An out-of-range index fails with [`GridError::ColumnOutOfRange`]
    /// rather than returning a short or padded row.
    pub fn column(&self, index: usize) -> Result<Row, GridError> {
        if index >= self.size() {
            return Err(GridError::ColumnOutOfRange { index, size: self.size() });
        }
        Ok(self.0.iter().map(|row| row[index]).collect())
    }

    /// Count the empty (zero) cells.
    pub fn count_empty(&self) -> usize {
        self.0.iter().flatten().filter(|&&c| c == 0).count()
    }

    /// Apply `f` to every row independently, keeping row order.
    pub(crate) fn map_rows<F>(&self, f: F) -> Grid
    where
        F: Fn(&[Cell]) -> Row,
    {
        Grid(self.0.iter().map(|row| f(row)).collect())
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Row>) -> Grid {
        Grid(rows)
    }
}

/// Stable partition of a row: non-zero values keep their relative order and
/// move to the front, zeroes trail. Length is preserved. Idempotent.
///
/// ```
/// use grid_2048::grid::compact_zeroes_to_end;
///
/// assert_eq!(compact_zeroes_to_end(&[0, 2, 0, 4]), vec![2, 4, 0, 0]);
/// ```
pub fn compact_zeroes_to_end(row: &[Cell]) -> Row {
    let mut out: Row = row.iter().copied().filter(|&c| c != 0).collect();
    out.resize(row.len(), 0);
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .flatten()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1);
        for row in &self.0 {
            let cells: Vec<String> = row
                .iter()
                .map(|&c| {
                    if c == 0 {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", c, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
