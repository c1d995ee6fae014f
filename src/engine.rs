//! Move resolution and grid state queries.
//!
//! The slide-and-merge is implemented once, for the canonical leftward
//! orientation ([`resolve_row`]); the direction table in [`crate::transform`]
//! reaches the other three directions by rotating or mirroring into that
//! frame and back.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{compact_zeroes_to_end, Cell, Grid, GridError, Row};
use crate::transform::Direction;

/// Canonical leftward slide-and-merge for a single row.
///
/// Zeroes are compacted to the end, then one left-to-right pass merges each
/// pair of equal adjacent cells into their sum. A merge consumes both source
/// cells; the merged cell is not eligible to merge again within the same
/// pass. Output length equals input length, non-zeroes left-packed.
///
/// ```
/// use grid_2048::engine::resolve_row;
///
/// assert_eq!(resolve_row(&[0, 2, 2, 8]), vec![4, 8, 0, 0]);
/// assert_eq!(resolve_row(&[256, 256, 2, 2]), vec![512, 4, 0, 0]);
/// ```
pub fn resolve_row(row: &[Cell]) -> Row {
    let compacted = compact_zeroes_to_end(row);
    let mut out: Row = Vec::with_capacity(row.len());
    let mut i = 0;
    while i < compacted.len() {
        let cell = compacted[i];
        if cell != 0 && i + 1 < compacted.len() && compacted[i + 1] == cell {
            out.push(cell + compacted[i + 1]);
            i += 2;
        } else {
            out.push(cell);
            i += 1;
        }
    }
    out.resize(row.len(), 0);
    out
}

fn row_admits_left_shift(row: &[Cell]) -> bool {
    for (i, &cell) in row.iter().enumerate() {
        // A zero with any tile to its right slides.
        if cell == 0 && row[i + 1..].iter().any(|&c| c != 0) {
            return true;
        }
        // Two equal adjacent tiles merge.
        if cell != 0 && row.get(i + 1) == Some(&cell) {
            return true;
        }
    }
    false
}

impl Grid {
    /// Slide and merge every row leftward.
    pub fn resolved_left(&self) -> Grid {
        self.map_rows(resolve_row)
    }

    /// Slide and merge the whole grid toward `dir`.
    ///
    /// The input is not mutated; compare the result against it to learn
    /// whether the move changed anything.
    ///
    /// ```
    /// use grid_2048::{Direction, Grid};
    ///
    /// let g = Grid::from_rows(vec![vec![2, 2], vec![0, 4]]).unwrap();
    /// let moved = g.shifted(Direction::Left);
    /// assert_eq!(moved.rows(), &[vec![4, 0], vec![4, 0]]);
    /// ```
    pub fn shifted(&self, dir: Direction) -> Grid {
        dir.post_transform(&dir.pre_transform(self).resolved_left())
    }

    /// Would a leftward slide change this grid?
    ///
    /// True iff some row has a zero with a tile somewhere to its right, or
    /// two equal horizontally-adjacent tiles. This is the per-orientation
    /// probe behind [`has_moves_left`](Self::has_moves_left).
    pub fn can_shift_left(&self) -> bool {
        self.rows().iter().any(|row| row_admits_left_shift(row))
    }

    /// True if at least one of the four directions changes the grid.
    pub fn has_moves_left(&self) -> bool {
        Direction::ALL
            .iter()
            .any(|dir| dir.pre_transform(self).can_shift_left())
    }

    /// True if `target` appears anywhere in the grid.
    pub fn contains(&self, target: Cell) -> bool {
        self.rows().iter().flatten().any(|&c| c == target)
    }

    /// A copy of the grid with `count` additional cells set to `value`,
    /// chosen uniformly among empty cells without replacement.
    ///
    /// Fails with [`GridError::InsufficientEmptyCells`] when `count` exceeds
    /// the number of empty cells; the naive draw-until-empty loop would
    /// never terminate in that case.
    ///
    /// ```
    /// use grid_2048::Grid;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let g = Grid::empty(4).with_random_cells(2, 2, &mut rng)?;
    /// assert_eq!(g.count_empty(), 14);
    /// # Ok::<(), grid_2048::GridError>(())
    /// ```
    pub fn with_random_cells<R: Rng + ?Sized>(
        &self,
        value: Cell,
        count: usize,
        rng: &mut R,
    ) -> Result<Grid, GridError> {
        let empties: Vec<(usize, usize)> = self
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell == 0)
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        if count > empties.len() {
            return Err(GridError::InsufficientEmptyCells {
                requested: count,
                available: empties.len(),
            });
        }
        let mut rows = self.rows().to_vec();
        for &(r, c) in empties.choose_multiple(rng, count) {
            rows[r][c] = value;
        }
        Ok(Grid::from_rows_unchecked(rows))
    }

    /// Convenience: like [`with_random_cells`](Self::with_random_cells) but
    /// uses thread-local RNG.
    pub fn with_random_cells_thread(&self, value: Cell, count: usize) -> Result<Grid, GridError> {
        let mut rng = rand::thread_rng();
        self.with_random_cells(value, count, &mut rng)
    }
}
