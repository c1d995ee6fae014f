//! Whole-grid transforms and the direction table.
//!
//! Every direction is reduced to the canonical leftward frame by a fixed
//! (pre, post) transform pair: `post(resolve(pre(grid)))` slides the grid
//! toward that direction. The four pairs form a static table; when no merge
//! occurs, pre then post round-trips to the original orientation.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions, in direction-table order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The transform that brings a grid into the canonical leftward frame
    /// for this direction.
    pub fn pre_transform(self, grid: &Grid) -> Grid {
        match self {
            Direction::Left => grid.clone(),
            Direction::Up => grid.rotated_ccw(),
            Direction::Right => grid.mirrored(),
            Direction::Down => grid.rotated_cw(),
        }
    }

    /// The inverse of [`pre_transform`](Self::pre_transform), bringing a
    /// resolved grid back to the original orientation.
    pub fn post_transform(self, grid: &Grid) -> Grid {
        match self {
            Direction::Left => grid.clone(),
            Direction::Up => grid.rotated_cw(),
            Direction::Right => grid.mirrored(),
            Direction::Down => grid.rotated_ccw(),
        }
    }
}

impl Grid {
    /// Horizontal flip: every row reversed independently, row order unchanged.
    pub fn mirrored(&self) -> Grid {
        self.map_rows(|row| row.iter().rev().copied().collect())
    }

    /// Row `i` of the result is column `i` of the input.
    pub fn transposed(&self) -> Grid {
        let size = self.size();
        let rows = (0..size)
            .map(|i| self.rows().iter().map(|row| row[i]).collect())
            .collect();
        Grid::from_rows_unchecked(rows)
    }

    /// Quarter turn clockwise: transpose of the row-reversed grid.
    pub fn rotated_cw(&self) -> Grid {
        self.reversed_rows().transposed()
    }

    /// Quarter turn counter-clockwise: row-reversal of the transposed grid.
    ///
    /// Implemented directly rather than as three clockwise turns.
    pub fn rotated_ccw(&self) -> Grid {
        self.transposed().reversed_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    #[test]
    fn it_mirrors_each_row() {
        assert_eq!(sample().mirrored().rows(), &[vec![2, 1], vec![4, 3]]);
    }

    #[test]
    fn it_mirror_is_an_involution() {
        let g = sample();
        assert_eq!(g.mirrored().mirrored(), g);
    }

    #[test]
    fn it_rotates_clockwise() {
        assert_eq!(sample().rotated_cw().rows(), &[vec![3, 1], vec![4, 2]]);
    }

    #[test]
    fn it_rotates_counter_clockwise() {
        assert_eq!(sample().rotated_ccw().rows(), &[vec![2, 4], vec![1, 3]]);
    }

    #[test]
    fn it_rotation_four_times_is_identity() {
        let g = Grid::from_rows(vec![
            vec![2, 0, 4],
            vec![0, 8, 0],
            vec![16, 0, 2],
        ])
        .unwrap();
        let rotated = g.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(rotated, g);
    }

    #[test]
    fn it_cw_then_ccw_is_identity() {
        let g = Grid::from_rows(vec![
            vec![2, 0, 4],
            vec![0, 8, 0],
            vec![16, 0, 2],
        ])
        .unwrap();
        assert_eq!(g.rotated_cw().rotated_ccw(), g);
        assert_eq!(g.rotated_ccw().rotated_cw(), g);
    }

    #[test]
    fn it_transforms_preserve_dimensions() {
        let g = Grid::empty(5);
        assert_eq!(g.mirrored().size(), 5);
        assert_eq!(g.rotated_cw().size(), 5);
        assert_eq!(g.rotated_ccw().size(), 5);
        assert_eq!(g.transposed().size(), 5);
    }

    #[test]
    fn it_direction_pre_post_round_trips() {
        let g = Grid::from_rows(vec![
            vec![2, 4, 8],
            vec![16, 32, 64],
            vec![128, 256, 512],
        ])
        .unwrap();
        for dir in Direction::ALL {
            let back = dir.post_transform(&dir.pre_transform(&g));
            assert_eq!(back, g, "round trip failed for {:?}", dir);
        }
    }
}
