//! grid-2048: rule engine for a sliding-tile merge puzzle (2048-style).
//!
//! This crate provides:
//! - A square [`Grid`] of cells with pure transform primitives (`grid` module)
//! - Rotation/mirror transforms and the direction table (`transform` module)
//! - The slide-and-merge resolver and state queries (`engine` module)
//!
//! The engine is direction-agnostic at its core: slide-and-merge is
//! implemented once for the leftward orientation, and each [`Direction`]
//! carries a fixed pair of transforms that rotate or mirror the grid into
//! that frame and back. Every operation returns a new grid; inputs are never
//! mutated, so the embedding layer owns the canonical "current grid".
//!
//! Quick start:
//! ```
//! use grid_2048::{Direction, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic game start with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let board = Grid::empty(4).with_random_cells(2, 2, &mut rng)?;
//!
//! let moved = board.shifted(Direction::Left);
//! if moved != board {
//!     // the move changed something; spawn the next tile
//!     let board = moved.with_random_cells(2, 1, &mut rng)?;
//!     assert!(board.has_moves_left());
//! }
//! assert!(!board.contains(2048));
//! # Ok::<(), grid_2048::GridError>(())
//! ```
//!
//! Rendering, input capture, and persistence are the embedding layer's
//! concern; the core only consumes a resolved [`Direction`] and returns
//! grids and booleans.

pub mod engine;
pub mod grid;
pub mod transform;

pub use engine::resolve_row;
pub use grid::{compact_zeroes_to_end, Cell, Grid, GridError, Row};
pub use transform::Direction;
