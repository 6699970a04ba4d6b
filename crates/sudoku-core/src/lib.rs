//! Core Sudoku engine.
//!
//! Models a 9×9 grid of digits and counts its completions with a classic
//! recursive backtracking search: empty cells are visited in a
//! most-constrained-first order fixed at the start of the search, candidate
//! digits are recomputed against the live grid at every step, and
//! enumeration stops once [`MAX_SOLUTIONS`] distinct solutions have been
//! counted. The first solution found is kept as a snapshot, along with the
//! wall-clock time the search took.
//!
//! ```
//! use sudoku_core::{samples, Puzzle};
//!
//! let mut puzzle = Puzzle::from_text(samples::MEDIUM).unwrap();
//! assert_eq!(puzzle.solve(), 1);
//! assert!(puzzle.solution_text().starts_with("5 3 4 6 7 8 9 1 2"));
//! ```

mod candidates;
mod grid;
mod ordering;
pub mod samples;
mod solver;

pub use candidates::{assignable_values, DigitSet, Digits};
pub use grid::{Grid, ParseGridError, Position};
pub use ordering::{compute_empty_cells, EmptyCell};
pub use solver::{Puzzle, MAX_SOLUTIONS};

/// Side length of the whole puzzle.
pub const SIZE: usize = 9;

/// Side length of one 3×3 box.
pub const BOX_SIZE: usize = 3;
