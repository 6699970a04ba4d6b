use crate::{BOX_SIZE, SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A (row, column) coordinate into the 9×9 grid.
///
/// Carries no value of its own; it is only an address into a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left corner of the 3×3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position {
            row: (self.row / BOX_SIZE) * BOX_SIZE,
            col: (self.col / BOX_SIZE) * BOX_SIZE,
        }
    }
}

/// Puzzle text did not contain exactly 81 digit characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("needed 81 digits, found {found}")]
pub struct ParseGridError {
    /// Total number of digit characters found in the input.
    pub found: usize,
}

/// The 9×9 board: digits 0–9 where 0 means empty.
///
/// Mutated in place during search (a value is written on entering a branch
/// and reset to 0 on leaving it), so after a solve the grid reflects the
/// last branch visited, not the solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Build a grid from pre-parsed rows.
    pub fn from_rows(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Parse a grid from text containing exactly 81 digit characters in
    /// row-major order. Every non-digit character is ignored, so puzzle
    /// strings may be laid out with spaces and newlines freely.
    pub fn from_text(text: &str) -> Result<Self, ParseGridError> {
        let digits: Vec<u8> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();
        if digits.len() != SIZE * SIZE {
            return Err(ParseGridError {
                found: digits.len(),
            });
        }

        let mut grid = Grid::new();
        for (i, &digit) in digits.iter().enumerate() {
            grid.cells[i / SIZE][i % SIZE] = digit;
        }
        Ok(grid)
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Write a digit (0 clears the cell). No legality check: the search
    /// engine only ever assigns digits it has computed to be candidates.
    pub fn set(&mut self, pos: Position, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        self.cells[pos.row][pos.col] = digit;
    }

    /// A fully independent copy, safe to keep across later mutation.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&d| d != 0)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&d| d == 0).count()
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        SIZE * SIZE - self.empty_count()
    }
}

/// Canonical rendering: 9 lines of 9 space-separated digits, 0 for blank.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, digit) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{digit}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
