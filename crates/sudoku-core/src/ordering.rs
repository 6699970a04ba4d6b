use crate::{assignable_values, Grid, Position, SIZE};

/// An empty cell tagged with its candidate count at ordering time.
///
/// A plain record, not a live view: `candidates` is a snapshot of the
/// pre-search grid and is never refreshed as the search fills cells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCell {
    pub pos: Position,
    pub candidates: u8,
}

/// Collect every empty cell and order them most-constrained-first.
///
/// Scans all 81 positions in row-major order, keeps the zeros, and sorts
/// ascending by candidate-set size. The sort is stable, so ties keep their
/// row-major scan order. Branching on the cells with the fewest candidates
/// first surfaces contradictions early, which is the dominant performance
/// lever of the whole search. The order is computed once per solve and then
/// held fixed; candidate counts drift as the grid fills, but re-sorting per
/// node is deliberately not attempted.
pub fn compute_empty_cells(grid: &Grid) -> Vec<EmptyCell> {
    let mut cells = Vec::with_capacity(grid.empty_count());
    for row in 0..SIZE {
        for col in 0..SIZE {
            let pos = Position::new(row, col);
            if grid.get(pos) == 0 {
                cells.push(EmptyCell {
                    pos,
                    candidates: assignable_values(grid, pos).len() as u8,
                });
            }
        }
    }
    cells.sort_by_key(|cell| cell.candidates);
    cells
}
