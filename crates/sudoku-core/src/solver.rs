use crate::{assignable_values, compute_empty_cells, EmptyCell, Grid, ParseGridError};
use std::time::{Duration, Instant};

/// Enumeration stops once this many solutions have been counted.
///
/// [`Puzzle::solve`] returning this value means "at least `MAX_SOLUTIONS`
/// solutions exist" — callers cannot distinguish exactly 100 from more.
pub const MAX_SOLUTIONS: usize = 100;

/// A solving session: one puzzle, solved in place.
///
/// Owns its working grid outright, so concurrent solves just need
/// independent `Puzzle` values. Solving mutates the grid transiently;
/// after [`solve`](Puzzle::solve) returns, [`grid`](Puzzle::grid) reflects
/// whatever branch the search visited last (an implementation detail —
/// read the solution from [`first_solution`](Puzzle::first_solution) or
/// [`solution_text`](Puzzle::solution_text) instead).
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    first_solution: Option<Grid>,
    solution_count: usize,
    elapsed: Duration,
}

impl Puzzle {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            first_solution: None,
            solution_count: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Parse the puzzle from text; see [`Grid::from_text`] for the format.
    pub fn from_text(text: &str) -> Result<Self, ParseGridError> {
        Grid::from_text(text).map(Self::new)
    }

    /// Exhaustively enumerate completions of the puzzle, up to
    /// [`MAX_SOLUTIONS`], and return how many were found.
    ///
    /// An unsatisfiable puzzle returns 0 — that is a legitimate answer,
    /// not an error. Givens are assumed consistent and are not
    /// re-validated; a puzzle with, say, a duplicated digit in a row will
    /// typically (but not guaranteedly) come back with 0 solutions.
    ///
    /// Blocking and single-threaded; the only bound on runtime is the
    /// solution cap. Wall-clock time is recorded and readable via
    /// [`elapsed`](Puzzle::elapsed) afterwards.
    pub fn solve(&mut self) -> usize {
        let start = Instant::now();
        self.solution_count = 0;
        self.first_solution = None;

        let order = compute_empty_cells(&self.grid);
        self.search(&order, 0);

        self.elapsed = start.elapsed();
        self.solution_count
    }

    /// One node of the backtracking search: `index` walks the ordered
    /// empty-cell list; reaching the end means every empty cell holds a
    /// legal digit, i.e. one solution.
    fn search(&mut self, order: &[EmptyCell], index: usize) {
        if self.solution_count == MAX_SOLUTIONS {
            return;
        }

        let Some(cell) = order.get(index) else {
            self.solution_count += 1;
            if self.solution_count == 1 {
                self.first_solution = Some(self.grid.deep_clone());
            }
            return;
        };

        // Recomputed against the live grid: cells filled since ordering
        // time narrow the set beyond the snapshot taken back then. An
        // empty candidate set means zero recursive calls from this node,
        // which is the implicit backtrack.
        for digit in assignable_values(&self.grid, cell.pos) {
            self.grid.set(cell.pos, digit);
            self.search(order, index + 1);
            self.grid.set(cell.pos, 0);
        }
    }

    /// Solutions found by the last [`solve`](Puzzle::solve), capped at
    /// [`MAX_SOLUTIONS`].
    pub fn solution_count(&self) -> usize {
        self.solution_count
    }

    /// Snapshot of the first solution found, unchanged by any later search
    /// activity. `None` before solving or when the puzzle has no solution.
    pub fn first_solution(&self) -> Option<&Grid> {
        self.first_solution.as_ref()
    }

    /// Canonical 9-line rendering of the first solution, or the empty
    /// string when there is none.
    pub fn solution_text(&self) -> String {
        match &self.first_solution {
            Some(grid) => grid.to_string(),
            None => String::new(),
        }
    }

    /// Wall-clock duration of the last [`solve`](Puzzle::solve) call.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Like [`elapsed`](Puzzle::elapsed), in whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// The working grid. Outside of an in-flight solve this is the puzzle
    /// as constructed, except that a finished solve leaves it in
    /// last-visited-branch state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{samples, Position, SIZE};

    /// Every row, column, and box must contain each digit 1–9 exactly once.
    fn assert_valid_solution(grid: &Grid) {
        let full: Vec<u8> = (1..=9).collect();
        for i in 0..SIZE {
            let mut row: Vec<u8> = (0..SIZE).map(|c| grid.get(Position::new(i, c))).collect();
            row.sort_unstable();
            assert_eq!(row, full, "row {i} is not a permutation of 1..9");

            let mut col: Vec<u8> = (0..SIZE).map(|r| grid.get(Position::new(r, i))).collect();
            col.sort_unstable();
            assert_eq!(col, full, "column {i} is not a permutation of 1..9");

            let origin = Position::new((i / 3) * 3, (i % 3) * 3);
            let mut boxed: Vec<u8> = (0..SIZE)
                .map(|k| grid.get(Position::new(origin.row + k / 3, origin.col + k % 3)))
                .collect();
            boxed.sort_unstable();
            assert_eq!(boxed, full, "box {i} is not a permutation of 1..9");
        }
    }

    #[test]
    fn test_medium_has_unique_solution() {
        let mut puzzle = Puzzle::from_text(samples::MEDIUM).unwrap();
        assert_eq!(puzzle.solve(), 1);
        assert_eq!(puzzle.solution_count(), 1);

        let solution = puzzle.first_solution().unwrap();
        assert_valid_solution(solution);
        assert_eq!(
            solution,
            &Grid::from_text(samples::MEDIUM_SOLUTION).unwrap()
        );
        assert!(puzzle.solution_text().starts_with("5 3 4 6 7 8 9 1 2\n"));
    }

    #[test]
    fn test_easy_has_unique_solution() {
        let mut puzzle = Puzzle::from_text(samples::EASY).unwrap();
        assert_eq!(puzzle.solve(), 1);
        assert_valid_solution(puzzle.first_solution().unwrap());
    }

    #[test]
    fn test_hard_has_unique_solution() {
        let mut puzzle = Puzzle::from_text(samples::HARD).unwrap();
        assert_eq!(puzzle.solve(), 1);
        assert_valid_solution(puzzle.first_solution().unwrap());
    }

    #[test]
    fn test_hard_with_blanked_given_has_six() {
        let mut puzzle = Puzzle::from_text(samples::HARD_SIX_SOLUTIONS).unwrap();
        assert_eq!(puzzle.solve(), 6);
        assert_valid_solution(puzzle.first_solution().unwrap());
    }

    #[test]
    fn test_givens_are_preserved() {
        let original = Grid::from_text(samples::EASY).unwrap();
        let mut puzzle = Puzzle::new(original.deep_clone());
        assert_eq!(puzzle.solve(), 1);

        let solution = puzzle.first_solution().unwrap();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = Position::new(row, col);
                let given = original.get(pos);
                if given != 0 {
                    assert_eq!(
                        solution.get(pos),
                        given,
                        "given at ({row},{col}) was overwritten"
                    );
                }
            }
        }
    }

    #[test]
    fn test_already_solved_grid_counts_once() {
        let solved = Grid::from_text(samples::MEDIUM_SOLUTION).unwrap();
        let mut puzzle = Puzzle::new(solved.deep_clone());
        assert_eq!(puzzle.solve(), 1);
        assert_eq!(puzzle.first_solution(), Some(&solved));
    }

    #[test]
    fn test_duplicate_given_in_row_yields_zero() {
        // The medium puzzle with its (0,1) given turned into a second 5.
        let text = format!("550070000{}", &samples::MEDIUM[9..]);
        let mut puzzle = Puzzle::from_text(&text).unwrap();
        assert_eq!(puzzle.solve(), 0);
        assert_eq!(puzzle.first_solution(), None);
        assert_eq!(puzzle.solution_text(), "");
    }

    #[test]
    fn test_empty_grid_hits_the_cap() {
        let mut puzzle = Puzzle::new(Grid::new());
        assert_eq!(puzzle.solve(), MAX_SOLUTIONS);
        assert_valid_solution(puzzle.first_solution().unwrap());
    }

    #[test]
    fn test_solve_is_idempotent_across_instances() {
        let mut first = Puzzle::from_text(samples::HARD_SIX_SOLUTIONS).unwrap();
        let mut second = Puzzle::from_text(samples::HARD_SIX_SOLUTIONS).unwrap();
        assert_eq!(first.solve(), second.solve());
        assert_eq!(first.first_solution(), second.first_solution());
    }

    #[test]
    fn test_resolving_same_instance_matches() {
        let mut puzzle = Puzzle::from_text(samples::HARD_SIX_SOLUTIONS).unwrap();
        let count = puzzle.solve();
        let snapshot = puzzle.first_solution().cloned();
        assert_eq!(puzzle.solve(), count);
        assert_eq!(puzzle.first_solution().cloned(), snapshot);
    }

    #[test]
    fn test_elapsed_is_recorded() {
        let mut puzzle = Puzzle::from_text(samples::MEDIUM).unwrap();
        assert_eq!(puzzle.elapsed(), Duration::ZERO);
        puzzle.solve();
        assert!(puzzle.elapsed() > Duration::ZERO);
        assert_eq!(puzzle.elapsed().as_millis(), puzzle.elapsed_ms());
    }

    #[test]
    fn test_puzzle_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Puzzle>();
    }
}
