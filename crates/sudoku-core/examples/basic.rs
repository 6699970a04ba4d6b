//! Basic example of using the Sudoku engine

use sudoku_core::{samples, Grid, Puzzle};

fn main() {
    // Parse a puzzle from a string
    let mut puzzle = Puzzle::from_text(samples::MEDIUM).expect("sample puzzle parses");

    println!("Puzzle:");
    println!("{}", puzzle.grid());
    println!("Given cells: {}", puzzle.grid().given_count());
    println!("Empty cells: {}", puzzle.grid().empty_count());

    // Solve it
    let count = puzzle.solve();
    println!("solutions: {count}");
    println!("elapsed: {}ms", puzzle.elapsed_ms());

    if count > 0 {
        println!("\nFirst solution:");
        print!("{}", puzzle.solution_text());
    } else {
        println!("no solution");
    }

    // Malformed text is a parse error, distinct from "no solution"
    match Grid::from_text("123") {
        Ok(_) => unreachable!(),
        Err(e) => println!("\nparse failure example: {e}"),
    }
}
