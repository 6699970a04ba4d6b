//! Non-interactive command-line front end: reads puzzle text, runs the
//! solver, prints the solution count, timing, and the first solution.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_core::{samples, Puzzle, MAX_SOLUTIONS};

#[derive(Parser)]
#[command(
    name = "sudoku",
    about = "Count and display the solutions of a 9x9 Sudoku puzzle"
)]
struct Cli {
    /// Puzzle text: 81 digits in row-major order (0 = empty); all other
    /// characters are ignored
    puzzle: Option<String>,

    /// Read the puzzle text from a file instead
    #[arg(long, conflicts_with = "puzzle")]
    file: Option<PathBuf>,

    /// Solve one of the built-in sample puzzles
    #[arg(long, value_enum, conflicts_with_all = ["puzzle", "file"])]
    sample: Option<Sample>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    Easy,
    Medium,
    Hard,
}

impl Sample {
    fn text(self) -> &'static str {
        match self {
            Sample::Easy => samples::EASY,
            Sample::Medium => samples::MEDIUM,
            Sample::Hard => samples::HARD,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let text = match puzzle_text(&cli) {
        Ok(text) => text,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut puzzle = match Puzzle::from_text(&text) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("could not parse puzzle: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", puzzle.grid());

    let count = puzzle.solve();
    if count == MAX_SOLUTIONS {
        println!("solutions: {count} (cap reached; more may exist)");
    } else {
        println!("solutions: {count}");
    }
    println!("elapsed: {}ms", puzzle.elapsed_ms());

    if count > 0 {
        println!();
        print!("{}", puzzle.solution_text());
    } else {
        println!("no solution");
    }

    ExitCode::SUCCESS
}

fn puzzle_text(cli: &Cli) -> Result<String, String> {
    if let Some(sample) = cli.sample {
        return Ok(sample.text().to_string());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {e}", path.display()));
    }
    match &cli.puzzle {
        Some(text) => Ok(text.clone()),
        None => Err("no puzzle given; pass PUZZLE text, --file, or --sample".to_string()),
    }
}
