//! Named sample puzzles.
//!
//! Fixture data for tests and for the CLI's `--sample` flag; not engine
//! behavior. Any text with exactly 81 digits parses, so the multi-line
//! layouts here are purely for readability.

/// An easy puzzle with a single solution.
pub const EASY: &str = "\
1 6 4 0 0 0 0 0 2
2 0 0 4 0 3 9 1 0
0 0 5 0 8 0 4 0 7
0 9 0 0 0 6 5 0 0
5 0 0 1 0 2 0 0 8
0 0 8 9 0 0 0 3 0
8 0 9 0 4 0 2 0 0
0 7 3 5 0 9 0 0 1
4 0 0 0 0 0 6 7 9";

/// A medium puzzle with a single solution; see [`MEDIUM_SOLUTION`].
pub const MEDIUM: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

/// The unique solution of [`MEDIUM`].
pub const MEDIUM_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// A hard puzzle with a single solution. Blanking the 7 given in its first
/// row ([`HARD_SIX_SOLUTIONS`]) leaves six.
pub const HARD: &str = "\
3 7 0 0 0 0 0 8 0
0 0 1 0 9 3 0 0 0
0 4 0 7 8 0 0 0 3
0 9 3 8 0 0 0 1 2
0 0 0 0 4 0 0 0 0
5 2 0 0 0 6 7 9 0
6 0 0 0 2 1 0 4 0
0 0 0 5 3 0 9 0 0
0 3 0 0 0 0 0 5 1";

/// [`HARD`] with the first-row 7 blanked; has exactly six solutions.
pub const HARD_SIX_SOLUTIONS: &str = "\
3 0 0 0 0 0 0 8 0
0 0 1 0 9 3 0 0 0
0 4 0 7 8 0 0 0 3
0 9 3 8 0 0 0 1 2
0 0 0 0 4 0 0 0 0
5 2 0 0 0 6 7 9 0
6 0 0 0 2 1 0 4 0
0 0 0 5 3 0 9 0 0
0 3 0 0 0 0 0 5 1";
