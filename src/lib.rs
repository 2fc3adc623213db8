// vim: set ai et ts=4 sts=4 sw=4:
//! Nonogram solver: row-by-row backtracking over candidate rows, pruned by checking the
//! column clues after every placement.
pub mod clue;
pub mod decode;
pub mod error;
pub mod grid;
pub mod puzzle;
pub mod row;
pub mod util;

pub use self::clue::Clue;
pub use self::decode::{decode, decode_line};
pub use self::error::{Error, Result};
pub use self::grid::{Grid, Line, MAX_WIDTH};
pub use self::puzzle::{solve, Puzzle, Solver};
