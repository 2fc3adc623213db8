// vim: set ai et ts=4 sw=4 sts=4:
mod check;
mod render;
mod solver;

pub use self::check::check_columns;
pub use self::solver::{solve, Solver};

use std::convert::TryFrom;
use yaml_rust::{Yaml, YamlLoader};

use super::clue::Clue;
use super::decode::decode;
use super::error::{Error, Result};
use super::grid::{Grid, MAX_WIDTH};
use super::util::{Direction, Direction::*};

/// The clues of a puzzle: one per row, top to bottom, and one per column, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub rows: Vec<Clue>,
    pub cols: Vec<Clue>,
}

impl Puzzle {
    /// Clues that cannot fit their line are accepted here; the solver reports them as
    /// unsatisfiable.
    pub fn new(rows: Vec<Clue>, cols: Vec<Clue>) -> Result<Self> {
        if cols.len() > MAX_WIDTH {
            return Err(Error::TooWide { width: cols.len() });
        }
        Ok(Puzzle { rows, cols })
    }
    pub fn width(&self) -> usize { self.cols.len() }
    pub fn height(&self) -> usize { self.rows.len() }

    pub fn clues(&self, direction: Direction) -> &[Clue] {
        match direction {
            Horizontal => &self.rows,
            Vertical   => &self.cols,
        }
    }

    /// The puzzle whose clues are read off `grid`. Blank lines get the clue `0`.
    pub fn from_grid(grid: &Grid) -> Puzzle {
        let mut cols = decode(grid);
        let rows = cols.split_off(grid.width());
        Puzzle { rows, cols }
    }

    pub fn from_yaml_str(s: &str) -> Result<Puzzle> {
        let docs: Vec<Yaml> = YamlLoader::load_from_str(s)?;
        match docs.first() {
            Some(doc) => Self::from_yaml(doc),
            None      => Err(Error::Parse("empty document".to_string())),
        }
    }

    pub fn from_yaml(doc: &Yaml) -> Result<Puzzle> {
        let rows = Self::_parse_row(doc, Horizontal)?;
        let cols = Self::_parse_row(doc, Vertical)?;
        Puzzle::new(rows, cols)
    }

    fn _parse_row(doc: &Yaml, direction: Direction) -> Result<Vec<Clue>> {
        let key = direction.yaml_key();
        let list = doc[key].as_vec()
                           .ok_or_else(|| Error::Parse(format!("'{}' must be a list", key)))?;
        list.iter()
            .enumerate()
            .map(|(idx, yaml_val)| Self::_parse_row_runs(yaml_val).map_err(|msg|
                Error::Parse(format!("{} {}: {}", direction, idx, msg))))
            .collect()
    }

    fn _parse_row_runs(input: &Yaml) -> std::result::Result<Clue, String> {
        let runs = match input {
            Yaml::String(s)  => s.split_whitespace()
                                 .map(|int| int.parse::<usize>()
                                               .map_err(|e| format!("'{}': {}", int, e)))
                                 .collect::<std::result::Result<Vec<_>, _>>()?,
            Yaml::Integer(i) => vec![usize::try_from(*i).map_err(|_| format!("negative run {}", i))?],
            Yaml::Null       => vec![],
            _                => return Err(format!("unexpected value {:?}", input)),
        };
        Ok(Clue::new(runs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAIRCASE: &str = "
rows:
    - 4
    - 3
    - 2
    - 1 1
cols:
    - 1 1
    - 2
    - 3
    - 4
";

    #[test]
    fn loads_yaml_clues() {
        let puzzle = Puzzle::from_yaml_str(STAIRCASE).unwrap();
        assert_eq!(puzzle.width(), 4);
        assert_eq!(puzzle.height(), 4);
        assert_eq!(puzzle.rows[3], Clue::from(vec![1, 1]));
        assert_eq!(puzzle.clues(Vertical)[0], Clue::from(vec![1, 1]));
        assert_eq!(puzzle.clues(Horizontal)[0], Clue::from(vec![4]));
    }

    #[test]
    fn null_entries_are_blank_lines() {
        let puzzle = Puzzle::from_yaml_str("rows:\n  - 1\n  -\ncols:\n  - 1\n").unwrap();
        assert_eq!(puzzle.rows, vec![Clue::from(vec![1]), Clue::default()]);
    }

    #[test]
    fn bad_documents_are_reported() {
        assert!(matches!(Puzzle::from_yaml_str(""), Err(Error::Parse(_))));
        assert!(matches!(Puzzle::from_yaml_str("rows: [1]"), Err(Error::Parse(_))));
        assert!(matches!(Puzzle::from_yaml_str("rows: [x]\ncols: []"), Err(Error::Parse(_))));
        assert!(matches!(Puzzle::from_yaml_str("rows: [-1]\ncols: []"), Err(Error::Parse(_))));
        assert!(matches!(Puzzle::from_yaml_str("rows: [\n"), Err(Error::Yaml(_))));

        let wide = format!("rows: []\ncols: [{}]", vec!["1"; 33].join(", "));
        assert!(matches!(Puzzle::from_yaml_str(&wide), Err(Error::TooWide { width: 33 })));
    }

    #[test]
    fn from_grid_splits_columns_and_rows() {
        // X X .
        // . . .
        let grid = Grid::from_rows(3, vec![0b110, 0b000]).unwrap();
        let puzzle = Puzzle::from_grid(&grid);
        assert_eq!(puzzle.cols, vec![Clue::from(vec![1]), Clue::from(vec![1]), Clue::from(vec![0])]);
        assert_eq!(puzzle.rows, vec![Clue::from(vec![2]), Clue::from(vec![0])]);
    }
}
