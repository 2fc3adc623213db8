// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use super::error::{Error, Result};
use super::util::{Direction, Direction::*};

/// One row of the grid as a bit vector. Column `x` of a row of width `w` lives in bit
/// `w-1-x`, so the most significant used bit is the leftmost square.
pub type Line = u32;

/// Widest row a [`Line`] can hold. Puzzles wider than this are rejected up front.
pub const MAX_WIDTH: usize = Line::BITS as usize;

/// Mask covering the `width` low bits of a line.
pub fn line_mask(width: usize) -> Line {
    Line::MAX.checked_shr((MAX_WIDTH - width) as u32).unwrap_or(0)
}

/// Line with `length` filled squares starting at square `start`.
pub fn run_mask(width: usize, start: usize, length: usize) -> Line {
    line_mask(length) << (width - start - length)
}

// ------------------------------------------------

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Line>,
}
impl Grid {
    /// All-empty grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width > MAX_WIDTH {
            return Err(Error::TooWide { width });
        }
        Ok(Grid {
            width,
            rows: vec![0; height],
        })
    }
    pub fn from_rows(width: usize, rows: Vec<Line>) -> Result<Self> {
        let mut grid = Grid::new(width, 0)?;
        grid.rows = rows.into_iter().map(|line| line & line_mask(width)).collect();
        Ok(grid)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.rows.len() }
    pub fn rows(&self) -> &[Line] { &self.rows }
    pub fn row(&self, y: usize) -> Line { self.rows[y] }

    pub fn set_row(&mut self, y: usize, line: Line) {
        self.rows[y] = line;
    }
    pub fn clear_row(&mut self, y: usize) {
        self.rows[y] = 0;
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        (self.rows[y] >> (self.width - 1 - x)) & 1 == 1
    }

    /// The squares of one row or column, in increasing index order.
    pub fn line(&self, direction: Direction, index: usize) -> Vec<bool> {
        match direction {
            Horizontal => (0..self.width()).map(|x| self.is_filled(x, index)).collect(),
            Vertical   => (0..self.height()).map(|y| self.is_filled(index, y)).collect(),
        }
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().map(|line| line.count_ones() as usize).sum()
    }

    /// Flips every square. No clue is checked against the result.
    pub fn invert(&mut self) {
        let mask = line_mask(self.width);
        for line in &mut self.rows {
            *line = !*line & mask;
        }
    }
    pub fn inverted(&self) -> Grid {
        let mut result = self.clone();
        result.invert();
        result
    }

    pub fn fmt_square(filled: bool) -> &'static str {
        match filled {
            true  => "\u{25A0}",
            false => " ",
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", Self::fmt_square(self.is_filled(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())?;
        for line in &self.rows {
            write!(f, "\n  {:0width$b}", line, width = self.width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_address_squares_from_the_left() {
        assert_eq!(line_mask(0), 0);
        assert_eq!(line_mask(3), 0b111);
        assert_eq!(line_mask(32), u32::MAX);
        assert_eq!(run_mask(5, 0, 2), 0b11000);
        assert_eq!(run_mask(5, 3, 2), 0b00011);
        assert_eq!(run_mask(32, 0, 32), u32::MAX);
    }

    #[test]
    fn too_wide_is_rejected() {
        assert!(Grid::new(32, 1).is_ok());
        match Grid::new(33, 1) {
            Err(Error::TooWide { width }) => assert_eq!(width, 33),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn lines_read_rows_and_columns() {
        let grid = Grid::from_rows(3, vec![0b100, 0b011]).unwrap();
        assert!(grid.is_filled(0, 0));
        assert!(!grid.is_filled(1, 0));
        assert_eq!(grid.line(Horizontal, 1), vec![false, true, true]);
        assert_eq!(grid.line(Vertical, 0), vec![true, false]);
        assert_eq!(grid.filled_count(), 3);
    }

    #[test]
    fn invert_flips_only_used_squares() {
        let mut grid = Grid::from_rows(3, vec![0b100, 0b000]).unwrap();
        grid.invert();
        assert_eq!(grid.rows(), &[0b011, 0b111]);
        assert_eq!(grid.inverted().rows(), &[0b100, 0b000]);

        let mut wide = Grid::new(32, 1).unwrap();
        wide.invert();
        assert_eq!(wide.row(0), u32::MAX);
    }

    #[test]
    fn display_draws_filled_squares() {
        let grid = Grid::from_rows(2, vec![0b10, 0b01]).unwrap();
        assert_eq!(grid.to_string(), "\u{25A0} \n \u{25A0}\n");
    }
}
