// vim: set ai et ts=4 sts=4 sw=4:
use log::{debug, info, trace};
use super::Puzzle;
use super::check::check_columns;
use super::super::clue::Clue;
use super::super::error::{Error, Result};
use super::super::grid::Grid;
use super::super::row::CandidateCache;

/// Depth-first search over rows.
///
/// Each row is tried with its candidates in generation order. After every tentative
/// placement the rows placed so far are checked against the column clues, and the
/// row is cleared again when the check or the deeper search fails.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    col_clues: Vec<Clue>,
    pub iterations: usize,  // candidate placements tried
    pub backtracks: usize,  // placements undone
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Solver {
            puzzle,
            col_clues: puzzle.cols.iter().map(Clue::significant).collect(),
            iterations: 0,
            backtracks: 0,
        }
    }

    pub fn solve(&mut self) -> Result<Grid> {
        let (width, height) = (self.puzzle.width(), self.puzzle.height());
        info!("solving {}x{} puzzle", width, height);
        let mut grid = Grid::new(width, height)?;

        if height == 0 {
            return match self.col_clues.iter().all(Clue::is_empty) {
                true  => Ok(grid),
                false => Err(Error::Unsatisfiable),
            };
        }

        let row_clues = self.puzzle.rows.iter().map(Clue::significant).collect::<Vec<_>>();
        let mut cache = CandidateCache::new(&row_clues, width);
        let solved = self.place_row(&mut grid, &mut cache, 0);
        debug!("{} placements tried, {} undone, candidates generated for {}/{} rows",
               self.iterations, self.backtracks, cache.computed(), height);

        match solved {
            true  => {
                info!("solution found");
                Ok(grid)
            }
            false => {
                info!("no solution exists");
                Err(Error::Unsatisfiable)
            }
        }
    }

    fn place_row(&mut self, grid: &mut Grid, cache: &mut CandidateCache, row: usize) -> bool {
        if row == grid.height() {
            // every row was checked against the columns as it was placed, and the
            // bottom row's check covers each column's full height
            return true;
        }

        let cands = cache.get(row);
        for &cand in cands.iter() {
            self.iterations += 1;
            grid.set_row(row, cand);
            if check_columns(grid, &self.col_clues, row) && self.place_row(grid, cache, row + 1) {
                return true;
            }
            grid.clear_row(row);
            self.backtracks += 1;
        }
        trace!("row {}: no candidate fits, backtracking", row);
        false
    }
}

/// Solves `puzzle`, leaving the first solution found in generation order.
pub fn solve(puzzle: &Puzzle) -> Result<Grid> {
    Solver::new(puzzle).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::super::decode::decode;

    fn puzzle(rows: &[&[usize]], cols: &[&[usize]]) -> Puzzle {
        Puzzle::new(rows.iter().map(|&r| Clue::from(r)).collect(),
                    cols.iter().map(|&c| Clue::from(c)).collect()).unwrap()
    }

    #[test]
    fn solves_staircase() {
        let p = puzzle(&[&[4], &[3], &[2], &[1, 1]],
                       &[&[1, 1], &[2], &[3], &[4]]);
        let mut solver = Solver::new(&p);
        let grid = solver.solve().unwrap();
        assert_eq!(grid.rows(), &[0b1111, 0b0111, 0b0011, 0b1001]);
        assert!(solver.iterations >= 4);
        assert_eq!(solver.iterations - solver.backtracks, 4);
    }

    #[test]
    fn backtracks_past_first_candidates() {
        // X .
        // . X
        let p = puzzle(&[&[1], &[1]], &[&[1], &[1]]);
        let mut solver = Solver::new(&p);
        let grid = solver.solve().unwrap();
        assert_eq!(decode(&grid), vec![Clue::from(vec![1]); 4]);
        assert_eq!(grid.rows(), &[0b10, 0b01]);
        assert_eq!(solver.backtracks, 1);
    }

    #[test]
    fn column_clues_must_be_used_up() {
        // both rows could fill column 0, but it asks for two separate runs
        let p = puzzle(&[&[1], &[1]], &[&[1, 1], &[]]);
        assert!(matches!(solve(&p), Err(Error::Unsatisfiable)));
    }

    #[test]
    fn misfit_row_is_unsatisfiable() {
        let p = puzzle(&[&[2, 2], &[]], &[&[1], &[], &[1]]);
        assert!(matches!(solve(&p), Err(Error::Unsatisfiable)));
    }

    #[test]
    fn empty_puzzles() {
        let p = puzzle(&[], &[&[], &[]]);
        assert_eq!(solve(&p).unwrap().height(), 0);

        let p = puzzle(&[], &[&[1]]);
        assert!(matches!(solve(&p), Err(Error::Unsatisfiable)));

        let p = puzzle(&[&[], &[]], &[]);
        assert_eq!(solve(&p).unwrap().rows(), &[0, 0]);
    }

    #[test]
    fn decoded_blank_lines_solve_as_blank() {
        let p = puzzle(&[&[0], &[2]], &[&[1], &[1]]);
        assert_eq!(solve(&p).unwrap().rows(), &[0b00, 0b11]);
    }
}
