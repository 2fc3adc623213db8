// vim: set ai et ts=4 sts=4 sw=4:
use super::super::clue::Clue;
use super::super::grid::Grid;

/// Checks rows `0..=last_row` of the grid against the column clues.
///
/// Every run that has already closed must match the next unused entry of its column's
/// clue. A run still open at `last_row` may keep growing, so it only has to fit within
/// the next entry. When `last_row` is the bottom row nothing can grow any more: open
/// runs must match exactly and every entry must have been used.
///
/// `col_clues` must hold significant runs only (see [`Clue::significant`]).
pub fn check_columns(grid: &Grid, col_clues: &[Clue], last_row: usize) -> bool {
    let complete = last_row + 1 == grid.height();
    (0..grid.width()).all(|x| check_column(grid, x, &col_clues[x], last_row, complete))
}

fn check_column(grid: &Grid, x: usize, clue: &Clue, last_row: usize, complete: bool) -> bool {
    let mut run_idx: usize = 0;
    let mut run_len: usize = 0;

    for y in 0..=last_row {
        if grid.is_filled(x, y) {
            run_len += 1;
        } else if run_len > 0 {
            // run just closed
            if run_idx >= clue.len() || clue[run_idx] != run_len {
                return false;
            }
            run_idx += 1;
            run_len = 0;
        }
    }

    if run_len > 0 {
        if run_idx >= clue.len() || run_len > clue[run_idx] {
            return false;
        }
        if complete {
            return run_len == clue[run_idx] && run_idx + 1 == clue.len();
        }
        return true;
    }
    !complete || run_idx == clue.len()
}
