// vim: set ai et ts=4 sts=4 sw=4:
use super::clue::Clue;
use super::grid::Grid;
use super::util::Direction::*;

/// Reads the run-lengths of filled squares along one line.
///
/// A line without any filled square yields `[0]`, not an empty clue.
pub fn decode_line<I>(squares: I) -> Clue
    where I: IntoIterator<Item = bool>
{
    let mut runs: Vec<usize> = vec![0];
    let mut run_open = false;
    for filled in squares {
        if filled {
            let last = runs.len() - 1;
            if !run_open && runs[last] > 0 {
                runs.push(0);
            }
            let last = runs.len() - 1;
            runs[last] += 1;
        }
        run_open = filled;
    }
    Clue::new(runs)
}

/// Re-derives the clues of a finished grid: all columns left to right, followed by all
/// rows top to bottom.
pub fn decode(grid: &Grid) -> Vec<Clue> {
    let cols = (0..grid.width()).map(|x| decode_line(grid.line(Vertical, x)));
    let rows = (0..grid.height()).map(|y| decode_line(grid.line(Horizontal, y)));
    cols.chain(rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == 'X').collect()
    }

    #[test]
    fn blank_line_decodes_to_single_zero() {
        assert_eq!(decode_line(line("....")), Clue::from(vec![0]));
        assert_eq!(decode_line(line("")), Clue::from(vec![0]));
    }

    #[test]
    fn runs_are_read_left_to_right() {
        assert_eq!(decode_line(line("XXXX")), Clue::from(vec![4]));
        assert_eq!(decode_line(line("X.XX.")), Clue::from(vec![1, 2]));
        assert_eq!(decode_line(line("..X...XXX.X")), Clue::from(vec![1, 3, 1]));
    }

    #[test]
    fn columns_come_before_rows() {
        // X.
        // XX
        // ..
        let grid = Grid::from_rows(2, vec![0b10, 0b11, 0b00]).unwrap();
        let clues = decode(&grid);
        assert_eq!(clues.len(), 5);
        assert_eq!(clues[0], Clue::from(vec![2]));
        assert_eq!(clues[1], Clue::from(vec![1]));
        assert_eq!(clues[2], Clue::from(vec![1]));
        assert_eq!(clues[3], Clue::from(vec![2]));
        assert_eq!(clues[4], Clue::from(vec![0]));
    }
}
