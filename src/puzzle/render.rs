// vim: set ai et ts=4 sw=4 sts=4:
use ansi_term::ANSIString;

use super::Puzzle;
use super::super::clue::Clue;
use super::super::decode::decode_line;
use super::super::grid::Grid;
use super::super::util::{ralign, lalign_colored, ralign_joined_coloreds, Direction, Direction::*};

impl Puzzle {
    /// Draws the clues around `grid` with box-drawing characters. If `subdivision` is
    /// given, separator lines are drawn across the grid every that many rows/cols.
    /// Clues whose line in `grid` already matches them are dimmed.
    pub fn render(&self, grid: &Grid, subdivision: Option<usize>, emit_color: bool) -> String {
        let row_prefixes: Vec<Vec<ANSIString>> =
            (0..self.height()).map(|y| self._colored_clue(grid, Horizontal, y))
                              .collect();
        let col_headers: Vec<Vec<ANSIString>> =
            (0..self.width()).map(|x| self._colored_clue(grid, Vertical, x))
                             .collect();

        let prefix_len = row_prefixes.iter()
                                     .map(|parts| parts.iter()
                                                       .fold(0, |sum, ansi_str| sum + ansi_str.len() + 1) // visible length
                                                       .saturating_sub(1))
                                     .max()
                                     .unwrap_or(0);
        let max_col_runs = col_headers.iter()
                                      .map(|parts| parts.len())
                                      .max()
                                      .unwrap_or(0);

        let mut result = String::new();

        for i in (0..max_col_runs).rev() {
            result.push_str(&Self::_fmt_header(&col_headers, i, prefix_len, subdivision, emit_color));
        }

        // top board line
        result.push_str(&Self::_fmt_line(
            &ralign("", prefix_len),
            "\u{2554}",
            "\u{2557}",
            "\u{2564}",
            subdivision,
            &(0..self.width()).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                              .collect::<Vec<_>>()
        ));

        for y in 0..self.height() {
            // board content line
            result.push_str(&Self::_fmt_line(
                &ralign_joined_coloreds(&row_prefixes[y], prefix_len, emit_color),
                "\u{2551}",
                "\u{2551}",
                "\u{2502}",
                subdivision,
                &(0..self.width()).map(|x| format!(" {:1} ", Grid::fmt_square(grid.is_filled(x, y))))
                                  .collect::<Vec<_>>()
            ));

            // horizontal subdivisor line
            if let Some(subdiv) = subdivision {
                if ((y+1) % subdiv == 0) && (y != self.height()-1) {
                    result.push_str(&Self::_fmt_line(
                        &ralign("", prefix_len),
                        "\u{255F}",
                        "\u{2562}",
                        "\u{253C}",
                        subdivision,
                        &(0..self.width()).map(|_| String::from("\u{2500}\u{2500}\u{2500}"))
                                          .collect::<Vec<_>>()
                    ));
                }
            }
        }
        // bottom board line
        result.push_str(&Self::_fmt_line(
            &ralign("", prefix_len),
            "\u{255A}",
            "\u{255D}",
            "\u{2567}",
            subdivision,
            &(0..self.width()).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                              .collect::<Vec<_>>()
        ));

        result
    }

    fn _colored_clue(&self, grid: &Grid, direction: Direction, index: usize) -> Vec<ANSIString<'static>> {
        let clue: &Clue = &self.clues(direction)[index];
        let satisfied = decode_line(grid.line(direction, index)).significant() == clue.significant();
        clue.to_colored_strings(satisfied)
    }

    fn _fmt_line(prefix: &str,
                 left_delim: &str,
                 right_delim: &str,
                 columnwise_separator: &str,
                 subdivision: Option<usize>,
                 content_parts: &[String])
        -> String
    {
        let mut result = format!("{} {}", prefix, left_delim);
        for (idx, s) in content_parts.iter().enumerate() {
            result.push_str(s);
            if let Some(subdiv) = subdivision {
                if ((idx+1) % subdiv == 0) && (idx < content_parts.len()-1) {
                    result.push_str(columnwise_separator);
                }
            }
        }
        result.push_str(&format!("{}\n", right_delim));
        result
    }

    fn _fmt_header(col_headers: &[Vec<ANSIString>],
                   line_idx: usize,
                   prefix_len: usize,
                   subdivision: Option<usize>,
                   emit_color: bool)
        -> String
    {
        let mut content_parts = Vec::<String>::new();
        for runs in col_headers {
            let part = match line_idx < runs.len() {
                true  => format!(" {}", lalign_colored(&runs[runs.len()-1-line_idx], 2, emit_color)),
                false => format!(" {:-2}", " "),
            };
            content_parts.push(part);
        }

        Self::_fmt_line(
            &ralign("", prefix_len),
            " ",
            " ",
            " ",
            subdivision,
            &content_parts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_clues_around_the_grid() {
        let grid = Grid::from_rows(2, vec![0b10, 0b11]).unwrap();
        let puzzle = Puzzle::from_grid(&grid);
        let out = puzzle.render(&grid, None, false);
        let expected = concat!(
            "    2  1  \n",
            "  \u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2557}\n",
            "1 \u{2551} \u{25A0}    \u{2551}\n",
            "2 \u{2551} \u{25A0}  \u{25A0} \u{2551}\n",
            "  \u{255A}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{255D}\n",
        );
        assert_eq!(out, expected);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn subdivisions_split_the_board() {
        let grid = Grid::from_rows(4, vec![0b1111; 4]).unwrap();
        let puzzle = Puzzle::from_grid(&grid);
        let out = puzzle.render(&grid, Some(2), false);
        // one header line, top, 4 rows, 1 separator, bottom
        assert_eq!(out.lines().count(), 8);
        assert_eq!(out.matches('\u{253C}').count(), 1);
        assert_eq!(out.lines().filter(|l| l.contains('\u{2502}')).count(), 4);
    }

    #[test]
    fn unsatisfied_clues_are_not_dimmed() {
        let grid = Grid::from_rows(2, vec![0b10, 0b00]).unwrap();
        let puzzle = Puzzle::new(vec![Clue::from(vec![1]), Clue::from(vec![1])],
                                 vec![Clue::from(vec![1]), Clue::from(vec![1])]).unwrap();
        let satisfied = puzzle._colored_clue(&grid, Horizontal, 0);
        let unsatisfied = puzzle._colored_clue(&grid, Horizontal, 1);
        assert_ne!(satisfied[0].to_string(), unsatisfied[0].to_string());
        assert_eq!(unsatisfied[0].to_string(), "1");
    }
}
