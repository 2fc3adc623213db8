// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use std::ops::Index;
use ansi_term::{Colour, Style, ANSIString};

/// The run-lengths of one row (left to right) or column (top to bottom).
///
/// An empty clue describes a blank line. Clues decoded from a grid describe a blank
/// line as the single run `0` instead, so zero-length runs are kept as given and only
/// stripped by [`Clue::significant`].
#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct Clue {
    runs: Vec<usize>,
}

impl Clue {
    pub fn new(runs: Vec<usize>) -> Self {
        Clue { runs }
    }
    pub fn runs(&self) -> &[usize] { &self.runs }
    pub fn len(&self) -> usize { self.runs.len() }
    pub fn is_empty(&self) -> bool { self.runs.is_empty() }

    /// The same clue without zero-length runs, as seen by the solver.
    pub fn significant(&self) -> Clue {
        Clue::new(self.runs.iter().copied().filter(|&r| r > 0).collect())
    }

    /// Fewest cells a line needs to hold this clue: every run plus one gap between
    /// consecutive runs. `None` when that does not fit in a `usize`.
    pub fn min_length(&self) -> Option<usize> {
        let runs = self.significant();
        let gaps = runs.len().saturating_sub(1);
        runs.runs.iter().try_fold(gaps, |acc, &run| acc.checked_add(run))
    }
    pub fn fits(&self, length: usize) -> bool {
        self.min_length().map_or(false, |min| min <= length)
    }

    /// One styled string per run; dimmed when the line is known to be satisfied.
    pub fn to_colored_strings(&self, satisfied: bool) -> Vec<ANSIString<'static>> {
        let style = match satisfied {
            true  => Style::new().fg(Colour::Fixed(241)),
            false => Style::default(),
        };
        self.runs.iter()
                 .map(|run| style.paint(run.to_string()))
                 .collect()
    }
}

impl From<Vec<usize>> for Clue {
    fn from(runs: Vec<usize>) -> Self {
        Clue::new(runs)
    }
}
impl From<&[usize]> for Clue {
    fn from(runs: &[usize]) -> Self {
        Clue::new(runs.to_vec())
    }
}
impl Index<usize> for Clue {
    type Output = usize;
    fn index(&self, index: usize) -> &usize {
        &self.runs[index]
    }
}
impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts = self.runs.iter()
                             .map(|run| run.to_string())
                             .collect::<Vec<_>>();
        write!(f, "{}", parts.join(" "))
    }
}
