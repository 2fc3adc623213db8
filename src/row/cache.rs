// vim: set ai et ts=4 sw=4 sts=4:
use std::rc::Rc;
use log::trace;
use super::candidates;
use super::super::clue::Clue;
use super::super::grid::Line;

/// Candidate rows per row index, generated on first use and kept for the rest of a
/// solve. Row clues never change mid-search, so every branch reaching a row shares the
/// same list.
#[derive(Debug)]
pub struct CandidateCache<'a> {
    clues: &'a [Clue],
    width: usize,
    entries: Vec<Option<Rc<Vec<Line>>>>,
}

impl<'a> CandidateCache<'a> {
    pub fn new(clues: &'a [Clue], width: usize) -> Self {
        CandidateCache {
            clues,
            width,
            entries: vec![None; clues.len()],
        }
    }

    pub fn get(&mut self, row: usize) -> Rc<Vec<Line>> {
        let (clues, width) = (self.clues, self.width);
        let entry = self.entries[row].get_or_insert_with(|| {
            let cands = candidates(&clues[row], width);
            trace!("row {} ({}): {} candidates", row, clues[row], cands.len());
            Rc::new(cands)
        });
        Rc::clone(entry)
    }

    /// Number of rows whose candidates have been generated so far.
    pub fn computed(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}
