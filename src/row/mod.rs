// vim: set ai et ts=4 sw=4 sts=4:
mod cache;

pub use self::cache::CandidateCache;

use super::clue::Clue;
use super::grid::{Line, run_mask};

// a partially placed row: the bits set so far, and the first square the next run may
// start at (everything before it is taken by earlier runs, their trailing gaps, and
// the slack handed out to them)
#[derive(Clone, Copy, Debug)]
struct Placement {
    bits: Line,
    consumed: usize,
}

/// Every way of laying out `clue` on a line of `length` squares, leftmost-packed
/// layouts first.
///
/// Runs are placed one at a time. Each partial placement is extended with the next
/// run at every start offset that still leaves room for the runs after it, so each
/// candidate corresponds to exactly one increasing sequence of start offsets and none
/// is produced twice. A clue that cannot fit yields no candidates at all.
pub fn candidates(clue: &Clue, length: usize) -> Vec<Line> {
    if !clue.fits(length) {
        return Vec::new();
    }
    let runs = clue.significant();
    let runs = runs.runs();

    let mut placements = vec![Placement { bits: 0, consumed: 0 }];
    for (i, &run) in runs.iter().enumerate() {
        // bounded by the clue's minimum length, which fits
        let remaining_min: usize = runs[i+1..].iter().map(|&r| r + 1).sum();
        let end = length - (run + remaining_min);

        let mut next = Vec::<Placement>::new();
        for placement in &placements {
            for start in placement.consumed..=end {
                next.push(Placement {
                    bits:     placement.bits | run_mask(length, start, run),
                    consumed: start + run + 1,
                });
            }
        }
        placements = next;
    }
    placements.into_iter().map(|p| p.bits).collect()
}
