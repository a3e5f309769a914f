use crate::pairwise::config::{EndGap, EndGaps};
use crate::pairwise::dp::{ColumnCell, RowCell};
use crate::pairwise::scoring::Score;

use super::Tracker;

/// Global alignment: nothing to do during the sweep, the optimum lies on the terminal vectors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Global {
    end_gaps: EndGaps,
}

impl Global {
    pub fn new(end_gaps: EndGaps) -> Self {
        Self { end_gaps }
    }
}

impl<S: Score> Tracker<S> for Global {
    type Output = (S, (usize, usize));

    #[inline(always)]
    fn track(&mut self, _: usize, _: usize, score: S) -> S {
        score
    }

    fn max_score(self, column: &[ColumnCell<S>], row: &[RowCell<S>]) -> Self::Output {
        let (rows, cols) = (column.len() - 1, row.len() - 1);
        let mut best = (column[rows].current, (rows, cols));

        // Unaligned suffix of seq1: any cell of the last column may end the alignment
        if *self.end_gaps.seq1_trailing() == EndGap::Free {
            for (r, cell) in column.iter().enumerate() {
                if cell.current > best.0 {
                    best = (cell.current, (r, cols));
                }
            }
        }
        if *self.end_gaps.seq2_trailing() == EndGap::Free {
            for (c, cell) in row.iter().enumerate() {
                if cell.diagonal > best.0 {
                    best = (cell.diagonal, (rows, c));
                }
            }
        }
        best
    }
}
