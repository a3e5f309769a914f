use crate::pairwise::dp::{ColumnCell, RowCell};
use crate::pairwise::scoring::Score;

use super::Tracker;

/// Best cell seen so far.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Best<S: Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

impl<S: Score> Default for Best<S> {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            score: S::min_value(),
        }
    }
}

/// Local alignment: running maximum over every computed cell. Nothing is computed for an empty
/// sequence and the score stays at `S::min_value()`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub struct Local<S: Score> {
    best: Best<S>,
}

impl<S: Score> Local<S> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Score> Tracker<S> for Local<S> {
    type Output = (S, (usize, usize));

    #[inline(always)]
    fn track(&mut self, row: usize, col: usize, score: S) -> S {
        if score > self.best.score {
            self.best = Best { row, col, score };
        }
        score
    }

    fn max_score(self, _: &[ColumnCell<S>], _: &[RowCell<S>]) -> Self::Output {
        (self.best.score, (self.best.row, self.best.col))
    }
}
