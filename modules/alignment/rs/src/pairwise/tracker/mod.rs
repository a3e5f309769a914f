pub use bulk::{BulkGlobal, BulkLocal};
pub use global::Global;
pub use local::{Best, Local};
pub use saturated::{SaturatedGlobal, SaturatedLocal, SaturatedTracker};

use crate::pairwise::dp::{ColumnCell, RowCell};

mod bulk;
mod global;
mod local;
mod saturated;

/// Collects the optimal score during and after a DP sweep.
pub trait Tracker<T> {
    type Output;

    /// Called for every computed cell `(row, col)`, both 1-based. Returns the value to store.
    fn track(&mut self, row: usize, col: usize, score: T) -> T;

    /// Extract the optimum once the sweep is over. `column` holds `H(r, |seq2|)` and `row` holds
    /// `H(|seq1|, c)`.
    fn max_score(self, column: &[ColumnCell<T>], row: &[RowCell<T>]) -> Self::Output;
}
