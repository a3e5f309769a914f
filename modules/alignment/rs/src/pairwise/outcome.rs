use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Optimal score of a single alignment and the DP cell where the optimum ends.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Constructor, Getters, Dissolve)]
pub struct Outcome<S> {
    score: S,
    /// `(row, col)` of the optimal cell, i.e. the lengths of the aligned prefixes of
    /// `seq1` and `seq2`.
    end: (usize, usize),
    /// Last DP column, `H(r, |seq2|)` for every `r`, if requested.
    column: Option<Vec<S>>,
    /// Last DP row, `H(|seq1|, c)` for every `c`, if requested.
    row: Option<Vec<S>>,
}
