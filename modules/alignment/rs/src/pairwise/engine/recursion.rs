use crate::pairwise::dp::chunked::{self, Strip, Strips};
use crate::pairwise::dp::{ColumnCell, DpScore, RowCell};
use crate::pairwise::scoring::gaps::Affine;
use crate::pairwise::scoring::profile::Profiled;
use crate::pairwise::tracker::Tracker;

/// Column-strip sweep over the whole DP matrix shared by the scalar and the bulk engines.
///
/// `seq1` runs down the rows, `seq2` across the columns. On entry the vectors hold the boundary
/// `H(r, 0)` / `H(0, c)`, on exit `column[r] = H(r, |seq2|)` and `row[c] = H(|seq1|, c)` for
/// `c > 0`. `row[0]` is left untouched and must be patched by the caller.
pub struct Recursion<'a, T, R, P> {
    pub seq1: &'a [R],
    pub seq2: &'a [R],
    pub scorer: &'a P,
    pub gaps: &'a Affine<T>,
    /// Lower bound for every cell: zero for local alignment, the lowest value otherwise.
    pub floor: T,
}

impl<T, R, P> Recursion<'_, T, R, P>
where
    T: DpScore,
    R: Copy,
    P: Profiled<T, R>,
{
    pub fn run<K: Tracker<T>, const W: usize>(
        &self,
        column: &mut [ColumnCell<T>],
        row: &mut [RowCell<T>],
        tracker: &mut K,
    ) {
        debug_assert_eq!(column.len(), self.seq1.len() + 1);
        debug_assert_eq!(row.len(), self.seq2.len() + 1);

        let mut profile = P::Profile::default();
        for strip in Strips::<W>::new(self.seq2.len()) {
            match strip {
                Strip::Wide(start) => self.strip::<K, W>(start, &mut profile, column, row, tracker),
                Strip::Narrow(start) => {
                    self.strip::<K, 1>(start, &mut profile, column, row, tracker)
                }
            }
        }
    }

    #[inline(always)]
    fn strip<K: Tracker<T>, const N: usize>(
        &self,
        start: usize,
        profile: &mut P::Profile,
        column: &mut [ColumnCell<T>],
        row: &mut [RowCell<T>],
        tracker: &mut K,
    ) {
        let mut cache: [RowCell<T>; N] = chunked::load(row, start + 1);

        // H(r - 1, start) for the first row, then the new top boundary H(0, start + N)
        let mut diagonal_seed = column[0].current;
        column[0].current = cache[N - 1].diagonal;

        for r in 1..column.len() {
            self.scorer.load(self.seq1[r - 1], profile);

            let mut cell = column[r];
            let mut diagonal = diagonal_seed;
            diagonal_seed = cell.current;

            for (k, rc) in cache.iter_mut().enumerate() {
                let c = start + k + 1;
                let best = self
                    .scorer
                    .score(profile, diagonal, self.seq2[c - 1])
                    .maximum(cell.left)
                    .maximum(rc.up)
                    .maximum(self.floor);
                let best = tracker.track(r, c, best);

                diagonal = rc.diagonal;
                rc.diagonal = best;
                self.gaps.update(best, &mut cell.left, &mut rc.up);
                cell.current = best;
            }
            column[r] = cell;
        }

        chunked::store(row, start + 1, &cache);
    }
}
