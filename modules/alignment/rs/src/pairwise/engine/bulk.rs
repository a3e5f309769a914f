use alignkit_core_rs::alignment::Alignable;
use eyre::{ensure, Result};

use super::{ensure_representable, Recursion};
use crate::pairwise::config::{Config, Method};
use crate::pairwise::dp::{ColumnCell, DpVector, RankedBatch, RowCell};
use crate::pairwise::scoring::gaps::Affine;
use crate::pairwise::scoring::profile::{cast, Bulk};
use crate::pairwise::tracker::{BulkGlobal, BulkLocal, Tracker};
use crate::simd::Lanes;

/// Aligns up to `V::LANES` independent pairs at once, one pair per lane.
///
/// Lanes use plain wide arithmetic: scores must fit into `V::Scalar` for every cell of the
/// padded matrix.
#[derive(Clone, Debug)]
pub struct BulkAligner<V: Lanes, Sc: Bulk<V>, const W: usize = 8> {
    scorer: Sc,
    lanes: Sc::Lanes,
    gaps: Affine<Sc::Score>,
    lane_gaps: Affine<V>,
    config: Config,
    batch: RankedBatch<V>,
    column: DpVector<ColumnCell<V>>,
    row: DpVector<RowCell<V>>,
}

impl<V: Lanes, Sc: Bulk<V>, const W: usize> BulkAligner<V, Sc, W> {
    pub fn new(scorer: Sc, gaps: Affine<Sc::Score>, config: Config) -> Result<Self> {
        ensure!(W > 0, "Strip width must be positive");
        config.validate()?;
        let lanes = scorer.lanes()?;
        let lane_gaps = gaps.lanes::<V>()?;
        log::debug!(
            "Bulk aligner: {} lanes, {config:?}, {gaps:?}, strips of {W} columns",
            V::LANES
        );

        Ok(Self {
            scorer,
            lanes,
            gaps,
            lane_gaps,
            config,
            batch: RankedBatch::default(),
            column: DpVector::new(),
            row: DpVector::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Optimal score of every pair, in the input order.
    pub fn align_batch<A1, A2>(&mut self, pairs: &[(A1, A2)]) -> Result<Vec<V::Scalar>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
    {
        let mut scores = Vec::with_capacity(pairs.len());
        for chunk in pairs.chunks(V::LANES) {
            let lanes = self.align_lanes(chunk)?;
            scores.extend_from_slice(&lanes[..chunk.len()]);
        }
        Ok(scores)
    }

    fn align_lanes<A1, A2>(&mut self, pairs: &[(A1, A2)]) -> Result<Vec<V::Scalar>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
    {
        self.batch.fill(pairs, self.scorer.ranks())?;
        let (len1, len2) = (self.batch.seq1.len(), self.batch.seq2.len());
        ensure_representable::<_, V::Scalar>(self.scorer.bounds(), &self.gaps, len1 + len2)?;

        let (gaps, shadow) = (self.gaps, V::splat(cast::<V, _>(self.gaps.shadow())?));
        let end_gaps = *self.config.end_gaps();
        self.column.reset(len1 + 1, |r| {
            let value = cast::<V, _>(gaps.initial(r, *end_gaps.seq1_leading())?)?;
            Ok(ColumnCell::boundary(V::splat(value), shadow))
        })?;
        self.row.reset(len2 + 1, |c| {
            let value = cast::<V, _>(gaps.initial(c, *end_gaps.seq2_leading())?)?;
            Ok(RowCell::boundary(V::splat(value), shadow))
        })?;

        let scores = match self.config.method() {
            Method::Global => {
                let mut tracker = BulkGlobal::new(
                    end_gaps,
                    &self.batch.lens1,
                    &self.batch.lens2,
                    &self.column,
                    &self.row,
                );
                self.sweep(V::splat(<V::Scalar as num::Bounded>::min_value()), &mut tracker);
                tracker.max_score(&self.column, &self.row)
            }
            Method::Local => {
                let mut tracker = BulkLocal::new(&self.batch.lens1, &self.batch.lens2);
                self.sweep(V::splat(<V::Scalar as num::Zero>::zero()), &mut tracker);
                tracker.max_score(&self.column, &self.row)
            }
        };
        Ok(scores)
    }

    fn sweep<K: Tracker<V>>(&mut self, floor: V, tracker: &mut K) {
        let recursion = Recursion {
            seq1: self.batch.seq1.as_slice(),
            seq2: self.batch.seq2.as_slice(),
            scorer: &self.lanes,
            gaps: &self.lane_gaps,
            floor,
        };
        recursion.run::<K, W>(&mut self.column, &mut self.row, tracker);
    }
}
