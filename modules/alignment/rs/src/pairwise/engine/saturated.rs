use alignkit_core_rs::alignment::Alignable;
use eyre::{ensure, eyre, Result};
use wide::i8x16;

use crate::pairwise::config::{Config, Method};
use crate::pairwise::dp::saturated::{self, Wide, LANES};
use crate::pairwise::dp::{DpScore, RankedBatch, Saturated};
use crate::pairwise::scoring::gaps::Affine;
use crate::pairwise::scoring::profile::{Bulk, Profiled, Transpose};
use crate::pairwise::tracker::{SaturatedGlobal, SaturatedLocal, SaturatedTracker};
use crate::Score;

/// Largest number of rows that can share one offset without any 8-bit cell reaching the
/// saturation limits.
///
/// Scores grow by at most `Δ = max(s_max, 0) - open - extend` per row relative to the group's
/// first cell, values carried between groups and columns differ by at most `M`.
pub fn block_size(bounds: (i32, i32), open: i32, extend: i32) -> Result<usize> {
    let (smin, smax) = bounds;
    let delta = smax.max(0) - open - extend;
    if delta == 0 {
        return Ok(usize::MAX);
    }
    let margin = (-open - extend).max(smax).max(-smin);
    let block = (i8::MAX as i32 - margin) / delta - 2;
    ensure!(
        block >= 1,
        "Scores are too large for the saturated engine: substitution bounds {bounds:?}, \
         gap open {open}, gap extend {extend}"
    );
    Ok(block as usize)
}

fn widen<S: Score>(value: S) -> Result<i32> {
    <i32 as num::NumCast>::from(value)
        .ok_or_else(|| eyre!("Score {value:?} exceeds the range of the saturated engine"))
}

/// Aligns up to 16 pairs at once in 8-bit lanes.
///
/// Every DP column is processed in groups of rows and each group keeps its own `i32` offset,
/// so the actual scores are not limited to the 8-bit range. Results are returned as `i32`.
#[derive(Clone, Debug)]
pub struct SaturatedAligner<Sc: Bulk<i8x16>> {
    scorer: Sc,
    // seq2 symbols are fixed per column, hence the transposed table
    lanes: Sc::Lanes,
    gaps: Affine<i32>,
    lane_gaps: Affine<i8x16>,
    shadow: i8,
    config: Config,
    block: usize,
    batch: RankedBatch<i8x16>,
    column: Saturated,
    top: Vec<i32>,
}

impl<Sc: Bulk<i8x16>> SaturatedAligner<Sc> {
    pub fn new(scorer: Sc, gaps: Affine<Sc::Score>, config: Config) -> Result<Self> {
        config.validate()?;
        let lanes = scorer.lanes()?.transpose();
        let lane_gaps = gaps.lanes::<i8x16>()?;

        let (open, extend) = (widen(*gaps.open())?, widen(*gaps.extend())?);
        let (smin, smax) = scorer.bounds();
        let block = block_size((widen(smin)?, widen(smax)?), open, extend)?;
        let shadow = i8::try_from(open + extend)
            .map_err(|_| eyre!("Gap opening score {} doesn't fit into 8 bits", open + extend))?;
        log::debug!("Saturated aligner: {config:?}, {gaps:?}, blocks of {block} rows");

        Ok(Self {
            scorer,
            lanes,
            gaps: Affine::new(open, extend)?,
            lane_gaps,
            shadow,
            config,
            block,
            batch: RankedBatch::default(),
            column: Saturated::new(),
            top: Vec::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn block(&self) -> usize {
        self.block
    }

    /// Optimal score of every pair, in the input order.
    pub fn align_batch<A1, A2>(&mut self, pairs: &[(A1, A2)]) -> Result<Vec<i32>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
    {
        let mut scores = Vec::with_capacity(pairs.len());
        for chunk in pairs.chunks(LANES) {
            let lanes = self.align_lanes(chunk)?;
            scores.extend_from_slice(&lanes[..chunk.len()]);
        }
        Ok(scores)
    }

    fn align_lanes<A1, A2>(&mut self, pairs: &[(A1, A2)]) -> Result<Vec<i32>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
    {
        self.batch.fill(pairs, self.scorer.ranks())?;
        let (len1, len2) = (self.batch.seq1.len(), self.batch.seq2.len());

        let gaps = self.gaps;
        let end_gaps = *self.config.end_gaps();
        self.top.clear();
        for c in 0..=len2 {
            self.top.push(gaps.initial(c, *end_gaps.seq2_leading())?);
        }
        let leading = *end_gaps.seq1_leading();
        self.column.reset(
            len1,
            self.block.min(len1.max(1)),
            |r| gaps.initial(r, leading),
            self.shadow,
        )?;

        match self.config.method() {
            Method::Global => {
                let tracker = SaturatedGlobal::new(
                    end_gaps,
                    &self.batch.lens1,
                    &self.batch.lens2,
                    self.top.clone(),
                );
                self.sweep(tracker, false)
            }
            Method::Local => {
                let tracker = SaturatedLocal::new(&self.batch.lens1, &self.batch.lens2);
                self.sweep(tracker, true)
            }
        }
    }

    fn sweep<K: SaturatedTracker>(&mut self, mut tracker: K, local: bool) -> Result<Vec<i32>> {
        let shadow = self.gaps.shadow();
        let mut profile = <Sc::Lanes as Profiled<i8x16, i8x16>>::Profile::default();

        tracker.column(0, &self.column);
        for c in 1..=self.batch.seq2.len() {
            self.lanes.load(self.batch.seq2[c - 1], &mut profile);

            // H(r - 1, c - 1) and the vertical gap entering the group, in actual values
            let mut carry_diagonal: Wide = [self.top[c - 1]; LANES];
            let mut carry_up: Wide = [self.top[c] + shadow; LANES];

            for (group, rows) in self.column.groups().iter() {
                let last = self.column.actual(*rows.end());
                self.column.rebase(group);

                let offset = *self.column.offset(group);
                #[cfg(debug_assertions)]
                {
                    let checked = saturated::validate(&carry_diagonal, &offset)
                        .and_then(|_| saturated::validate(&carry_up, &offset));
                    if let Err(report) = checked {
                        panic!("{report:?}");
                    }
                }

                let mut diagonal = saturated::narrow(&carry_diagonal, &offset);
                let mut vertical = saturated::narrow(&carry_up, &offset);
                let floor = match local {
                    true => saturated::narrow(&[0; LANES], &offset),
                    false => i8x16::splat(i8::MIN),
                };

                let cells = self.column.cells_mut();
                for r in rows {
                    let cell = &mut cells[r];
                    let best = self
                        .lanes
                        .score(&profile, diagonal, self.batch.seq1[r - 1])
                        .maximum(cell.left)
                        .maximum(vertical)
                        .maximum(floor);
                    #[cfg(debug_assertions)]
                    if let Err(report) = saturated::validate_relative(best, &offset) {
                        panic!("{report:?}");
                    }
                    let best = tracker.track(r, c, best);

                    diagonal = cell.current;
                    self.lane_gaps.update(best, &mut cell.left, &mut vertical);
                    cell.current = best;
                }
                tracker.group(&offset);

                carry_diagonal = last;
                carry_up = saturated::widen(vertical, &offset);
            }
            tracker.column(c, &self.column);
        }
        Ok(tracker.max_score(&[], &[]))
    }
}
