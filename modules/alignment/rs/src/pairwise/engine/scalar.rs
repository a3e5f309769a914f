use alignkit_core_rs::alignment::Alignable;
use eyre::{ensure, Result};

use super::{ensure_representable, Recursion};
use crate::pairwise::config::{Config, Method};
use crate::pairwise::dp::{ColumnCell, DpScore, DpVector, Ranked, RowCell};
use crate::pairwise::outcome::Outcome;
use crate::pairwise::scoring::gaps::Affine;
use crate::pairwise::scoring::profile::Profiled;
use crate::pairwise::scoring::symbols::Scorer;
use crate::pairwise::tracker::{Global, Local, Tracker};

/// Reusable scalar aligner. DP vectors and rank buffers are kept between calls, so aligning
/// many pairs with the same aligner doesn't allocate once the buffers have grown.
///
/// `W` is the width of the column strips swept together.
#[derive(Clone, Debug)]
pub struct Aligner<Sc: Scorer, const W: usize = 8> {
    scorer: Sc,
    gaps: Affine<Sc::Score>,
    config: Config,
    ranked: Ranked,
    column: DpVector<ColumnCell<Sc::Score>>,
    row: DpVector<RowCell<Sc::Score>>,
}

impl<Sc, const W: usize> Aligner<Sc, W>
where
    Sc: Scorer + Profiled<<Sc as Scorer>::Score, u8>,
    Sc::Score: DpScore,
{
    pub fn new(scorer: Sc, gaps: Affine<Sc::Score>, config: Config) -> Result<Self> {
        ensure!(W > 0, "Strip width must be positive");
        config.validate()?;
        log::debug!("Scalar aligner: {config:?}, {gaps:?}, strips of {W} columns");

        Ok(Self {
            scorer,
            gaps,
            config,
            ranked: Ranked::default(),
            column: DpVector::new(),
            row: DpVector::new(),
        })
    }

    pub fn scorer(&self) -> &Sc {
        &self.scorer
    }

    pub fn gaps(&self) -> &Affine<Sc::Score> {
        &self.gaps
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn align<A1, A2>(&mut self, seq1: &A1, seq2: &A2) -> Result<Outcome<Sc::Score>>
    where
        A1: Alignable<Symbol = u8> + ?Sized,
        A2: Alignable<Symbol = u8> + ?Sized,
    {
        self.ranked.fill(seq1, seq2, self.scorer.ranks())?;
        let (len1, len2) = (self.ranked.seq1.len(), self.ranked.seq2.len());
        ensure_representable::<_, Sc::Score>(self.scorer.bounds(), &self.gaps, len1 + len2)?;

        let (gaps, shadow) = (self.gaps, self.gaps.shadow());
        let end_gaps = *self.config.end_gaps();
        self.column.reset(len1 + 1, |r| {
            let value = gaps.initial(r, *end_gaps.seq1_leading())?;
            Ok(ColumnCell::boundary(value, shadow))
        })?;
        self.row.reset(len2 + 1, |c| {
            let value = gaps.initial(c, *end_gaps.seq2_leading())?;
            Ok(RowCell::boundary(value, shadow))
        })?;
        // H(|seq1|, 0) is overwritten by the sweep
        let corner = self.column[len1];

        let (score, end) = match self.config.method() {
            Method::Global => {
                let mut tracker = Global::new(end_gaps);
                self.sweep(<Sc::Score as num::Bounded>::min_value(), &mut tracker);
                self.row.replace_boundary(RowCell::boundary(corner.current, shadow));
                tracker.max_score(&self.column, &self.row)
            }
            Method::Local => {
                let mut tracker = Local::new();
                self.sweep(<Sc::Score as num::Zero>::zero(), &mut tracker);
                self.row.replace_boundary(RowCell::boundary(corner.current, shadow));
                tracker.max_score(&self.column, &self.row)
            }
        };

        let (column, row) = match *self.config.vectors() {
            true => (
                Some(self.column.iter().map(|x| x.current).collect()),
                Some(self.row.iter().map(|x| x.diagonal).collect()),
            ),
            false => (None, None),
        };
        Ok(Outcome::new(score, end, column, row))
    }

    fn sweep<K: Tracker<Sc::Score>>(&mut self, floor: Sc::Score, tracker: &mut K) {
        let recursion = Recursion {
            seq1: self.ranked.seq1.as_slice(),
            seq2: self.ranked.seq2.as_slice(),
            scorer: &self.scorer,
            gaps: &self.gaps,
            floor,
        };
        recursion.run::<K, W>(&mut self.column, &mut self.row, tracker);
    }
}
