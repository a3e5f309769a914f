use alignkit_core_rs::alignment::Alignable;
use eyre::Result;

pub use config::{Config, EndGap, EndGaps, Method};
pub use engine::{Aligner, BulkAligner, SaturatedAligner};
pub use outcome::Outcome;

use dp::DpScore;
use scoring::gaps::Affine;
use scoring::profile::Profiled;
use scoring::symbols::Scorer;

pub mod config;
pub mod dp;
pub mod engine;
pub mod outcome;
pub mod scoring;
pub mod tracker;

/// Align a single pair with a throwaway scalar [`Aligner`].
pub fn align<A1, A2, Sc>(
    seq1: &A1,
    seq2: &A2,
    scorer: Sc,
    gaps: Affine<Sc::Score>,
    config: Config,
) -> Result<Outcome<Sc::Score>>
where
    A1: Alignable<Symbol = u8> + ?Sized,
    A2: Alignable<Symbol = u8> + ?Sized,
    Sc: Scorer + Profiled<<Sc as Scorer>::Score, u8>,
    Sc::Score: DpScore,
{
    Aligner::<Sc>::new(scorer, gaps, config)?.align(seq1, seq2)
}
