use eyre::{ensure, eyre, Result};

use crate::pairwise::scoring::gaps::Affine;
use crate::Score;

pub use bulk::BulkAligner;
pub use recursion::Recursion;
pub use saturated::{block_size, SaturatedAligner};
pub use scalar::Aligner;

mod bulk;
mod recursion;
mod saturated;
mod scalar;

/// Every DP value, including gap scores one opening away from a cell, lies within
/// `(steps + 2) * max(|s_min|, |s_max|, |open| + |extend|)` of zero, where `steps` is
/// `|seq1| + |seq2|`. Fails if that range doesn't fit into `T`.
fn ensure_representable<S: Score, T: Score>(
    bounds: (S, S),
    gaps: &Affine<S>,
    steps: usize,
) -> Result<()> {
    let wide = |x: S| {
        num::ToPrimitive::to_i128(&x).ok_or_else(|| eyre!("Score {x:?} doesn't fit into i128"))
    };
    let (smin, smax) = (wide(bounds.0)?, wide(bounds.1)?);
    let gap = wide(*gaps.open())?.abs() + wide(*gaps.extend())?.abs();
    let step = smin.abs().max(smax.abs()).max(gap);

    let limit = (steps as i128 + 2).saturating_mul(step);
    let max = num::ToPrimitive::to_i128(&<T as num::Bounded>::max_value()).unwrap_or(i128::MAX);
    ensure!(
        limit < max,
        "Alignment scores of sequences with {steps} symbols in total may reach {limit}, \
         which exceeds the score type (max {max}); substitution bounds {bounds:?}, {gaps:?}"
    );
    Ok(())
}
