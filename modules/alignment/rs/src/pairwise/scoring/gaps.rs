use derive_getters::Getters;
use eyre::{ensure, eyre, Result};

use crate::pairwise::config::EndGap;
use crate::pairwise::dp::DpScore;
use crate::pairwise::scoring::Score;
use crate::simd::Lanes;

/// Affine gap costs: a gap of length `k` costs `open + k * extend`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Getters)]
pub struct Affine<T> {
    open: T,
    extend: T,
}

impl<S: Score> Affine<S> {
    pub fn new(open: S, extend: S) -> Result<Self> {
        ensure!(
            open <= S::zero() && extend <= S::zero(),
            "Gap scores must be non-positive, got open={open:?}, extend={extend:?}"
        );
        Ok(Self { open, extend })
    }

    /// Cost of the gap run from the DP origin to the boundary cell `index`.
    pub fn initial(&self, index: usize, end: EndGap) -> Result<S> {
        if index == 0 || end == EndGap::Free {
            return Ok(S::zero());
        }
        <S as num::NumCast>::from(index)
            .and_then(|index| self.extend.checked_mul(&index))
            .and_then(|cost| cost.checked_add(&self.open))
            .ok_or_else(|| eyre!("Gap of length {index} is not representable in the score type"))
    }

    /// Score added to a cell value when a gap is opened right after it.
    pub fn shadow(&self) -> S {
        self.open + self.extend
    }

    /// Same model with every lane holding the scalar costs.
    pub fn lanes<V: Lanes>(&self) -> Result<Affine<V>> {
        Ok(Affine {
            open: V::splat(super::profile::cast::<V, S>(self.open)?),
            extend: V::splat(super::profile::cast::<V, S>(self.extend)?),
        })
    }
}

impl<T: DpScore> Affine<T> {
    /// Gotoh update of both gap states after the cell score `best` is known.
    #[inline(always)]
    pub fn update(&self, best: T, horizontal: &mut T, vertical: &mut T) {
        let open = best.add(self.open);
        *horizontal = horizontal.maximum(open).add(self.extend);
        *vertical = vertical.maximum(open).add(self.extend);
    }
}
