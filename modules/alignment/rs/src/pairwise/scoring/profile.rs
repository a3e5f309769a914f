use std::any::type_name;

use eyre::{eyre, Result};

use super::symbols::{Equality, Matrix, Scorer, Triangular};
use super::Score;
use crate::pairwise::dp::DpScore;
use crate::simd::Lanes;

/// Hot-loop view of a score model.
///
/// A profile caches everything that depends on the fixed symbol (or lane of symbols) so that
/// scoring it against the opposing symbols inside a strip is a lookup.
pub trait Profiled<T, R: Copy> {
    type Profile: Default;

    fn load(&self, fixed: R, profile: &mut Self::Profile);

    /// `diagonal + substitution(fixed, other)`
    fn score(&self, profile: &Self::Profile, diagonal: T, other: R) -> T;
}

impl<S: Score + DpScore> Profiled<S, u8> for Equality<S> {
    type Profile = u8;

    #[inline(always)]
    fn load(&self, fixed: u8, profile: &mut Self::Profile) {
        *profile = fixed;
    }

    #[inline(always)]
    fn score(&self, profile: &Self::Profile, diagonal: S, other: u8) -> S {
        DpScore::add(diagonal, self.substitution(*profile, other))
    }
}

impl<S: Score + DpScore> Profiled<S, u8> for Matrix<S> {
    // Offset of the fixed symbol's row
    type Profile = usize;

    #[inline(always)]
    fn load(&self, fixed: u8, profile: &mut Self::Profile) {
        *profile = fixed as usize * self.size();
    }

    #[inline(always)]
    fn score(&self, profile: &Self::Profile, diagonal: S, other: u8) -> S {
        DpScore::add(diagonal, self.table()[*profile + other as usize])
    }
}

impl<S: Score + DpScore> Profiled<S, u8> for Triangular<S> {
    type Profile = Vec<S>;

    fn load(&self, fixed: u8, profile: &mut Self::Profile) {
        profile.clear();
        profile.extend((0..self.size()).map(|other| self.substitution(fixed, other as u8)));
    }

    #[inline(always)]
    fn score(&self, profile: &Self::Profile, diagonal: S, other: u8) -> S {
        DpScore::add(diagonal, profile[other as usize])
    }
}

/// Swap the roles of the two sequences.
pub trait Transpose {
    fn transpose(&self) -> Self;
}

/// Unitary model with both scores broadcast to every lane.
#[derive(Clone, Copy, Debug)]
pub struct LaneEquality<V> {
    equal: V,
    different: V,
}

impl<V: Lanes> Profiled<V, V> for LaneEquality<V> {
    type Profile = V;

    #[inline(always)]
    fn load(&self, fixed: V, profile: &mut Self::Profile) {
        *profile = fixed;
    }

    #[inline(always)]
    fn score(&self, profile: &Self::Profile, diagonal: V, other: V) -> V {
        let scores = profile.cmp_eq(other).blend(self.equal, self.different);
        diagonal.add(scores)
    }
}

impl<V: Copy> Transpose for LaneEquality<V> {
    fn transpose(&self) -> Self {
        *self
    }
}

/// Full table in the lane scalar type, gathered lane by lane.
#[derive(Clone, Debug)]
pub struct LaneMatrix<V: Lanes> {
    size: usize,
    table: Vec<V::Scalar>,
}

impl<V: Lanes> LaneMatrix<V> {
    fn new<Sc: Scorer>(scorer: &Sc, size: usize) -> Result<Self> {
        let mut table = Vec::with_capacity(size * size);
        for rank1 in 0..size {
            for rank2 in 0..size {
                table.push(cast::<V, _>(scorer.substitution(rank1 as u8, rank2 as u8))?);
            }
        }
        Ok(Self { size, table })
    }
}

impl<V: Lanes> Profiled<V, V> for LaneMatrix<V> {
    // One table row per lane
    type Profile = Vec<V::Scalar>;

    fn load(&self, fixed: V, profile: &mut Self::Profile) {
        profile.clear();
        for rank in fixed.to_array().as_ref() {
            let start = V::to_rank(*rank) * self.size;
            profile.extend_from_slice(&self.table[start..start + self.size]);
        }
    }

    #[inline(always)]
    fn score(&self, profile: &Self::Profile, diagonal: V, other: V) -> V {
        let mut scores = V::Array::default();
        let other = other.to_array();
        for (lane, (score, rank)) in scores
            .as_mut()
            .iter_mut()
            .zip(other.as_ref())
            .enumerate()
        {
            *score = profile[lane * self.size + V::to_rank(*rank)];
        }
        diagonal.add(V::from_array(scores))
    }
}

impl<V: Lanes> Transpose for LaneMatrix<V> {
    fn transpose(&self) -> Self {
        let mut table = Vec::with_capacity(self.table.len());
        for rank1 in 0..self.size {
            for rank2 in 0..self.size {
                table.push(self.table[rank2 * self.size + rank1]);
            }
        }
        Self {
            size: self.size,
            table,
        }
    }
}

/// Score models that can run over lanes of `V`.
pub trait Bulk<V: Lanes>: Scorer {
    type Lanes: Profiled<V, V> + Transpose + Send + Sync;

    fn lanes(&self) -> Result<Self::Lanes>;
}

impl<S: Score, V: Lanes> Bulk<V> for Equality<S> {
    type Lanes = LaneEquality<V>;

    fn lanes(&self) -> Result<Self::Lanes> {
        Ok(LaneEquality {
            equal: V::splat(cast::<V, _>(*self.equal())?),
            different: V::splat(cast::<V, _>(*self.different())?),
        })
    }
}

impl<S: Score, V: Lanes> Bulk<V> for Matrix<S> {
    type Lanes = LaneMatrix<V>;

    fn lanes(&self) -> Result<Self::Lanes> {
        LaneMatrix::new(self, self.size())
    }
}

impl<S: Score, V: Lanes> Bulk<V> for Triangular<S> {
    type Lanes = LaneMatrix<V>;

    fn lanes(&self) -> Result<Self::Lanes> {
        LaneMatrix::new(self, self.size())
    }
}

/// Convert a scalar score into the lane scalar type.
pub fn cast<V: Lanes, S: Score>(value: S) -> Result<V::Scalar> {
    <V::Scalar as num::NumCast>::from(value).ok_or_else(|| {
        eyre!(
            "Score {value:?} is not representable in {} lanes",
            type_name::<V::Scalar>()
        )
    })
}
