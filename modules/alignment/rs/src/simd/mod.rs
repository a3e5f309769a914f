//! Thin layer over the `wide` lane types used by the bulk and saturated engines.

use std::fmt::Debug;
use std::ops::BitAnd;

use wide::{i16x16, i32x8, i8x16, CmpEq};

use crate::pairwise::dp::DpScore;
use crate::Score;

/// A vector of independent score lanes, one alignment per lane.
pub trait Lanes: DpScore + BitAnd<Output = Self> + Send + Sync + 'static {
    type Scalar: Score;
    type Array: AsRef<[Self::Scalar]> + AsMut<[Self::Scalar]> + Copy + Default + Debug;

    const LANES: usize;

    fn splat(value: Self::Scalar) -> Self;
    fn from_array(array: Self::Array) -> Self;
    fn to_array(self) -> Self::Array;

    /// Lane-wise equality, all bits set in matching lanes.
    fn cmp_eq(self, other: Self) -> Self;

    /// Lane-wise select: `on_true` where the mask (self) is set, `on_false` elsewhere.
    fn blend(self, on_true: Self, on_false: Self) -> Self;

    /// Store a symbol rank inside a lane. Ranks are compared bitwise, so the 8-bit lanes
    /// simply reinterpret them.
    fn from_rank(rank: u8) -> Self::Scalar;
    fn to_rank(lane: Self::Scalar) -> usize;

    /// Mask with all bits set in the selected lanes.
    fn mask(selected: impl Fn(usize) -> bool) -> Self {
        let mut array = Self::Array::default();
        for (lane, value) in array.as_mut().iter_mut().enumerate() {
            if selected(lane) {
                *value = !<Self::Scalar as num::Zero>::zero();
            }
        }
        Self::from_array(array)
    }
}

macro_rules! impl_lanes {
    ($ty:ty, $scalar:ty, $lanes:expr, add: $add:path, sub: $sub:path) => {
        impl DpScore for $ty {
            #[inline(always)]
            fn add(self, other: Self) -> Self {
                $add(self, other)
            }

            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                $sub(self, other)
            }

            #[inline(always)]
            fn maximum(self, other: Self) -> Self {
                self.max(other)
            }
        }

        impl Lanes for $ty {
            type Scalar = $scalar;
            type Array = [$scalar; $lanes];

            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(value: Self::Scalar) -> Self {
                <$ty>::splat(value)
            }

            #[inline(always)]
            fn from_array(array: Self::Array) -> Self {
                <$ty>::new(array)
            }

            #[inline(always)]
            fn to_array(self) -> Self::Array {
                <$ty>::to_array(self)
            }

            #[inline(always)]
            fn cmp_eq(self, other: Self) -> Self {
                CmpEq::cmp_eq(self, other)
            }

            #[inline(always)]
            fn blend(self, on_true: Self, on_false: Self) -> Self {
                <$ty>::blend(self, on_true, on_false)
            }

            #[inline(always)]
            fn from_rank(rank: u8) -> Self::Scalar {
                rank as $scalar
            }

            #[inline(always)]
            fn to_rank(lane: Self::Scalar) -> usize {
                (lane as u8) as usize
            }
        }
    };
}

impl_lanes!(i32x8, i32, 8, add: std::ops::Add::add, sub: std::ops::Sub::sub);
impl_lanes!(i16x16, i16, 16, add: std::ops::Add::add, sub: std::ops::Sub::sub);
impl_lanes!(i8x16, i8, 16, add: i8x16::saturating_add, sub: i8x16::saturating_sub);
