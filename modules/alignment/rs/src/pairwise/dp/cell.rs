use std::fmt::Debug;

/// Values stored in DP cells: scalar scores or whole lane vectors.
///
/// Wide types use plain (wrapping) arithmetic, 8-bit lanes saturate.
pub trait DpScore: Copy + Default + Debug {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn maximum(self, other: Self) -> Self;
}

macro_rules! impl_scalar_dp_score {
    ($($ty:ty),*) => {
        $(
            impl DpScore for $ty {
                #[inline(always)]
                fn add(self, other: Self) -> Self {
                    self + other
                }

                #[inline(always)]
                fn sub(self, other: Self) -> Self {
                    self - other
                }

                #[inline(always)]
                fn maximum(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )*
    };
}

impl_scalar_dp_score!(i16, i32, i64);

/// Column vector cell: `H(r, c)` of the last processed column and the horizontal gap leaving it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ColumnCell<T> {
    pub current: T,
    pub left: T,
}

/// Row vector cell: `H(r, c)` of the last processed row (the diagonal of the next one) and the
/// vertical gap leaving it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RowCell<T> {
    pub diagonal: T,
    pub up: T,
}

impl<T: DpScore> ColumnCell<T> {
    /// Boundary cell holding `value` with a gap opened right after it.
    #[inline(always)]
    pub fn boundary(value: T, shadow: T) -> Self {
        Self {
            current: value,
            left: value.add(shadow),
        }
    }
}

impl<T: DpScore> RowCell<T> {
    #[inline(always)]
    pub fn boundary(value: T, shadow: T) -> Self {
        Self {
            diagonal: value,
            up: value.add(shadow),
        }
    }
}
