use std::fmt::Debug;

use alignkit_core_rs::num::PrimSInt;

pub mod pairwise;
pub mod simd;

/// Scalar alignment scores are signed primitive integers
pub trait Score: PrimSInt + Debug + Default + Send + Sync + 'static {}

impl<T: PrimSInt + Debug + Default + Send + Sync + 'static> Score for T {}
