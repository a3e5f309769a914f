pub use crate::Score;

pub mod gaps;
pub mod matrices;
pub mod profile;
pub mod symbols;
