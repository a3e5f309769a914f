pub use cell::{ColumnCell, DpScore, RowCell};
pub use grouped::Groups;
pub use ranked::{Ranked, RankedBatch};
pub use saturated::Saturated;
pub use vector::DpVector;

mod cell;
pub mod chunked;
mod grouped;
pub mod ranked;
pub mod saturated;
mod vector;
