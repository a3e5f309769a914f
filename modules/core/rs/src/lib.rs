pub mod alignment;
pub mod num;
pub mod rank;
