pub mod bools;
pub mod fixed;

pub use bools::{BoolArray, BoolCells};
pub use fixed::{Cells, CellsMut, FixedArray};
