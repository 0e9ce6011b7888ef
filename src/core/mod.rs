pub mod board;
pub mod cell_set;
pub mod lines;
pub mod types;

pub use board::Board;
pub use cell_set::{CellSet, CELL_COUNT};
pub use lines::WINNING_LINES;
pub use types::{PlayerId, Position};
