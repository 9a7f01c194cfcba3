//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod io;
pub mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use io::{load_pattern_from_file, parse_pattern, read_pattern, Pattern};
pub use rules::LifeRule;
