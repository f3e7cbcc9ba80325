pub mod cell;
mod display;
mod grid;

pub use cell::{Cell, Direction};
pub use grid::{Coord, Grid};
