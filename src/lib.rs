pub mod config;
pub mod error;
pub mod generators;
pub mod goals;
pub mod maze;

pub use config::MazeConfig;
pub use error::{ConfigError, MazeError};
pub use generators::{Algorithm, MazeGenerator, generate_maze};
pub use goals::Goal;
pub use maze::{Cell, Coord, Direction, Grid};
