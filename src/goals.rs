//! Goal selection over a finished maze.
//!
//! Goals are the dead ends of the maze: cells with exactly one open side.
//! The pass looks only at wall state, so it behaves the same for every
//! algorithm.

use crate::error::MazeError;
use crate::maze::{Coord, Direction, Grid};

/// A goal cell and the side it opens through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub row: usize,
    pub column: usize,
    pub open_direction: Direction,
}

impl Goal {
    pub fn coord(&self) -> Coord {
        (self.row, self.column)
    }
}

/// Marks every dead end of `grid` as a goal and returns them in row-major order.
///
/// A grid without dead ends (a single closed cell, for instance) yields no goals.
pub fn select_goals(grid: &mut Grid) -> Result<Vec<Goal>, MazeError> {
    let goals = grid
        .coords()
        .filter_map(|coord| {
            grid[coord]
                .single_open_direction()
                .map(|open_direction| Goal {
                    row: coord.0,
                    column: coord.1,
                    open_direction,
                })
        })
        .collect::<Vec<_>>();

    for goal in &goals {
        grid.set_goal(goal.coord(), true)?;
    }
    tracing::debug!("[goals] selected {} dead ends as goals", goals.len());
    Ok(goals)
}
