use std::collections::VecDeque;

use rand::{Rng, rngs::StdRng};

use super::{Visited, random_cell, unvisited_neighbors};
use crate::{error::MazeError, maze::Grid};

/// Which active cell the growing tree extends next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSelection {
    /// Most recently added: the active list behaves as a stack.
    Newest,
    /// Uniformly random over the whole active list.
    Random,
    /// Earliest added that is still active: the active list behaves as a queue.
    Oldest,
}

impl CellSelection {
    fn pick(self, len: usize, rng: &mut StdRng) -> usize {
        match self {
            CellSelection::Newest => len - 1,
            CellSelection::Random => rng.random_range(0..len),
            CellSelection::Oldest => 0,
        }
    }
}

/// Growing-tree maze generation.
///
/// Starts from a random cell and keeps a list of active cells. Each step takes
/// an active cell according to `selection` and carves into one of its
/// unvisited neighbors, which then becomes active itself. An active cell with
/// no unvisited neighbor is dropped. Every cell is visited once the list is empty.
pub fn growing_tree(
    grid: &mut Grid,
    rng: &mut StdRng,
    selection: CellSelection,
) -> Result<(), MazeError> {
    let start = random_cell(grid, rng);
    tracing::debug!("[growing tree] {:?} selection starting at {:?}", selection, start);

    let mut visited = Visited::new(grid);
    visited.mark(start);

    // Insertion order is kept, so the front is always the oldest active cell
    let mut active = VecDeque::from([start]);

    while !active.is_empty() {
        let idx = selection.pick(active.len(), rng);
        let cell = active[idx];

        let neighbors = unvisited_neighbors(grid, &visited, cell);
        if neighbors.is_empty() {
            active.remove(idx);
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid.carve(cell, neighbor)?;
        visited.mark(neighbor);
        active.push_back(neighbor);
    }

    debug_assert!(visited.is_complete());
    tracing::debug!("[growing tree] visited {} cells", visited.count());
    Ok(())
}
