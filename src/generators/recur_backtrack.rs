use rand::{Rng, rngs::StdRng};

use super::{Visited, random_cell, unvisited_neighbors};
use crate::{error::MazeError, maze::Grid};

pub fn recursive_backtrack(grid: &mut Grid, rng: &mut StdRng) -> Result<(), MazeError> {
    // Initialize the starting point
    let start = random_cell(grid, rng);
    tracing::debug!("[backtracker] starting at {:?}", start);

    let mut visited = Visited::new(grid);
    visited.mark(start);

    // The stack holds the current corridor, newest cell on top
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = unvisited_neighbors(grid, &visited, cell);

        if neighbors.is_empty() {
            // Dead end, back up one cell
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid.carve(cell, neighbor)?;
        visited.mark(neighbor);
        // Carve on in that neighbor's direction
        stack.push(neighbor);
    }

    debug_assert!(visited.is_complete());
    tracing::debug!("[backtracker] visited {} cells", visited.count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_recursive_backtrack_line() {
        // In a single row every cell is carved toward its neighbor
        let mut grid = Grid::new(1, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        recursive_backtrack(&mut grid, &mut rng).unwrap();
        for column in 0..5 {
            assert!(!grid[(0, column)].wall_right);
            assert!(!grid[(0, column + 1)].wall_left);
        }
        assert!(grid[(0, 0)].wall_left);
        assert!(grid[(0, 5)].wall_right);
    }

    #[test]
    fn test_recursive_backtrack_opens_every_cell() {
        let mut grid = Grid::new(8, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        recursive_backtrack(&mut grid, &mut rng).unwrap();
        assert!(grid.coords().all(|c| grid[c].open_count() >= 1));
    }
}
