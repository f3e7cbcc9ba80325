use rand::{Rng, SeedableRng, rngs::StdRng};

mod growing_tree;
mod recur_backtrack;
mod recur_div;

pub use growing_tree::{CellSelection, growing_tree};
pub use recur_backtrack::recursive_backtrack;
pub use recur_div::{Division, Orientation, recursive_division};

use crate::{
    config::MazeConfig,
    error::{ConfigError, MazeError},
    goals::{Goal, select_goals},
    maze::{Cell, Coord, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Uniformly random cell of the grid. Draws the row first, then the column.
fn random_cell(grid: &Grid, rng: &mut StdRng) -> Coord {
    (
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.columns()),
    )
}

/// Visited flags for one generation run.
struct Visited {
    cells: Vec<bool>,
    columns: usize,
    count: usize,
}

impl Visited {
    fn new(grid: &Grid) -> Self {
        Visited {
            cells: vec![false; grid.len()],
            columns: grid.columns(),
            count: 0,
        }
    }

    fn contains(&self, coord: Coord) -> bool {
        self.cells[coord.0 * self.columns + coord.1]
    }

    fn mark(&mut self, coord: Coord) {
        let idx = coord.0 * self.columns + coord.1;
        if !self.cells[idx] {
            self.cells[idx] = true;
            self.count += 1;
        }
    }

    fn count(&self) -> usize {
        self.count
    }

    fn is_complete(&self) -> bool {
        self.count == self.cells.len()
    }
}

/// Adjacent cells of `coord` not yet visited, in `Direction::ALL` order.
fn unvisited_neighbors(grid: &Grid, visited: &Visited, coord: Coord) -> Vec<Coord> {
    grid.neighbors(coord)
        .map(|(neighbor, _)| neighbor)
        .filter(|&neighbor| !visited.contains(neighbor))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    RecursiveBacktracker,
    RecursiveTree,
    RandomTree,
    OldestTree,
    RecursiveDivision,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::RecursiveBacktracker,
        Algorithm::RecursiveTree,
        Algorithm::RandomTree,
        Algorithm::OldestTree,
        Algorithm::RecursiveDivision,
    ];

    /// Name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::RecursiveBacktracker => "recursive-backtracker",
            Algorithm::RecursiveTree => "recursive-tree",
            Algorithm::RandomTree => "random-tree",
            Algorithm::OldestTree => "oldest-tree",
            Algorithm::RecursiveDivision => "recursive-division",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::RecursiveBacktracker => write!(f, "Recursive Backtracker (DFS)"),
            Algorithm::RecursiveTree => write!(f, "Growing Tree (newest cell)"),
            Algorithm::RandomTree => write!(f, "Growing Tree (random cell)"),
            Algorithm::OldestTree => write!(f, "Growing Tree (oldest cell)"),
            Algorithm::RecursiveDivision => write!(f, "Recursive Division"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// Owns a grid and the randomness used to carve it with one algorithm.
///
/// The grid starts fully walled. [`MazeGenerator::generate`] runs the
/// algorithm and the goal pass exactly once; afterwards the grid is only read.
pub struct MazeGenerator {
    algorithm: Algorithm,
    grid: Grid,
    rng: StdRng,
    generated: bool,
    goals: Vec<Goal>,
    divisions: Vec<Division>,
}

impl MazeGenerator {
    pub fn new(
        algorithm: Algorithm,
        rows: usize,
        columns: usize,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        let grid = Grid::new(rows, columns)?;
        tracing::debug!(
            "[generator] {} for a {}x{} maze, seed {:?}",
            algorithm,
            rows,
            columns,
            seed
        );
        Ok(MazeGenerator {
            algorithm,
            grid,
            rng: get_rng(seed),
            generated: false,
            goals: Vec::new(),
            divisions: Vec::new(),
        })
    }

    pub fn from_config(config: &MazeConfig) -> Result<Self, MazeError> {
        MazeGenerator::new(config.algorithm, config.rows, config.columns, config.seed)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Carves the maze, then marks its dead ends as goals.
    ///
    /// Fails with [`MazeError::AlreadyGenerated`] on a second call.
    pub fn generate(&mut self) -> Result<&Grid, MazeError> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }

        let rng = &mut self.rng;
        match self.algorithm {
            Algorithm::RecursiveBacktracker => recursive_backtrack(&mut self.grid, rng)?,
            Algorithm::RecursiveTree => growing_tree(&mut self.grid, rng, CellSelection::Newest)?,
            Algorithm::RandomTree => growing_tree(&mut self.grid, rng, CellSelection::Random)?,
            Algorithm::OldestTree => growing_tree(&mut self.grid, rng, CellSelection::Oldest)?,
            Algorithm::RecursiveDivision => {
                self.divisions = recursive_division(&mut self.grid, rng)?;
            }
        }
        self.goals = select_goals(&mut self.grid)?;
        self.generated = true;

        tracing::info!(
            "[generate] {} finished a {}x{} maze with {} goals",
            self.algorithm,
            self.grid.rows(),
            self.grid.columns(),
            self.goals.len()
        );
        Ok(&self.grid)
    }

    /// Copy of the cell at `(row, column)`.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, MazeError> {
        self.grid.cell_at(row, column)
    }

    /// Goal cells in row-major discovery order. Empty before generation.
    pub fn goals(&self) -> Vec<Goal> {
        self.goals.clone()
    }

    /// Walls added by recursive division, in the order they were built.
    /// Empty for every other algorithm.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Build a generator and run it in one step.
pub fn generate_maze(
    algorithm: Algorithm,
    rows: usize,
    columns: usize,
    seed: Option<u64>,
) -> Result<MazeGenerator, MazeError> {
    let mut generator = MazeGenerator::new(algorithm, rows, columns, seed)?;
    generator.generate()?;
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::maze::Direction;

    const DIMENSIONS: [(usize, usize); 8] = [
        (1, 1),
        (1, 7),
        (6, 1),
        (2, 2),
        (3, 8),
        (5, 5),
        (9, 4),
        (16, 16),
    ];
    const SEEDS: [u64; 3] = [0, 7, 12345];

    /// Number of cells reachable from (0, 0) through open walls.
    fn reachable_count(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.len()];
        let mut queue = VecDeque::from([(0, 0)]);
        seen[0] = true;
        let mut count = 0;
        while let Some(coord) = queue.pop_front() {
            count += 1;
            for (neighbor, direction) in grid.neighbors(coord) {
                let idx = neighbor.0 * grid.columns() + neighbor.1;
                if !grid[coord].has_wall(direction) && !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        count
    }

    fn assert_symmetric(grid: &Grid) {
        for coord in grid.coords() {
            for (neighbor, direction) in grid.neighbors(coord) {
                assert_eq!(
                    grid[coord].has_wall(direction),
                    grid[neighbor].has_wall(direction.opposite()),
                    "wall mismatch between {:?} and {:?}",
                    coord,
                    neighbor
                );
            }
        }
    }

    fn assert_closed_boundary(grid: &Grid) {
        for coord in grid.coords() {
            for direction in Direction::ALL {
                if grid.step(coord, direction).is_none() {
                    assert!(grid[coord].has_wall(direction));
                }
            }
        }
    }

    #[test]
    fn test_algorithm_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "Oldest_Tree".parse::<Algorithm>(),
            Ok(Algorithm::OldestTree)
        );
        assert!(matches!(
            "prim".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_invalid_dimensions() {
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                MazeGenerator::new(algorithm, 0, 5, Some(1)),
                Err(MazeError::InvalidDimensions { rows: 0, columns: 5 })
            ));
            assert!(matches!(
                MazeGenerator::new(algorithm, 5, 0, None),
                Err(MazeError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_fully_connected() {
        for algorithm in Algorithm::ALL {
            for (rows, columns) in DIMENSIONS {
                for seed in SEEDS {
                    let generator = generate_maze(algorithm, rows, columns, Some(seed)).unwrap();
                    assert_eq!(
                        reachable_count(generator.grid()),
                        rows * columns,
                        "{} {}x{} seed {} is not connected",
                        algorithm,
                        rows,
                        columns,
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn test_wall_symmetry_and_boundary() {
        for algorithm in Algorithm::ALL {
            for (rows, columns) in DIMENSIONS {
                let generator = generate_maze(algorithm, rows, columns, Some(99)).unwrap();
                assert_symmetric(generator.grid());
                assert_closed_boundary(generator.grid());
            }
        }
    }

    #[test]
    fn test_every_algorithm_produces_a_spanning_tree() {
        // A perfect maze over n cells has exactly n - 1 passages
        for algorithm in Algorithm::ALL {
            let generator = generate_maze(algorithm, 7, 6, Some(3)).unwrap();
            let grid = generator.grid();
            let open_sides = grid.coords().map(|c| grid[c].open_count()).sum::<usize>();
            assert_eq!(open_sides / 2, grid.len() - 1, "{}", algorithm);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        for algorithm in Algorithm::ALL {
            let a = generate_maze(algorithm, 12, 9, Some(12345)).unwrap();
            let b = generate_maze(algorithm, 12, 9, Some(12345)).unwrap();
            assert_eq!(a.grid(), b.grid(), "{} is not reproducible", algorithm);
            assert_eq!(a.goals(), b.goals());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        for algorithm in Algorithm::ALL {
            let a = generate_maze(algorithm, 16, 16, Some(1)).unwrap();
            let b = generate_maze(algorithm, 16, 16, Some(2)).unwrap();
            assert_ne!(a.grid(), b.grid(), "{}", algorithm);
        }
    }

    #[test]
    fn test_tree_variants_are_distinguishable() {
        let kinds = [
            Algorithm::RecursiveTree,
            Algorithm::RandomTree,
            Algorithm::OldestTree,
        ];
        let grids = kinds
            .iter()
            .map(|&algorithm| generate_maze(algorithm, 5, 5, Some(12345)).unwrap().into_grid())
            .collect::<Vec<_>>();
        for i in 0..grids.len() {
            for j in i + 1..grids.len() {
                assert_ne!(grids[i], grids[j], "{} vs {}", kinds[i], kinds[j]);
            }
        }
    }

    #[test]
    fn test_recursive_tree_matches_backtracker() {
        // Newest-cell selection draws in the same order as the backtracker's stack
        for (rows, columns) in DIMENSIONS {
            let tree = generate_maze(Algorithm::RecursiveTree, rows, columns, Some(4)).unwrap();
            let dfs =
                generate_maze(Algorithm::RecursiveBacktracker, rows, columns, Some(4)).unwrap();
            assert_eq!(tree.grid(), dfs.grid());
        }
    }

    #[test]
    fn test_single_cell_stays_closed() {
        for algorithm in Algorithm::ALL {
            let generator = generate_maze(algorithm, 1, 1, Some(12345)).unwrap();
            assert_eq!(generator.cell_at(0, 0), Ok(Cell::WALLED));
            assert!(generator.goals().is_empty());
            assert!(generator.divisions().is_empty());
        }
    }

    #[test]
    fn test_goals_match_dead_ends() {
        for algorithm in Algorithm::ALL {
            let generator = generate_maze(algorithm, 5, 5, Some(12345)).unwrap();
            let grid = generator.grid();
            let dead_ends = grid
                .coords()
                .filter(|&c| grid[c].open_count() == 1)
                .collect::<Vec<_>>();
            let goals = generator.goals();
            assert_eq!(goals.iter().map(Goal::coord).collect::<Vec<_>>(), dead_ends);
            for goal in &goals {
                let cell = generator.cell_at(goal.row, goal.column).unwrap();
                assert!(cell.is_goal);
                assert!(!cell.has_wall(goal.open_direction));
                assert_eq!(cell.facing(), goal.open_direction);
            }
            let goal_flags = grid.coords().filter(|&c| grid[c].is_goal).count();
            assert_eq!(goal_flags, goals.len());
        }
    }

    #[test]
    fn test_generate_twice_fails() {
        for algorithm in Algorithm::ALL {
            let mut generator = MazeGenerator::new(algorithm, 4, 4, Some(5)).unwrap();
            assert!(!generator.is_generated());
            let first = generator.generate().unwrap().clone();
            assert!(generator.is_generated());
            assert_eq!(generator.generate(), Err(MazeError::AlreadyGenerated));
            // The failed call leaves the maze untouched
            assert_eq!(generator.grid(), &first);
        }
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        for algorithm in Algorithm::ALL {
            let generator = generate_maze(algorithm, 3, 4, Some(8)).unwrap();
            assert!(matches!(
                generator.cell_at(0usize.wrapping_sub(1), 0),
                Err(MazeError::OutOfBounds { .. })
            ));
            assert!(matches!(
                generator.cell_at(3, 0),
                Err(MazeError::OutOfBounds { row: 3, .. })
            ));
            assert!(matches!(
                generator.cell_at(0, 4),
                Err(MazeError::OutOfBounds { .. })
            ));
            assert!(generator.cell_at(2, 3).is_ok());
        }
    }

    #[test]
    fn test_cell_at_before_generate_is_walled() {
        let generator = MazeGenerator::new(Algorithm::OldestTree, 2, 3, Some(1)).unwrap();
        assert_eq!(generator.cell_at(1, 2), Ok(Cell::WALLED));
        assert!(generator.goals().is_empty());
    }

    #[test]
    fn test_goals_snapshot_is_not_live() {
        let mut generator = MazeGenerator::new(Algorithm::RandomTree, 4, 4, Some(2)).unwrap();
        let before = generator.goals();
        generator.generate().unwrap();
        assert!(before.is_empty());
        assert!(!generator.goals().is_empty());
    }

    #[test]
    fn test_unseeded_generation_is_valid() {
        for algorithm in Algorithm::ALL {
            let generator = generate_maze(algorithm, 10, 10, None).unwrap();
            assert_eq!(reachable_count(generator.grid()), 100);
            assert_symmetric(generator.grid());
        }
    }
}
