use crate::error::MazeError;

use super::cell::{Cell, Direction};

/// (row, column) position of a cell, 0-indexed.
pub type Coord = (usize, usize);

/// Fixed-size, row-major grid of cells.
///
/// Wall flags are only changed through [`Grid::carve`] and [`Grid::build_wall`],
/// which update both sides of the shared edge together, so adjacent cells never
/// disagree about the wall between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Creates a grid with every wall of every cell closed.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows < 1 || columns < 1 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        let len = rows
            .checked_mul(columns)
            .ok_or(MazeError::InvalidDimensions { rows, columns })?;
        Ok(Grid {
            data: vec![Cell::WALLED; len].into_boxed_slice(),
            rows,
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a grid holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.columns
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.columns + coord.1
    }

    fn check_bounds(&self, coord: Coord) -> Result<usize, MazeError> {
        if self.is_in_bounds(coord) {
            Ok(self.ravel_index(coord))
        } else {
            Err(MazeError::OutOfBounds {
                row: coord.0,
                column: coord.1,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Returns a copy of the cell at `(row, column)`.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, MazeError> {
        let idx = self.check_bounds((row, column))?;
        Ok(self.data[idx])
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
    }

    /// Cell one step from `coord` in `direction`, if it exists.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let row = coord.0.checked_add_signed(dr)?;
        let column = coord.1.checked_add_signed(dc)?;
        self.is_in_bounds((row, column)).then_some((row, column))
    }

    /// Adjacent cells of `coord` with the direction leading to each, in
    /// `Direction::ALL` order. An out-of-bounds `coord` has no neighbors.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |direction| self.step(coord, direction).map(|c| (c, direction)))
    }

    /// Direction leading from `from` to the adjacent cell `to`.
    pub fn direction_between(&self, from: Coord, to: Coord) -> Result<Direction, MazeError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(from, direction) == Some(to))
            .ok_or(MazeError::NotAdjacent { from, to })
    }

    fn set_edge(&mut self, a: Coord, b: Coord, closed: bool) -> Result<Direction, MazeError> {
        let direction = self.direction_between(a, b)?;
        let (ia, ib) = (self.ravel_index(a), self.ravel_index(b));
        self.data[ia].set_wall(direction, closed);
        self.data[ib].set_wall(direction.opposite(), closed);
        Ok(direction)
    }

    /// Opens the passage between two adjacent cells on both sides.
    ///
    /// Returns the direction from `a` to `b`.
    pub fn carve(&mut self, a: Coord, b: Coord) -> Result<Direction, MazeError> {
        self.set_edge(a, b, false)
    }

    /// Closes the wall between two adjacent cells on both sides.
    pub fn build_wall(&mut self, a: Coord, b: Coord) -> Result<Direction, MazeError> {
        self.set_edge(a, b, true)
    }

    /// Opens every wall shared by two cells. The outer boundary stays closed.
    pub fn clear_interior_walls(&mut self) {
        let rows = self.rows;
        let columns = self.columns;
        self.data.iter_mut().enumerate().for_each(|(idx, cell)| {
            let (row, column) = (idx / columns, idx % columns);
            cell.wall_back = row == 0;
            cell.wall_front = row + 1 == rows;
            cell.wall_left = column == 0;
            cell.wall_right = column + 1 == columns;
        });
    }

    pub(crate) fn set_goal(&mut self, coord: Coord, is_goal: bool) -> Result<(), MazeError> {
        let idx = self.check_bounds(coord)?;
        self.data[idx].is_goal = is_goal;
        Ok(())
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "cell {:?} is out of bounds for a {}x{} grid",
            index,
            self.rows,
            self.columns
        );
        &self.data[self.ravel_index(index)]
    }
}
