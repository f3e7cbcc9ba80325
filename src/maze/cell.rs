use std::fmt;

/// One of the four sides of a cell.
///
/// `Front` points toward the next row, `Back` toward the previous row,
/// `Right` toward the next column and `Left` toward the previous column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Front,
    Left,
    Back,
}

impl Direction {
    /// Fixed enumeration order used by neighbor lookup and every scan over a cell's sides.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Front,
        Direction::Left,
        Direction::Back,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Front => Direction::Back,
            Direction::Left => Direction::Right,
            Direction::Back => Direction::Front,
        }
    }

    /// Row and column step taken when moving one cell in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Front => (1, 0),
            Direction::Left => (0, -1),
            Direction::Back => (-1, 0),
        }
    }

    /// Yaw, in degrees, of something placed in a cell and facing out through this side.
    pub fn yaw_degrees(self) -> f32 {
        match self {
            Direction::Right => 90.0,
            Direction::Front => 0.0,
            Direction::Left => -90.0,
            Direction::Back => 180.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Front => write!(f, "front"),
            Direction::Left => write!(f, "left"),
            Direction::Back => write!(f, "back"),
        }
    }
}

/// Wall and goal state of a single grid position.
///
/// A `true` wall flag means the side is closed. Cells start fully walled and
/// not a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub wall_right: bool,
    pub wall_front: bool,
    pub wall_left: bool,
    pub wall_back: bool,
    pub is_goal: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

impl Cell {
    pub const WALLED: Cell = Cell {
        wall_right: true,
        wall_front: true,
        wall_left: true,
        wall_back: true,
        is_goal: false,
    };

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.wall_right,
            Direction::Front => self.wall_front,
            Direction::Left => self.wall_left,
            Direction::Back => self.wall_back,
        }
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, closed: bool) {
        match direction {
            Direction::Right => self.wall_right = closed,
            Direction::Front => self.wall_front = closed,
            Direction::Left => self.wall_left = closed,
            Direction::Back => self.wall_back = closed,
        }
    }

    /// Open sides in `Direction::ALL` order.
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| !self.has_wall(direction))
    }

    pub fn open_count(&self) -> usize {
        self.open_directions().count()
    }

    /// The open side of a dead end, or `None` when zero or several sides are open.
    pub fn single_open_direction(&self) -> Option<Direction> {
        let mut open = self.open_directions();
        match (open.next(), open.next()) {
            (Some(direction), None) => Some(direction),
            _ => None,
        }
    }

    /// Direction an object placed in this cell should face.
    ///
    /// The single open side for a dead end. Otherwise the first open side in
    /// `Direction::ALL` order, and `Front` for a cell with no opening at all.
    pub fn facing(&self) -> Direction {
        self.open_directions().next().unwrap_or(Direction::Front)
    }
}
