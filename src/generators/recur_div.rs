use rand::{Rng, rngs::StdRng};

use crate::{error::MazeError, maze::Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wall runs along a row boundary, separating row `after` from row `after + 1`.
    Horizontal,
    /// Wall runs along a column boundary, separating column `after` from column `after + 1`.
    Vertical,
}

/// One wall line added by recursive division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub orientation: Orientation,
    /// Row (horizontal) or column (vertical) index the wall is placed after.
    pub after: usize,
    /// First column (horizontal) or row (vertical) covered by the line.
    pub start: usize,
    /// Number of cells the line runs along.
    pub span: usize,
    /// Column (horizontal) or row (vertical) left open as the passage.
    pub gap: usize,
}

impl Division {
    /// Wall segments the line adds: its span minus the single gap.
    pub fn wall_segments(&self) -> usize {
        self.span - 1
    }
}

/// Rectangular part of the grid still to be divided.
#[derive(Debug, Clone, Copy)]
struct Region {
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
}

/// Recursive division maze generation.
///
/// Opens every interior wall, then splits the grid with wall lines that each
/// keep a single one-cell passage, until no region is at least 2x2.
/// Returns the lines in the order they were built.
pub fn recursive_division(grid: &mut Grid, rng: &mut StdRng) -> Result<Vec<Division>, MazeError> {
    // Clear all walls in the maze, except the boundary walls
    grid.clear_interior_walls();

    let mut divisions = Vec::new();
    // Regions are taken depth first, back/left half before front/right half
    let mut regions = vec![Region {
        row: 0,
        column: 0,
        rows: grid.rows(),
        columns: grid.columns(),
    }];

    while let Some(region) = regions.pop() {
        if region.rows < 2 || region.columns < 2 {
            continue;
        }

        let orientation = match region.columns.cmp(&region.rows) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        match orientation {
            Orientation::Horizontal => {
                // Randomly choose the row boundary for the wall
                let diff = rng.random_range(0..region.rows - 1);
                let after = region.row + diff;

                // Randomly choose a position for the hole in the wall
                let gap = region.column + rng.random_range(0..region.columns);

                for column in region.column..region.column + region.columns {
                    if column != gap {
                        grid.build_wall((after, column), (after + 1, column))?;
                    }
                }
                divisions.push(Division {
                    orientation,
                    after,
                    start: region.column,
                    span: region.columns,
                    gap,
                });

                let back_rows = diff + 1;
                regions.push(Region {
                    row: after + 1,
                    rows: region.rows - back_rows,
                    ..region
                });
                regions.push(Region {
                    rows: back_rows,
                    ..region
                });
            }
            Orientation::Vertical => {
                // Choose the column boundary for the wall
                let diff = rng.random_range(0..region.columns - 1);
                let after = region.column + diff;

                let gap = region.row + rng.random_range(0..region.rows);

                for row in region.row..region.row + region.rows {
                    if row != gap {
                        grid.build_wall((row, after), (row, after + 1))?;
                    }
                }
                divisions.push(Division {
                    orientation,
                    after,
                    start: region.row,
                    span: region.rows,
                    gap,
                });

                let left_columns = diff + 1;
                regions.push(Region {
                    column: after + 1,
                    columns: region.columns - left_columns,
                    ..region
                });
                regions.push(Region {
                    columns: left_columns,
                    ..region
                });
            }
        }
    }

    tracing::debug!("[division] built {} wall lines", divisions.len());
    Ok(divisions)
}
