use std::fmt;
use std::io::Write;

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use super::grid::Grid;

/// Piece of a text plan line. Goal markers are kept apart so a terminal
/// renderer can style them.
enum Piece {
    Text(&'static str),
    Goal,
}

impl Grid {
    /// Plan lines from the front-most row (top) to row 0 (bottom).
    fn plan(&self) -> Vec<Vec<Piece>> {
        let mut lines = Vec::with_capacity(self.rows() * 2 + 1);
        for row in (0..self.rows()).rev() {
            let mut top = Vec::with_capacity(self.columns() * 2 + 1);
            let mut middle = Vec::with_capacity(self.columns() * 3 + 1);
            for column in 0..self.columns() {
                let cell = &self[(row, column)];
                top.push(Piece::Text("+"));
                top.push(Piece::Text(if cell.wall_front { "---" } else { "   " }));
                middle.push(Piece::Text(if cell.wall_left { "|" } else { " " }));
                if cell.is_goal {
                    middle.push(Piece::Text(" "));
                    middle.push(Piece::Goal);
                    middle.push(Piece::Text(" "));
                } else {
                    middle.push(Piece::Text("   "));
                }
            }
            top.push(Piece::Text("+"));
            let last = &self[(row, self.columns() - 1)];
            middle.push(Piece::Text(if last.wall_right { "|" } else { " " }));
            lines.push(top);
            lines.push(middle);
        }
        let mut bottom = Vec::with_capacity(self.columns() * 2 + 1);
        for column in 0..self.columns() {
            bottom.push(Piece::Text("+"));
            bottom.push(Piece::Text(if self[(0, column)].wall_back {
                "---"
            } else {
                "   "
            }));
        }
        bottom.push(Piece::Text("+"));
        lines.push(bottom);
        lines
    }

    /// Writes the plan to a terminal, goal cells highlighted.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        for line in self.plan() {
            for piece in line {
                match piece {
                    Piece::Text(text) => queue!(out, style::Print(text))?,
                    Piece::Goal => queue!(out, style::PrintStyledContent("G".with(Color::Red)))?,
                }
            }
            queue!(out, style::Print("\n"))?;
        }
        out.flush()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.plan() {
            for piece in line {
                match piece {
                    Piece::Text(text) => f.write_str(text)?,
                    Piece::Goal => f.write_str("G")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
