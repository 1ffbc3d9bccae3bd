// Keypad grid: layout, label lookup and text rendering

use std::io::Write;
use anyhow::Result;

/// Marker appended to the label of the cell under the cursor
pub const CURSOR_MARKER: char = '*';

/// Cursor position (row, column), 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable rectangular matrix of key labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            anyhow::bail!("Grid must have at least one row");
        };
        let cols = first.len();
        if cols == 0 {
            anyhow::bail!("Grid rows must have at least one column");
        }
        if let Some(i) = rows.iter().position(|row| row.len() != cols) {
            anyhow::bail!(
                "Grid row {} has {} columns, expected {}",
                i,
                rows[i].len(),
                cols
            );
        }

        Ok(Self { rows })
    }

    /// The 4x3 PIN-entry keypad
    ///
    /// ```text
    /// 1   2 3
    /// 4   5 6
    /// 7   8 9
    /// del 0 return
    /// ```
    pub fn keypad() -> Result<Self> {
        let layout = [
            ["1", "2", "3"],
            ["4", "5", "6"],
            ["7", "8", "9"],
            ["del", "0", "return"],
        ];
        Self::new(
            layout
                .iter()
                .map(|row| row.iter().map(|label| label.to_string()).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn label(&self, pos: Position) -> Option<&str> {
        self.rows
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map(String::as_str)
    }

    /// Iterate rows of labels, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Locate a label by exact match, scanning row-major.
    /// Duplicate labels resolve to the first one in scan order.
    pub fn find(&self, label: &str) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|cell| cell == label)
                .map(|col| Position::new(row, col))
        })
    }

    /// Write one line per row: `label,` for each cell, `label*,` under the cursor
    pub fn render<W: Write>(&self, out: &mut W, cursor: Position) -> std::io::Result<()> {
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cursor == (Position { row, col }) {
                    write!(out, "{}{},", cell, CURSOR_MARKER)?;
                } else {
                    write!(out, "{},", cell)?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
