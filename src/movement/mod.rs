// Single-step cursor movement, clamped at the grid edges (no wraparound)

use std::fmt;

use crate::grid::{Grid, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Apply this move against a grid's bounds
    pub fn apply(self, pos: Position, grid: &Grid) -> Position {
        match self {
            Move::Up => move_up(pos),
            Move::Down => move_down(pos, grid.rows()),
            Move::Left => move_left(pos),
            Move::Right => move_right(pos, grid.cols()),
        }
    }

    /// Step name as printed in trace output
    pub fn step_name(self) -> &'static str {
        match self {
            Move::Up => "move_up",
            Move::Down => "move_down",
            Move::Left => "move_left",
            Move::Right => "move_right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

pub fn move_right(pos: Position, max_cols: usize) -> Position {
    if pos.col + 1 < max_cols {
        Position { col: pos.col + 1, ..pos }
    } else {
        pos
    }
}

pub fn move_left(pos: Position) -> Position {
    if pos.col > 0 {
        Position { col: pos.col - 1, ..pos }
    } else {
        pos
    }
}

pub fn move_down(pos: Position, max_rows: usize) -> Position {
    if pos.row + 1 < max_rows {
        Position { row: pos.row + 1, ..pos }
    } else {
        pos
    }
}

pub fn move_up(pos: Position) -> Position {
    if pos.row > 0 {
        Position { row: pos.row - 1, ..pos }
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    fn all_positions(grid: &Grid) -> Vec<Position> {
        (0..grid.rows())
            .flat_map(|row| (0..grid.cols()).map(move |col| Position::new(row, col)))
            .collect()
    }

    #[test]
    fn test_single_axis_unit_step() {
        let grid = Grid::keypad().unwrap();
        for pos in all_positions(&grid) {
            for mv in ALL {
                let next = mv.apply(pos, &grid);
                assert!(grid.contains(next), "{:?} {} left the grid", pos, mv);

                let dr = pos.row.abs_diff(next.row);
                let dc = pos.col.abs_diff(next.col);
                assert!(dr + dc <= 1, "{:?} {} moved {:?}", pos, mv, next);
                match mv {
                    Move::Up | Move::Down => assert_eq!(dc, 0),
                    Move::Left | Move::Right => assert_eq!(dr, 0),
                }
            }
        }
    }

    #[test]
    fn test_clamped_at_edges() {
        let grid = Grid::keypad().unwrap();
        for pos in all_positions(&grid) {
            if pos.row == 0 {
                assert_eq!(Move::Up.apply(pos, &grid), pos);
            }
            if pos.row == grid.rows() - 1 {
                assert_eq!(Move::Down.apply(pos, &grid), pos);
            }
            if pos.col == 0 {
                assert_eq!(Move::Left.apply(pos, &grid), pos);
            }
            if pos.col == grid.cols() - 1 {
                assert_eq!(Move::Right.apply(pos, &grid), pos);
            }
        }
    }

    #[test]
    fn test_interior_steps() {
        let pos = Position::new(1, 1);
        assert_eq!(move_up(pos), Position::new(0, 1));
        assert_eq!(move_down(pos, 4), Position::new(2, 1));
        assert_eq!(move_left(pos), Position::new(1, 0));
        assert_eq!(move_right(pos, 3), Position::new(1, 2));
    }

    #[test]
    fn test_names() {
        assert_eq!(Move::Down.to_string(), "down");
        assert_eq!(Move::Right.step_name(), "move_right");
    }
}
