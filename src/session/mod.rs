// Interactive navigation session
//
// Reads one target label per line, plans the route from the current cell
// and renders the grid after every single step.


use std::io::{BufRead, Write};
use anyhow::{Context, Result};

use crate::grid::{Grid, Position};
use crate::movement::Move;
use crate::planner;

/// Input line that ends the session (exact, case-sensitive)
pub const EXIT_SENTINEL: &str = "exit";
pub const PROMPT: &str = "Enter target number: ";
pub const NOT_FOUND_MESSAGE: &str = "Target number not found. Please try again.";

/// Grid plus the cursor that walks it. The cursor is owned here and only
/// changes through `step`.
#[derive(Debug, Clone)]
pub struct Navigator {
    grid: Grid,
    position: Position,
}

impl Navigator {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            position: Position::ORIGIN,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Resolve a label and plan the route to it. `None` when the label is not on the grid.
    pub fn request(&self, label: &str) -> Option<Vec<Move>> {
        let Some(target) = self.grid.find(label) else {
            log::info!("label {:?} not on grid", label);
            return None;
        };
        let moves = planner::plan(self.position, target);
        log::debug!(
            "{:?} -> {:?} ({:?}): {:?}",
            self.position,
            target,
            label,
            moves
        );
        Some(moves)
    }

    pub fn step(&mut self, mv: Move) -> Position {
        let next = mv.apply(self.position, &self.grid);
        debug_assert!(self.grid.contains(next));
        log::debug!("{}: {:?} -> {:?}", mv, self.position, next);
        self.position = next;
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print the prompt before every read
    pub prompt: bool,
    /// Print the step name before each render
    pub trace: bool,
}

pub struct Session {
    navigator: Navigator,
    options: SessionOptions,
    state: SessionState,
}

impl Session {
    pub fn new(navigator: Navigator, options: SessionOptions) -> Self {
        Self {
            navigator,
            options,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle one input line (terminator already stripped)
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }
        if line == EXIT_SENTINEL {
            log::debug!("exit requested at {:?}", self.navigator.position());
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        match self.navigator.request(line) {
            None => writeln!(out, "{}", NOT_FOUND_MESSAGE)?,
            Some(moves) => {
                for mv in moves {
                    self.navigator.step(mv);
                    if self.options.trace {
                        writeln!(out, "{}", mv.step_name())?;
                    }
                    self.navigator.grid().render(out, self.navigator.position())?;
                }
            }
        }

        Ok(self.state)
    }

    /// Run until the exit sentinel or end of input; returns the final cursor
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<Position> {
        self.navigator.grid().render(out, self.navigator.position())?;

        let mut buf = Vec::new();
        while self.state() == SessionState::AwaitingInput {
            if self.options.prompt {
                write!(out, "{}", PROMPT)?;
            }
            out.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read target label")?;
            if read == 0 {
                log::debug!("end of input at {:?}", self.navigator.position());
                self.state = SessionState::Terminated;
                break;
            }

            // Undecodable bytes can never name a key
            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    self.handle_line(strip_line_ending(line), out)?;
                }
                Err(e) => {
                    log::info!("input line is not valid UTF-8: {}", e);
                    writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
                }
            }
        }

        out.flush()?;
        Ok(self.navigator.position())
    }
}

/// Drop a trailing `\n` or `\r\n`, nothing else
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
