// Terminal UI using ratatui

use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use anyhow::Result;

use crate::grid::{Grid, Position, CURSOR_MARKER};
use crate::keyboard::Action;
use crate::movement::Move;
use crate::session::{Navigator, EXIT_SENTINEL, NOT_FOUND_MESSAGE};

pub struct TerminalUI {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    pub fn render<F>(&mut self, render_fn: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render_fn)?;
        Ok(())
    }

    pub fn poll_event(&self) -> Result<Option<KeyEvent>> {
        // Non-blocking; the main loop paces frames with thread::sleep
        if event::poll(Duration::from_micros(0))? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

/// UI-side session state: typed label, queued plan and status line
pub struct App {
    navigator: Navigator,
    input: String,
    pending: VecDeque<Move>,
    status: String,
    step_delay: Duration,
    last_step: Option<Instant>,
    quit: bool,
}

impl App {
    pub fn new(navigator: Navigator, step_delay: Duration) -> Self {
        Self {
            navigator,
            input: String::new(),
            pending: VecDeque::new(),
            status: String::new(),
            step_delay,
            last_step: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    pub fn is_moving(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::Type(c) => self.input.push(c),
            Action::Erase => {
                self.input.pop();
            }
            Action::Submit => self.submit(),
            Action::Step(mv) => {
                // Manual steps would desync a running plan
                if self.pending.is_empty() {
                    let pos = self.navigator.step(mv);
                    let label = self.navigator.grid().label(pos).unwrap_or_default();
                    self.status = format!("{}: {}", mv, label);
                }
            }
        }
    }

    fn submit(&mut self) {
        let label = std::mem::take(&mut self.input);
        if label == EXIT_SENTINEL {
            self.quit = true;
            return;
        }

        // A new request replaces any unfinished plan, routed from where the cursor is now
        match self.navigator.request(&label) {
            None => self.status = NOT_FOUND_MESSAGE.to_string(),
            Some(moves) => {
                self.status = if moves.is_empty() {
                    format!("{}: already there", label)
                } else {
                    let names: Vec<String> = moves.iter().map(Move::to_string).collect();
                    format!("{}: {}", label, names.join(" "))
                };
                self.pending = moves.into();
            }
        }
    }

    /// Apply at most one queued move once the step delay has elapsed
    pub fn tick(&mut self, now: Instant) -> Option<Position> {
        if self.pending.is_empty() {
            return None;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.step_delay {
                return None;
            }
        }

        let mv = self.pending.pop_front()?;
        self.last_step = Some(now);
        Some(self.navigator.step(mv))
    }
}

pub fn create_layout(area: Rect, grid_rows: usize) -> (Rect, Rect, Rect, Rect) {
    let keypad_height = u16::try_from(grid_rows).unwrap_or(u16::MAX).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar
            Constraint::Length(keypad_height), // Keypad, plus borders
            Constraint::Length(3),             // Input line
            Constraint::Min(1),                // Status
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

pub fn draw(frame: &mut Frame, app: &App) {
    let grid = app.navigator.grid();
    let (title_area, keypad_area, input_area, status_area) = create_layout(frame.size(), grid.rows());

    render_title_bar(frame, title_area);
    render_keypad(frame, keypad_area, grid, app.position());
    render_input(frame, input_area, &app.input, app.is_moving());
    render_status(frame, status_area, &app.status);
}

pub fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("keynav - Keypad Navigator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

pub fn render_keypad(frame: &mut Frame, area: Rect, grid: &Grid, cursor: Position) {
    let width = cell_width(grid);

    let lines: Vec<Line> = grid
        .iter_rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, label)| {
                    if cursor == (Position { row, col }) {
                        let text = format!("{}{}", label, CURSOR_MARKER);
                        Span::styled(
                            format!(" {:^width$} ", text, width = width),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(
                            format!(" {:^width$} ", label, width = width),
                            Style::default().fg(Color::White),
                        )
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Keypad"));
    frame.render_widget(paragraph, area);
}

pub fn render_input(frame: &mut Frame, area: Rect, input: &str, moving: bool) {
    let style = if moving {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };
    let paragraph = Paragraph::new(format!("> {}", input))
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Enter target number"));
    frame.render_widget(paragraph, area);
}

pub fn render_status(frame: &mut Frame, area: Rect, status: &str) {
    let lines = vec![
        Line::from(Span::styled(status.to_string(), Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            "Enter: Go | Arrows: Step | Backspace: Erase | ESC: Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Widest label plus room for the cursor marker
fn cell_width(grid: &Grid) -> usize {
    grid.iter_rows()
        .flat_map(|cells| cells.iter())
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        + 1
}
