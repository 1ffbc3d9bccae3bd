mod grid;
mod movement;
mod planner;
mod session;
mod keyboard;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};
use anyhow::{Context, Result};
use clap::Parser;

use grid::Grid;
use session::{Navigator, Session, SessionOptions};

/// Debug log written to the temp directory while the UI owns the terminal
const UI_LOG_FILE: &str = "keynav.log";

#[derive(Parser, Debug)]
#[command(name = "keynav")]
#[command(about = "Keypad grid navigator", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Run the full-screen terminal UI
    #[arg(long)]
    ui: bool,

    /// Print each step name before its render
    #[arg(long)]
    trace: bool,

    /// Do not print the input prompt (for piped input)
    #[arg(long)]
    no_prompt: bool,

    /// Delay between animated steps in the UI, in milliseconds
    #[arg(long, default_value_t = 150)]
    step_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    if args.ui {
        run_with_ui(&args)?;
    } else {
        run_headless(&args)?;
    }

    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let default_level = if args.debug { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if args.ui {
        // stderr is covered by the alternate screen
        if !args.debug {
            return Ok(());
        }
        let path = std::env::temp_dir().join(UI_LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

fn run_headless(args: &Args) -> Result<()> {
    let navigator = Navigator::new(Grid::keypad()?);
    let mut session = Session::new(
        navigator,
        SessionOptions {
            prompt: !args.no_prompt,
            trace: args.trace,
        },
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let end = session.run(stdin.lock(), &mut stdout)?;
    log::debug!("session ended at {:?}", end);

    Ok(())
}

fn run_with_ui(args: &Args) -> Result<()> {
    let navigator = Navigator::new(Grid::keypad()?);
    let mut app = ui::App::new(navigator, Duration::from_millis(args.step_ms));
    let mut terminal = ui::TerminalUI::new()?;

    loop {
        terminal.render(|frame| ui::draw(frame, &app))?;

        while let Some(key) = terminal.poll_event()? {
            if let Some(action) = keyboard::map_key(key) {
                app.handle(action);
            }
        }
        if app.should_quit() {
            break;
        }

        // One step per frame at most, so every step gets drawn
        app.tick(Instant::now());

        // ~60 FPS
        std::thread::sleep(Duration::from_millis(16));
    }

    log::debug!("ui closed at {:?}", app.position());
    Ok(())
}
