mod build_info;
mod constants;
mod core;
mod games;
mod geometry;
mod input;
mod ui;
mod world;

use crate::core::game_state::GameState;
use crate::core::tick::tick_game;
use crate::input::{handle_key, InputResult};
use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "midway {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Midway - Terminal Game Hub\n");
                println!("Usage: midway [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'midway --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even if the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut state = GameState::new(Utc::now().timestamp());
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &state))?;

        if event::poll(Duration::from_millis(constants::INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let InputResult::Quit = handle_key(&mut state, key) {
                        return Ok(());
                    }
                }
            }
        }

        // Advance whatever timers the active mini-game owns
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        tick_game(&mut state, dt_ms);
    }
}
