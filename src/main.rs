mod app;
mod constants;
mod games;
mod input;
mod menu;
mod scores;
mod ui;

use app::App;
use chrono::Utc;
use constants::INPUT_POLL_MS;
use crossterm::event::{self, Event};
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
                println!("arcade {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Arcade - Terminal Minigame Collection\n");
                println!("Usage: arcade\n");
                println!("Games: Snake, Flappy, Simon, Tic-Tac-Toe.");
                println!("Best scores are kept in ~/.arcade/scores.json.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut app = App::new(scores::load_scores());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking beyond the poll window)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                input::handle_key(&mut app, key_event, &mut rng);
            }
        }

        // Advance the active game by the real elapsed time
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        input::tick(&mut app, dt_ms, &mut rng);

        // Persist the scoreboard the moment a finished game changes it
        if app.record_result(Utc::now().timestamp()) {
            if let Err(e) = scores::save_scores(&app.scores) {
                eprintln!("Failed to save scores: {}", e);
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
