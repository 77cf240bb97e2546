mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{init_local_myday, load_tasks, save_tasks, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

#[derive(Parser)]
#[command(name = "myday")]
#[command(about = "A keyboard-driven to-do manager with My Day planning and filtered views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .myday storage directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .myday directory
            let myday_dir = init_local_myday()?;
            println!("Initialized storage directory: {}", myday_dir.display());
            println!();
            println!("My Day will now use this local directory for task storage.");
            println!("Run 'myday' to start managing tasks.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Resolve the storage slot (local .myday if present, else ~/.myday)
    let slot = tasks_file()?;
    eprintln!("Using storage slot: {}", slot.display());

    // Load tasks; missing or unreadable data falls back to the samples
    let tasks = load_tasks(&slot);
    let mut app = AppState::new(tasks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &slot);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save anything still dirty on exit
    if app.needs_save {
        if let Err(e) = save_tasks(&slot, app.store.tasks()) {
            eprintln!("Error saving tasks: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    slot: &Path,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next user event; nothing advances without one
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let should_quit = input::handle_key(app, key);

            // Write-through: persist before the next event is read
            if app.needs_save {
                save_tasks(slot, app.store.tasks())?;
                app.needs_save = false;
            }

            if should_quit {
                return Ok(());
            }
        }
    }
}
