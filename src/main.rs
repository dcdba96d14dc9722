// hanoitty: Towers of Hanoi in the terminal

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use hanoitty::config::{Config, ConfigError};
use hanoitty::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--speed <ms>] [--fps <n>]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --speed <ms>   Delay between automatic moves (100-2000, default 500)");
    eprintln!("  --fps <n>      Frames per second (1-240, default 60)");
    eprintln!("  -h, --help     Show this message");
    eprintln!();
    eprintln!("Controls:");
    eprintln!("  mouse drag     Move a disk");
    eprintln!("  a              Start/stop the automatic solver");
    eprintln!("  Up / Down      Faster / slower automatic moves");
    eprintln!("  r              Restart");
    eprintln!("  q              Quit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("hanoitty");

    let config = match Config::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            print_usage(program_name);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    } else {
        eprintln!(
            "Finished with {} move(s){}",
            app.game.move_count(),
            if app.game.is_won() { ", puzzle solved" } else { "" }
        );
    }

    Ok(())
}
