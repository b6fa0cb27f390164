// traceboard: draw a path across a text board

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use traceboard::board::Board;
use traceboard::config::Cli;
use traceboard::error::StartupError;
use traceboard::logging;
use traceboard::session::Session;
use traceboard::ui::App;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), StartupError> {
    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level)?;
    }

    // The board must load before the terminal is touched
    let board = Board::load(&cli.board)?;
    let config = cli.session_config();
    log::info!(
        "loaded {} ({}x{}, start at {},{}), threshold {}, replay {:?}",
        cli.board.display(),
        board.width(),
        board.height(),
        board.anchor().x,
        board.anchor().y,
        config.threshold,
        config.replay
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Session::new(board, config));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    log::info!("session ended");
    Ok(())
}
