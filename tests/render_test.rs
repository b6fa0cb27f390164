// Rendering tests against ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use traceboard::board::Board;
use traceboard::input::Command;
use traceboard::path::MoveVector;
use traceboard::replay::ReplayOptions;
use traceboard::session::{Session, SessionConfig};
use traceboard::ui::theme::DEFAULT_THEME;
use traceboard::ui::App;

fn draw(app: &App) -> Buffer {
    let backend = TestBackend::new(30, 6);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal.backend().buffer().clone()
}

fn app(board: &str, threshold: usize) -> App {
    let config = SessionConfig {
        threshold,
        replay: ReplayOptions::default(),
    };
    App::new(Session::new(Board::parse(board), config))
}

// The board's (0, 0) lands just inside the pane border
const ORIGIN: (u16, u16) = (1, 1);

fn at(x: u16, y: u16) -> (u16, u16) {
    (ORIGIN.0 + x, ORIGIN.1 + y)
}

#[test]
fn test_board_text_and_start_marker() {
    let app = app("@ x\n . ", 0);
    let buf = draw(&app);

    assert_eq!(buf[at(0, 0)].symbol(), "@");
    assert_eq!(buf[at(2, 0)].symbol(), "x");
    assert_eq!(buf[at(1, 1)].symbol(), ".");
    assert_eq!(buf[at(0, 0)].fg, DEFAULT_THEME.start_marker);
    // Cursor starts on the anchor
    assert_eq!(buf[at(0, 0)].bg, DEFAULT_THEME.cursor);
}

#[test]
fn test_path_overlay_and_trail() {
    let mut app = app("@   ", 5);
    app.handle_command(Command::Move(MoveVector::RIGHT));
    app.handle_command(Command::Move(MoveVector::RIGHT));
    let buf = draw(&app);

    assert_eq!(buf[at(1, 0)].symbol(), "+");
    assert_eq!(buf[at(1, 0)].bg, DEFAULT_THEME.in_range);
    assert_eq!(buf[at(2, 0)].symbol(), " ");
    // Cursor sits on the path end
    assert_eq!(buf[at(2, 0)].bg, DEFAULT_THEME.cursor);
    assert_eq!(buf[at(0, 0)].bg, ratatui::style::Color::Reset);
}

#[test]
fn test_over_threshold_color() {
    let mut app = app("@   ", 1);
    app.handle_command(Command::Move(MoveVector::RIGHT));
    app.handle_command(Command::Move(MoveVector::RIGHT));
    let buf = draw(&app);

    assert_eq!(buf[at(1, 0)].bg, DEFAULT_THEME.over_threshold);
}

#[test]
fn test_collision_highlight() {
    let mut app = app("@ x ", 5);
    app.handle_command(Command::Move(MoveVector::RIGHT));
    app.handle_command(Command::Move(MoveVector::RIGHT));
    app.handle_command(Command::Move(MoveVector::RIGHT));
    let buf = draw(&app);

    assert_eq!(buf[at(2, 0)].symbol(), "x");
    assert_eq!(buf[at(2, 0)].fg, DEFAULT_THEME.collision_fg);
    assert_eq!(buf[at(2, 0)].bg, DEFAULT_THEME.collision_bg);
    // Nothing past the obstacle is painted; only the cursor shows there
    assert_eq!(buf[at(3, 0)].bg, DEFAULT_THEME.cursor);
}

#[test]
fn test_cursor_outside_pane_is_clipped() {
    let mut app = app("@ ", 0);
    app.handle_command(Command::ToggleActive);
    app.handle_command(Command::Move(MoveVector::UP));
    app.handle_command(Command::Move(MoveVector::UP));
    let buf = draw(&app);

    // Rendering must not panic and the board stays intact
    assert_eq!(buf[at(0, 0)].symbol(), "@");
    assert_eq!(buf[at(0, 0)].bg, ratatui::style::Color::Reset);
}

#[test]
fn test_move_letters_in_border() {
    let mut app = app("@   \n    ", 10);
    app.handle_command(Command::Move(MoveVector::RIGHT));
    app.handle_command(Command::Move(MoveVector::DOWN));
    let buf = draw(&app);

    // Bottom border of the board pane is the row above the status bar
    let row: String = (0u16..30).map(|x| buf[(x, 4u16)].symbol()).collect();
    assert!(row.contains(" ds "), "bottom border was {:?}", row);
}
