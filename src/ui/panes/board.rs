//! Board pane rendering
//!
//! Composes, in order: the board text, the replay overlay, the start marker
//! accent and the cursor. Everything is written cell by cell into the frame
//! buffer. Board positions map to the pane's inner area with `(0, 0)` at its
//! top-left corner; anything falling outside that area is clipped, which is
//! how an out-of-surface position is handled.

use crate::board::{Board, Position, OBSTACLE_MARKER, START_MARKER};
use crate::replay::{Overlay, Paint};
use crate::session::Session;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
    Frame,
};

/// Map a board position into `inner`, or `None` if it falls outside
fn screen_cell(inner: Rect, pos: Position) -> Option<(u16, u16)> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }
    let (dx, dy) = (pos.x as u32, pos.y as u32);
    if dx >= inner.width as u32 || dy >= inner.height as u32 {
        return None;
    }
    Some((inner.x + dx as u16, inner.y + dy as u16))
}

fn cell_at<'a>(buf: &'a mut Buffer, inner: Rect, pos: Position) -> Option<&'a mut Cell> {
    let (x, y) = screen_cell(inner, pos)?;
    buf.cell_mut((x, y))
}

/// Tail of the move letters that fits in `width` columns
fn letters_tail(letters: &str, width: usize) -> &str {
    let count = letters.chars().count();
    if count <= width {
        return letters;
    }
    let skip = count - width;
    match letters.char_indices().nth(skip) {
        Some((idx, _)) => &letters[idx..],
        None => "",
    }
}

fn draw_board(buf: &mut Buffer, inner: Rect, board: &Board) {
    for y in 0..board.height() {
        for x in 0..board.width() {
            let pos = Position::new(x, y);
            let Some(ch) = board.cell(pos) else {
                continue;
            };
            let Some(cell) = cell_at(buf, inner, pos) else {
                continue;
            };
            cell.set_char(ch);
            if ch == OBSTACLE_MARKER {
                cell.set_fg(DEFAULT_THEME.obstacle);
            } else {
                cell.set_fg(DEFAULT_THEME.fg);
            }
        }
    }
}

fn draw_overlay(buf: &mut Buffer, inner: Rect, overlay: &Overlay) {
    for (&pos, annotation) in overlay.cells() {
        let Some(cell) = cell_at(buf, inner, pos) else {
            continue;
        };
        if let Some(glyph) = annotation.glyph {
            cell.set_char(glyph);
        }
        cell.set_bg(DEFAULT_THEME.paint_bg(annotation.paint));
        if annotation.paint == Paint::Error {
            cell.set_fg(DEFAULT_THEME.collision_fg);
        }
    }
}

/// Render the board with the current path overlay and cursor
pub fn render_board_pane(frame: &mut Frame, area: Rect, session: &Session, overlay: &Overlay) {
    let drawing = session.path().active;
    let border_style = if drawing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let letters = letters_tail(overlay.letters(), inner.width.saturating_sub(2) as usize);
    let block = if letters.is_empty() {
        block
    } else {
        block.title_bottom(Line::from(format!(" {} ", letters)))
    };

    let buf = frame.buffer_mut();
    block.render(area, buf);

    let board = session.board();
    draw_board(buf, inner, board);
    draw_overlay(buf, inner, overlay);

    let start = board.anchor();
    if overlay.glyph_at(board, start) == Some(START_MARKER) {
        if let Some(cell) = cell_at(buf, inner, start) {
            cell.set_fg(DEFAULT_THEME.start_marker);
        }
    }

    if let Some(cell) = cell_at(buf, inner, session.cursor()) {
        cell.set_bg(DEFAULT_THEME.cursor);
    }
}
