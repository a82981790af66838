//! Screen layout and drawing.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Draws the whole screen: title, board, status line, key hints.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = layout(f.area());

    let title = Paragraph::new("Tic-tac-toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    board::render_board(f, chunks[1], app.game().state().board());

    let status = Paragraph::new(app.status_message().to_string()).alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    let hint = if app.game_over() {
        "Press 'r' to play again, 'q' to quit"
    } else {
        "Click a cell or press 1-9. 'q' quits."
    };
    let hints = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[3]);
}

/// Maps a mouse click to a board index, using the same layout as `draw`.
pub fn click_to_cell(area: Rect, column: u16, row: u16) -> Option<usize> {
    let chunks = layout(area);
    board::hit_test(chunks[1], column, row)
}

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}
