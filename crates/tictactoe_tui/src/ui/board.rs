//! Tic-tac-toe board rendering and click hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe::{Board, Cell, Player};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the tic-tac-toe board.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board) {
    let cells = cell_rects(area);
    for (index, cell_area) in cells.iter().enumerate() {
        render_cell(f, *cell_area, board, index);
    }

    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = row_areas(board_area);
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = col_areas(row_area);
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }
}

/// Returns the screen rectangle of each of the 9 cells, in board index
/// order. Shared between rendering and mouse hit-testing so a click
/// always lands on the cell the user sees.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = row_areas(board_area);

    let mut rects = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = col_areas(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[row * 3 + col] = col_area;
        }
    }
    rects
}

/// Maps a click location to a board index, if it falls on a cell.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<usize> {
    cell_rects(area)
        .iter()
        .position(|rect| rect.contains(Position::new(column, row)))
}

fn row_areas(board_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area)
}

fn col_areas(row_area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(row_area)
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, index: usize) {
    let Some(cell) = board.get(index) else {
        return;
    };
    let (text, style) = match cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_cell_rects_are_disjoint() {
        let rects = cell_rects(AREA);
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }

    #[test]
    fn test_hit_test_matches_cell_rects() {
        let rects = cell_rects(AREA);
        for (index, rect) in rects.iter().enumerate() {
            assert_eq!(hit_test(AREA, rect.x, rect.y), Some(index));
        }
    }

    #[test]
    fn test_hit_test_misses_outside_board() {
        assert_eq!(hit_test(AREA, 0, 0), None);
    }
}
