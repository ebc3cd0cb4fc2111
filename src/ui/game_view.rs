use crate::game::{GameResult, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, parse_color};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_rows = u16::try_from(game_state.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(board_rows),    // Board
            Constraint::Length(3),          // Message
            Constraint::Length(3),          // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    board_widget::render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Header line: whose turn it is, or how the game ended.
pub(super) fn status_line(game_state: &GameState) -> String {
    match game_state.result() {
        Some(GameResult::Win(player)) => format!("Game Over  |  Player {} won!", player.number()),
        Some(GameResult::Tie) => "Game Over  |  Tie!".to_string(),
        None => format!(
            "Current Player: {} ({})",
            game_state.current_player().number().number(),
            game_state.current_player().color()
        ),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let color = match game_state.result() {
        Some(GameResult::Tie) => Color::White,
        _ => parse_color(game_state.current_player().color()),
    };

    let header = Paragraph::new(status_line(game_state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
