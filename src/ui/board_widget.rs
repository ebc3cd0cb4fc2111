use std::str::FromStr;

use crate::game::{Cell, GameResult, GameState, PlayerNumber, Window};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Map a player's color token to a terminal color.
///
/// Accepts anything ratatui understands (`red`, `lightblue`, `#ff8800`,
/// indexed `208`); unknown tokens render white.
pub fn parse_color(token: &str) -> Color {
    Color::from_str(token.trim()).unwrap_or(Color::White)
}

/// Render the board with a column selector above and below it.
pub fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let lines = board_lines(game_state, selected_column);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn board_lines(game_state: &GameState, selected_column: usize) -> Vec<Line<'static>> {
    let board = game_state.board();
    let width = board.width();
    let one_color = parse_color(game_state.player(PlayerNumber::One).color());
    let two_color = parse_color(game_state.player(PlayerNumber::Two).color());
    let winning: Option<Window> = match game_state.result() {
        Some(GameResult::Win(player)) => game_state.winning_window(player),
        _ => None,
    };

    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::PlayerOne => (" ● ", Style::default().fg(one_color)),
                Cell::PlayerTwo => (" ● ", Style::default().fg(two_color)),
            };
            if winning.is_some_and(|w| w.contains(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
