use crate::game::{Cell, Game};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::palette;

/// Styled span for one board cell, in the owning player's color.
pub fn cell_span(game: &Game, cell: Cell) -> Span<'static> {
    match cell.and_then(|id| game.player(id)) {
        Some(player) => Span::styled(
            " \u{25cf} ",
            Style::default().fg(palette::player_color(player)),
        ),
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
    }
}

/// The board framed by column numbers on top and a selection marker below.
pub fn board_lines(game: &Game, selected_column: usize) -> Vec<Line<'static>> {
    let board = game.board();
    let selected = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines = Vec::with_capacity(board.height() + 4);

    // Padding matches the "  ║" prefix of board rows.
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(label, selected));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.width() {
            row_spans.push(cell_span(game, board.get(row, col)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
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
