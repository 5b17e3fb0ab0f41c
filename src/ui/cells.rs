use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::comparator::{CellState, CharacterCell};

/// Pure presenter for a single cell.
/// Whitespace typed wrong gets a visible stand-in so the error shows up.
pub fn present_cell(cell: &CharacterCell, is_cursor: bool) -> Span<'static> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let (symbol, style) = match cell.state {
        CellState::Correct => (
            visible(cell.expected, false),
            bold_style.fg(Color::Green),
        ),
        CellState::Incorrect => (visible(cell.expected, true), bold_style.fg(Color::Red)),
        CellState::Untyped => (
            visible(cell.expected, false),
            bold_style.add_modifier(Modifier::DIM),
        ),
    };

    let style = if is_cursor {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    };

    Span::styled(symbol, style)
}

fn visible(c: char, mark_whitespace: bool) -> String {
    match c {
        ' ' if mark_whitespace => "·".to_owned(),
        '\n' if mark_whitespace => "⏎".to_owned(),
        '\n' => String::new(),
        '\t' => "    ".to_owned(),
        c => c.to_string(),
    }
}

/// Split cells into display lines at the target's own newlines.
/// The cursor sits on the newline cell itself when that is next to type.
pub fn present_lines(cells: &[CharacterCell], cursor: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();

    for (idx, cell) in cells.iter().enumerate() {
        let is_cursor = cursor == Some(idx);
        if cell.expected == '\n' {
            if cell.state == CellState::Incorrect || is_cursor {
                let mut span = present_cell(cell, is_cursor);
                if span.content.is_empty() {
                    span.content = " ".into();
                }
                spans.push(span);
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            spans.push(present_cell(cell, is_cursor));
        }
    }
    lines.push(Line::from(spans));
    lines
}
