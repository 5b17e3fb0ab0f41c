pub mod cells;
pub mod view;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, content::Category};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

const LEGEND: &str = "(tab) restart / (←/→) mode / (esc)ape";

/// Mode tabs with the active one bracketed
pub fn mode_tabs(active: Category) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            if *c == active {
                format!("[{c}]")
            } else {
                format!(" {c} ")
            }
        })
        .join("  ")
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let single_line = view.text.lines().count() <= 1
            && view.text.width() <= max_chars_per_line as usize;

        let prompt = Paragraph::new(cells::present_lines(&view.cells, view.cursor()))
            .alignment(if single_line {
                // a short quote reads better centered
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: false });

        // rows as ratatui's word wrapper lays them out, not a chars/width estimate
        let prompt_occupied_lines =
            u16::try_from(prompt.line_count(max_chars_per_line)).unwrap_or(u16::MAX);

        let padding = area
            .height
            .saturating_sub(prompt_occupied_lines.saturating_add(4 + VERTICAL_MARGIN * 2))
            / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(1),                     // mode tabs + timer
                    Constraint::Length(padding),               // spacer
                    Constraint::Length(prompt_occupied_lines), // target text
                    Constraint::Length(1),                     // spacer
                    Constraint::Length(1),                     // metrics
                    Constraint::Min(0),                        // spacer
                    Constraint::Length(1),                     // legend
                ]
                .as_ref(),
            )
            .split(area);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(6)].as_ref())
            .split(chunks[0]);

        Paragraph::new(Span::styled(mode_tabs(self.mode()), bold_style)).render(header[0], buf);

        let timer_style = if view.locked {
            bold_style.fg(Color::Red)
        } else {
            dim_bold_style
        };
        Paragraph::new(Span::styled(format!("{}s", view.remaining), timer_style))
            .alignment(Alignment::Right)
            .render(header[1], buf);

        prompt.render(chunks[2], buf);

        let metrics = view.metrics;
        Paragraph::new(Span::styled(
            format!(
                "{} wpm   {}% acc   {} errors",
                metrics.wpm, metrics.accuracy, metrics.errors
            ),
            bold_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

        let legend = if view.locked {
            Line::from(vec![
                Span::styled("time's up!  ", bold_style.fg(Color::Yellow)),
                Span::styled(LEGEND, italic_style),
            ])
        } else {
            Line::from(Span::styled(LEGEND, italic_style))
        };
        Paragraph::new(legend).render(chunks[6], buf);
    }
}
