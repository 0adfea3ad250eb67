use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::infrastructure::tui::widgets::layout::text_width;

const HINTS: &str = "^C quit  ^F flip  ^L clear  PgUp/PgDn scroll";

/// Clock text in the day-first, 12-hour style: `19/10/2026, 03:04:05 pm`.
pub fn format_clock(now: &NaiveDateTime) -> String {
    now.format("%d/%m/%Y, %I:%M:%S %P").to_string()
}

/// One-row bar: title on the left, key hints in the middle, clock on the right.
pub fn render(frame: &mut Frame, area: Rect, title: &str, now: &NaiveDateTime) {
    let clock = format_clock(now);
    let cols = Layout::horizontal([
        Constraint::Length(text_width(title).saturating_add(2)),
        Constraint::Min(0),
        Constraint::Length(text_width(&clock).saturating_add(1)),
    ])
    .split(area);

    let bar_style = Style::default().bg(Color::Rgb(20, 20, 20));
    frame.render_widget(Paragraph::new("").style(bar_style), area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::Rgb(74, 246, 38))
                .add_modifier(Modifier::BOLD),
        )))
        .style(bar_style),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(HINTS).centered())
            .style(bar_style.fg(Color::DarkGray)),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(clock).right_aligned()).style(bar_style.fg(Color::White)),
        cols[2],
    );
}
