use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Gauge, Paragraph};

use crate::domain::model::BootSequence;

const BOOT_TEXT_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Black);

/// Full-screen BIOS boot screen with a progress bar on the last row.
pub fn render(frame: &mut Frame, area: Rect, boot: &BootSequence) {
    frame.render_widget(Clear, area);

    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    let text_area = rows[0];

    // Keep the newest line in view once the text outgrows the screen.
    let lines: Vec<Line> = boot.text().lines().map(Line::from).collect();
    let overflow = lines.len().saturating_sub(text_area.height as usize);
    frame.render_widget(
        Paragraph::new(lines)
            .style(BOOT_TEXT_STYLE)
            .scroll((overflow as u16, 0)),
        text_area,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Rgb(74, 246, 38)).bg(Color::Black))
        .percent(boot.progress().min(100))
        .label(format!("{}%", boot.progress()));
    frame.render_widget(gauge, rows[1]);
}
