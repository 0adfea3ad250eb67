use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::domain::model::{Profile, ProfileCard};

const CARD_WIDTH: u16 = 32;
const CARD_HEIGHT: u16 = 9;

/// Where the card sits inside the visual panel. `None` when the panel is
/// too small to hold it or the profile has no card.
pub fn card_area(panel: Rect, profile: &Profile) -> Option<Rect> {
    if !profile.has_card() || panel.width < 12 || panel.height < CARD_HEIGHT {
        return None;
    }
    let width = CARD_WIDTH.min(panel.width.saturating_sub(2));
    let x = panel.x + (panel.width - width) / 2;
    let y = panel.y + (panel.height - CARD_HEIGHT) / 2;
    Some(Rect::new(x, y, width, CARD_HEIGHT))
}

pub fn render(frame: &mut Frame, area: Rect, profile: &Profile, card: &ProfileCard) {
    frame.render_widget(Clear, area);

    let (rot_x, rot_y) = card.rotation();
    let tilted = card.tilt().is_some();
    let border_style = if tilted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let face = if card.is_flipped() { " back " } else { " front " };
    let block = Block::default()
        .title(face)
        .title_alignment(Alignment::Center)
        .title_bottom(
            Line::from(format!(" {rot_x:.0}° / {rot_y:.0}° "))
                .centered()
                .style(Style::default().fg(Color::DarkGray)),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if card.is_flipped() {
        &profile.card_back
    } else {
        &profile.card_front
    };
    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let style = if i == 0 {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::styled(l.as_str(), style).centered()
        })
        .collect();
    let top_pad = inner.height.saturating_sub(text.len() as u16) / 2;
    let text_area = Rect::new(inner.x, inner.y + top_pad, inner.width, inner.height - top_pad);
    frame.render_widget(Paragraph::new(text), text_area);

    // Glare follows the pointer.
    if let Some(tilt) = card.tilt()
        && inner.width > 0
        && inner.height > 0
    {
        let gx = inner.x + ((tilt.light_x / 100.0) * (inner.width - 1) as f32).round() as u16;
        let gy = inner.y + ((tilt.light_y / 100.0) * (inner.height - 1) as f32).round() as u16;
        if let Some(cell) = frame.buffer_mut().cell_mut(Position::new(gx, gy)) {
            cell.set_bg(Color::Gray).set_fg(Color::Black);
        }
    }
}
