use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAreas {
    pub status_bar: Rect,
    pub visual: Rect,
    pub splitter: Rect,
    pub terminal: Rect,
}

impl LayoutAreas {
    pub fn hits_splitter(&self, x: u16, y: u16) -> bool {
        self.splitter.contains(Position::new(x, y))
    }
}

/// Display columns `text` occupies, saturated to fit a `u16` extent.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Status bar on top; below it the visual panel, a one-column drag bar and
/// the terminal panel.
pub fn compute_layout(area: Rect, visual_width: u16) -> LayoutAreas {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
    let body = rows[1];
    let visual_width = visual_width.min(body.width.saturating_sub(1));
    let cols = Layout::horizontal([
        Constraint::Length(visual_width),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(body);
    LayoutAreas {
        status_bar: rows[0],
        visual: cols[0],
        splitter: cols[1],
        terminal: cols[2],
    }
}
