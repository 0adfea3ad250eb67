/// Narrowest the visual panel may be dragged to, in columns.
pub const MIN_VISUAL_WIDTH: u16 = 16;
/// Widest the visual panel may be dragged to, as a share of the body width.
const MAX_VISUAL_RATIO: f32 = 0.75;
/// Visual panel share before the user drags anything.
const DEFAULT_VISUAL_RATIO: f32 = 0.4;

/// Draggable divider between the visual panel and the terminal panel.
#[derive(Debug, Default)]
pub struct Splitter {
    dragging: bool,
    visual_width: Option<u16>,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the visual panel for a body `body_width` columns wide.
    pub fn visual_width(&self, body_width: u16) -> u16 {
        let requested = self
            .visual_width
            .unwrap_or((body_width as f32 * DEFAULT_VISUAL_RATIO) as u16);
        clamp_width(requested, body_width)
    }

    /// Pointer pressed at column `x`; starts a drag when it hits the bar.
    pub fn press(&mut self, x: u16, bar_x: u16) -> bool {
        self.dragging = x == bar_x;
        self.dragging
    }

    /// Pointer moved to column `x` while pressed. Ignored unless dragging.
    pub fn drag_to(&mut self, x: u16, body_x: u16, body_width: u16) -> bool {
        if !self.dragging {
            return false;
        }
        let requested = x.saturating_sub(body_x);
        self.visual_width = Some(clamp_width(requested, body_width));
        true
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Clamp to `[MIN_VISUAL_WIDTH, 75% of body]`; the minimum wins when the body
/// is too narrow for both.
fn clamp_width(requested: u16, body_width: u16) -> u16 {
    let max = (body_width as f32 * MAX_VISUAL_RATIO) as u16;
    requested.min(max).max(MIN_VISUAL_WIDTH)
}
