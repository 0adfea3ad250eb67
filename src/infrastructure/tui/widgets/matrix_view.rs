use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::domain::model::{MatrixRain, RainCell};

/// Cells dimmer than this are left blank.
const MIN_VISIBLE_INTENSITY: u8 = 24;

/// Head of a drop is near-white; the trail is the rain green scaled down.
fn cell_color(cell: RainCell) -> Color {
    if cell.intensity == u8::MAX {
        return Color::Rgb(200, 255, 190);
    }
    let scale = |c: u8| (c as u16 * cell.intensity as u16 / 255) as u8;
    Color::Rgb(scale(74), scale(246), scale(38))
}

/// Paint the rain grid into `area`. The rain should already be sized to it.
pub fn render(frame: &mut Frame, area: Rect, rain: &MatrixRain) {
    let buf = frame.buffer_mut();
    for row in 0..area.height {
        for col in 0..area.width {
            let Some(cell) = rain.cell(col, row) else {
                continue;
            };
            if cell.intensity < MIN_VISIBLE_INTENSITY {
                continue;
            }
            if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                target.set_char(cell.glyph).set_fg(cell_color(cell));
            }
        }
    }
}
