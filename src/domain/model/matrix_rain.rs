use std::time::Duration;

use crate::domain::primitive::Pacer;
use crate::domain::primitive::pacing::MATRIX_FRAME_INTERVAL;

/// Glyphs a falling drop may show.
pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$%^&*";

/// Per-frame fade: every cell keeps 95% of its brightness.
const FADE_NUMERATOR: u16 = 95;
/// A drop that has left the screen restarts with this probability per frame (2.5%).
const RESET_THRESHOLD: u32 = (u32::MAX / 1000) * 975;

/// One cell of the rain grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainCell {
    pub glyph: char,
    pub intensity: u8,
}

impl RainCell {
    const BLANK: Self = Self { glyph: ' ', intensity: 0 };
}

/// Deterministic xorshift32 PRNG.
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Falling-glyph background animation.
///
/// One drop per column. Each frame every cell fades, each drop paints a
/// fresh random glyph at full brightness one row further down, and drops
/// that have fallen past the bottom occasionally restart at the top.
pub struct MatrixRain {
    cols: u16,
    rows: u16,
    drops: Vec<u16>,
    cells: Vec<RainCell>,
    rng: u32,
    pacer: Pacer,
}

impl MatrixRain {
    pub fn new(seed: u32) -> Self {
        Self {
            cols: 0,
            rows: 0,
            drops: Vec::new(),
            cells: Vec::new(),
            // xorshift32 never leaves zero.
            rng: if seed == 0 { 0x9E37_79B9 } else { seed },
            pacer: Pacer::new(MATRIX_FRAME_INTERVAL),
        }
    }

    /// Match the panel size. Changing size restarts every drop at the top.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.drops = vec![1; cols as usize];
        self.cells = vec![RainCell::BLANK; cols as usize * rows as usize];
    }

    /// Run as many frames as `elapsed` covers.
    pub fn advance(&mut self, elapsed: Duration) {
        for _ in 0..self.pacer.due(elapsed) {
            self.frame();
        }
    }

    pub fn frame(&mut self) {
        for cell in &mut self.cells {
            cell.intensity = (cell.intensity as u16 * FADE_NUMERATOR / 100) as u8;
            if cell.intensity == 0 {
                cell.glyph = ' ';
            }
        }

        for col in 0..self.cols as usize {
            let glyph = GLYPHS[xorshift32(&mut self.rng) as usize % GLYPHS.len()] as char;
            let drop = self.drops[col];
            if drop >= 1 && drop <= self.rows {
                let idx = (drop as usize - 1) * self.cols as usize + col;
                self.cells[idx] = RainCell { glyph, intensity: u8::MAX };
            }

            if drop > self.rows && xorshift32(&mut self.rng) > RESET_THRESHOLD {
                self.drops[col] = 0;
            }
            self.drops[col] = self.drops[col].saturating_add(1);
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<RainCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize).copied()
    }
}

#[cfg(test)]
impl MatrixRain {
    fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn drops(&self) -> &[u16] {
        &self.drops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift32_no_zero() {
        let mut state = 1u32;
        for _ in 0..10_000 {
            assert_ne!(xorshift32(&mut state), 0);
        }
    }

    #[test]
    fn resize_starts_all_drops_at_one() {
        let mut rain = MatrixRain::new(7);
        rain.resize(5, 4);
        assert_eq!(rain.drops(), &[1, 1, 1, 1, 1]);
        assert_eq!(rain.size(), (5, 4));
    }

    #[test]
    fn first_frame_paints_top_row_at_full_brightness() {
        let mut rain = MatrixRain::new(7);
        rain.resize(3, 4);
        rain.frame();
        for col in 0..3 {
            let cell = rain.cell(col, 0).unwrap();
            assert_eq!(cell.intensity, u8::MAX);
            assert!(GLYPHS.contains(&(cell.glyph as u8)));
        }
        assert_eq!(rain.drops(), &[2, 2, 2]);
    }

    #[test]
    fn painted_cells_fade_each_frame() {
        let mut rain = MatrixRain::new(7);
        rain.resize(1, 10);
        rain.frame();
        rain.frame();
        let faded = rain.cell(0, 0).unwrap();
        assert_eq!(faded.intensity, (255u16 * 95 / 100) as u8);
        assert_eq!(rain.cell(0, 1).unwrap().intensity, u8::MAX);
    }

    #[test]
    fn drops_past_bottom_eventually_restart() {
        let mut rain = MatrixRain::new(42);
        rain.resize(4, 3);
        let mut restarted = false;
        for _ in 0..2_000 {
            rain.frame();
            if rain.drops().iter().any(|&d| d == 1) {
                restarted = true;
                break;
            }
        }
        assert!(restarted);
    }

    #[test]
    fn drops_keep_falling_until_past_bottom() {
        let mut rain = MatrixRain::new(42);
        rain.resize(2, 5);
        for _ in 0..5 {
            rain.frame();
        }
        // No reset is possible before the drop passes the last row.
        assert_eq!(rain.drops(), &[6, 6]);
    }

    #[test]
    fn advance_runs_one_frame_per_35ms() {
        let mut rain = MatrixRain::new(3);
        rain.resize(1, 50);
        rain.advance(Duration::from_millis(34));
        assert_eq!(rain.drops(), &[1]);
        rain.advance(Duration::from_millis(1 + 70));
        assert_eq!(rain.drops(), &[4]);
    }

    #[test]
    fn cell_out_of_bounds_is_none() {
        let mut rain = MatrixRain::new(3);
        rain.resize(2, 2);
        assert!(rain.cell(2, 0).is_none());
        assert!(rain.cell(0, 2).is_none());
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rain = MatrixRain::new(0);
        rain.resize(2, 2);
        rain.frame();
        assert_eq!(rain.cell(0, 0).unwrap().intensity, u8::MAX);
    }
}
