/// Largest tilt, in degrees, reached at the card edges.
const MAX_TILT_DEG: f32 = 18.0;

/// Tilt produced by the pointer hovering over the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    /// Rotation around the horizontal axis (pointer below centre tips the top away).
    pub rot_x: f32,
    /// Rotation around the vertical axis, before the flip is applied.
    pub rot_y: f32,
    /// Glare position as a percentage of card width.
    pub light_x: f32,
    /// Glare position as a percentage of card height.
    pub light_y: f32,
}

impl CardTilt {
    /// Tilt for a pointer at `(x, y)` relative to a `width` x `height` card.
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let rot_x = if center_y > 0.0 {
            ((y - center_y) / center_y) * -MAX_TILT_DEG
        } else {
            0.0
        };
        let rot_y = if center_x > 0.0 {
            ((x - center_x) / center_x) * MAX_TILT_DEG
        } else {
            0.0
        };
        let light_x = if width > 0.0 { x / width * 100.0 } else { 0.0 };
        let light_y = if height > 0.0 { y / height * 100.0 } else { 0.0 };
        Self {
            rot_x,
            rot_y,
            light_x,
            light_y,
        }
    }
}

/// The hoverable, clickable profile card in the visual panel.
#[derive(Debug, Default)]
pub struct ProfileCard {
    flipped: bool,
    tilt: Option<CardTilt>,
}

impl ProfileCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_move(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.tilt = Some(CardTilt::from_pointer(
            x as f32,
            y as f32,
            width as f32,
            height as f32,
        ));
    }

    pub fn pointer_leave(&mut self) {
        self.tilt = None;
    }

    /// Flip to the other face. The card settles flat until the pointer moves again.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
        self.tilt = None;
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn tilt(&self) -> Option<CardTilt> {
        self.tilt
    }

    /// `(rot_x, rot_y)` in degrees with the flip folded into `rot_y`.
    pub fn rotation(&self) -> (f32, f32) {
        let flip = if self.flipped { 180.0 } else { 0.0 };
        match self.tilt {
            Some(t) => (t.rot_x, t.rot_y + flip),
            None => (0.0, flip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_has_no_tilt() {
        let tilt = CardTilt::from_pointer(10.0, 5.0, 20.0, 10.0);
        assert_eq!(tilt.rot_x, 0.0);
        assert_eq!(tilt.rot_y, 0.0);
        assert_eq!(tilt.light_x, 50.0);
        assert_eq!(tilt.light_y, 50.0);
    }

    #[test]
    fn pointer_at_top_left_corner_tilts_fully() {
        let tilt = CardTilt::from_pointer(0.0, 0.0, 20.0, 10.0);
        assert_eq!(tilt.rot_x, 18.0);
        assert_eq!(tilt.rot_y, -18.0);
    }

    #[test]
    fn pointer_at_bottom_right_corner_tilts_fully_the_other_way() {
        let tilt = CardTilt::from_pointer(20.0, 10.0, 20.0, 10.0);
        assert_eq!(tilt.rot_x, -18.0);
        assert_eq!(tilt.rot_y, 18.0);
        assert_eq!(tilt.light_x, 100.0);
    }

    #[test]
    fn zero_sized_card_does_not_divide_by_zero() {
        let tilt = CardTilt::from_pointer(0.0, 0.0, 0.0, 0.0);
        assert_eq!(tilt, CardTilt { rot_x: 0.0, rot_y: 0.0, light_x: 0.0, light_y: 0.0 });
    }

    #[test]
    fn new_card_is_front_facing_and_flat() {
        let card = ProfileCard::new();
        assert!(!card.is_flipped());
        assert_eq!(card.rotation(), (0.0, 0.0));
    }

    #[test]
    fn flip_adds_half_turn() {
        let mut card = ProfileCard::new();
        card.flip();
        assert!(card.is_flipped());
        assert_eq!(card.rotation(), (0.0, 180.0));
    }

    #[test]
    fn flip_twice_returns_to_front() {
        let mut card = ProfileCard::new();
        card.flip();
        card.flip();
        assert!(!card.is_flipped());
    }

    #[test]
    fn tilt_on_flipped_card_is_offset_by_half_turn() {
        let mut card = ProfileCard::new();
        card.flip();
        card.pointer_move(20, 5, 20, 10);
        assert_eq!(card.rotation(), (0.0, 198.0));
    }

    #[test]
    fn leave_resets_tilt_but_keeps_face() {
        let mut card = ProfileCard::new();
        card.flip();
        card.pointer_move(0, 0, 20, 10);
        card.pointer_leave();
        assert!(card.tilt().is_none());
        assert_eq!(card.rotation(), (0.0, 180.0));
    }

    #[test]
    fn flip_clears_tilt() {
        let mut card = ProfileCard::new();
        card.pointer_move(0, 0, 20, 10);
        card.flip();
        assert!(card.tilt().is_none());
    }
}
