// Last known cursor position in logical viewport coordinates

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Sentinel used while the cursor is outside the page. Far enough away
    /// that the attraction term is negligible.
    pub const FAR_AWAY: f64 = -9999.0;

    pub fn far_away() -> Pointer {
        Pointer {
            x: Pointer::FAR_AWAY,
            y: Pointer::FAR_AWAY,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn reset(&mut self) {
        *self = Pointer::far_away();
    }

    pub fn is_tracking(&self) -> bool {
        *self != Pointer::far_away()
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Pointer::far_away()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_far_away_and_resets() {
        let mut pointer = Pointer::default();
        assert!(!pointer.is_tracking());
        pointer.move_to(10.0, 20.0);
        assert!(pointer.is_tracking());
        assert_eq!(pointer, Pointer { x: 10.0, y: 20.0 });
        pointer.reset();
        assert_eq!(pointer, Pointer::far_away());
    }
}
