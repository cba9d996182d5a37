/// Pointer travel, in pixels, below which a press and release counts as a click.
pub const CLICK_TOLERANCE: f64 = 4.0;

/// Tracks one mouse press so the map can tell a pan from a click.
///
/// Browsers deliver `mousedown`, `mousemove`*, `mouseup`, then `click`. The
/// click only picks a location when the pointer stayed within
/// [`CLICK_TOLERANCE`] of where it was pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pressed_at: Option<(f64, f64)>,
    last: (f64, f64),
    dragged: bool,
}

impl DragState {
    pub fn press(&mut self, x: f64, y: f64) {
        self.pressed_at = Some((x, y));
        self.last = (x, y);
        self.dragged = false;
    }

    /// Returns how far the pointer moved since the previous event while the
    /// button is held, or `None` when no press is active.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (start_x, start_y) = self.pressed_at?;

        if (x - start_x).hypot(y - start_y) > CLICK_TOLERANCE {
            self.dragged = true;
        }

        let delta = (x - self.last.0, y - self.last.1);
        self.last = (x, y);
        Some(delta)
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Consumes the gesture, returning whether the following click should
    /// pick a location.
    pub fn take_click(&mut self) -> bool {
        let dragged = self.dragged;
        *self = Self::default();
        !dragged
    }
}
