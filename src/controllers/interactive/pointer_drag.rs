/// Tracks the last pointer position while a button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    last: Option<(f64, f64)>,
}

impl PointerDrag {
    pub fn press(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Delta from the previous position to `(x, y)`, or `None` when not
    /// dragging. The previous position is left as is.
    #[must_use]
    pub fn delta(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (last_x, last_y) = self.last?;

        Some((x - last_x, y - last_y))
    }

    /// Records `(x, y)` as the new previous position of an active drag.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.last.is_some() {
            self.last = Some((x, y));
        }
    }

    /// Pointer up and pointer leave both end the drag.
    pub fn release(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}
