//! Pointer position and click/drag discrimination.

use foundation::math::Vec2;

/// Tracks the last pointer position and whether the pointer moved since the
/// most recent press.
///
/// Sequencing contract:
/// - `press` clears the drag flag.
/// - `move_to` sets it.
/// - A click is a real click only when the flag is clear at click time, so
///   any movement between press and click turns that click into a drag.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
    dragging: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x_px: f64, y_px: f64) {
        self.position = Some(Vec2::new(x_px, y_px));
        self.dragging = true;
    }

    pub fn press(&mut self) {
        self.dragging = false;
    }

    /// Last known pointer position in CSS pixels, if the pointer has been
    /// seen over the surface.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a click arriving now should be treated as a click rather than
    /// the end of a drag.
    pub fn is_click(&self) -> bool {
        !self.dragging
    }
}
