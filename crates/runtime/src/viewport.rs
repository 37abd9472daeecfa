use tracing::debug;

/// Device pixel ratios above this are clamped to keep fill cost bounded.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Drawing surface dimensions in CSS pixels plus the backing-store ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pixel_ratio: clamp_pixel_ratio(device_pixel_ratio),
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Backing-store size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    /// Maps a pointer position in CSS pixels to normalized device
    /// coordinates: `x` in `[-1, 1]` left to right, `y` in `[-1, 1]` bottom
    /// to top.
    pub fn to_ndc(&self, x_px: f64, y_px: f64) -> (f64, f64) {
        (
            (x_px / self.width) * 2.0 - 1.0,
            -(y_px / self.height) * 2.0 + 1.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

fn clamp_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Holds the active viewport and at most one pending resize.
///
/// Resize notifications can arrive at any time; they are only applied by
/// [`ViewportLatch::apply_pending`], which the frame loop calls before any
/// hit-testing so a frame never mixes old and new dimensions.
#[derive(Debug, Clone, Default)]
pub struct ViewportLatch {
    current: Viewport,
    pending: Option<Viewport>,
}

impl ViewportLatch {
    pub fn new(initial: Viewport) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Records a resize. A later call before the next frame replaces it.
    pub fn request(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.pending = Some(Viewport::new(width, height, device_pixel_ratio));
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Swaps in the pending viewport, if any, and returns it.
    pub fn apply_pending(&mut self) -> Option<Viewport> {
        let next = self.pending.take()?;
        debug!(
            width = next.width,
            height = next.height,
            pixel_ratio = next.pixel_ratio,
            "viewport resized"
        );
        self.current = next;
        Some(next)
    }
}
