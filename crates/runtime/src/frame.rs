use foundation::time::Time;

/// Per-frame metadata for the update-then-render loop.
///
/// The host's frame-timing primitive decides when a frame runs; the frame
/// itself only records its index, the step it was given and the accumulated
/// scene time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Delta time of this frame (seconds).
    pub dt_s: f64,
    /// Scene time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn first() -> Self {
        Self {
            index: 0,
            dt_s: 0.0,
            time: Time::ZERO,
        }
    }

    /// Returns the frame that follows `self` after `dt_s` seconds.
    ///
    /// Negative or non-finite steps are treated as zero.
    pub fn next(self, dt_s: f64) -> Self {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        Self {
            index: self.index + 1,
            dt_s,
            time: self.time.advanced_by(self.dt_s),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::first()
    }
}
