use scene::components::Rgb;

/// Marker colors indexed by magnitude bucket (`floor(magnitude)`), from
/// teal-green for micro events up to deep red for great earthquakes.
pub const MAGNITUDE_PALETTE: [Rgb; 10] = [
    Rgb::from_hex(0x1abc9c),
    Rgb::from_hex(0x2ecc71),
    Rgb::from_hex(0xa3d955),
    Rgb::from_hex(0xf1e05a),
    Rgb::from_hex(0xf1c40f),
    Rgb::from_hex(0xf39c12),
    Rgb::from_hex(0xe67e22),
    Rgb::from_hex(0xe74c3c),
    Rgb::from_hex(0xc0392b),
    Rgb::from_hex(0x7b1010),
];

/// Color used for markers whose magnitude has no bucket.
pub const DEFAULT_MARKER_COLOR: Rgb = Rgb::from_hex(0xbdc3c7);

/// Palette entry for `magnitude`, or `None` when it is negative, NaN or
/// `>= 10`.
pub fn color_for(magnitude: f64) -> Option<Rgb> {
    let bucket = magnitude_bucket(magnitude)?;
    MAGNITUDE_PALETTE.get(bucket).copied()
}

/// Integer bucket of `magnitude` in `0..=9`.
pub fn magnitude_bucket(magnitude: f64) -> Option<usize> {
    if !(0.0..10.0).contains(&magnitude) {
        return None;
    }
    Some(magnitude.floor() as usize)
}

/// How a marker is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Sphere radius in globe units, before hover scaling.
    pub radius: f64,
    pub hover_scale: f64,
}

impl MarkerStyle {
    pub const fn new(radius: f64, hover_scale: f64) -> Self {
        Self {
            radius,
            hover_scale,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::new(0.01, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MAGNITUDE_PALETTE, color_for, magnitude_bucket};

    #[test]
    fn every_bucket_maps_to_its_entry() {
        for bucket in 0..10 {
            let base = bucket as f64;
            assert_eq!(color_for(base), Some(MAGNITUDE_PALETTE[bucket]));
            assert_eq!(color_for(base + 0.99), Some(MAGNITUDE_PALETTE[bucket]));
        }
    }

    #[test]
    fn out_of_range_has_no_color() {
        assert_eq!(color_for(10.5), None);
        assert_eq!(color_for(10.0), None);
        assert_eq!(color_for(-0.5), None);
        assert_eq!(color_for(f64::NAN), None);
        assert_eq!(magnitude_bucket(9.99), Some(9));
    }

    #[test]
    fn palette_runs_from_cool_to_hot() {
        let first = MAGNITUDE_PALETTE[0];
        let last = MAGNITUDE_PALETTE[9];
        assert!(first.g > first.r);
        assert!(last.r > last.g);
    }
}
