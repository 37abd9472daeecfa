/// 8-bit sRGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// CSS hex notation, e.g. `#1abc9c`.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape3D {
    Sphere { radius: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drawable3D {
    pub shape: Shape3D,
    pub color: Rgb,
    /// Whether pointer rays are tested against this drawable.
    pub pickable: bool,
}

impl Drawable3D {
    pub fn sphere(radius: f64, color: Rgb) -> Self {
        Self {
            shape: Shape3D::Sphere { radius },
            color,
            pickable: true,
        }
    }

    pub fn non_pickable(mut self) -> Self {
        self.pickable = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Drawable3D, Rgb, Shape3D};

    #[test]
    fn create_sphere_drawable() {
        let drawable = Drawable3D::sphere(1.5, Rgb::WHITE);
        assert!(matches!(drawable.shape, Shape3D::Sphere { .. }));
        assert!(drawable.pickable);
        assert!(!drawable.non_pickable().pickable);
    }

    #[test]
    fn hex_round_trips_to_css() {
        let c = Rgb::from_hex(0x1abc9c);
        assert_eq!((c.r, c.g, c.b), (0x1a, 0xbc, 0x9c));
        assert_eq!(c.to_css(), "#1abc9c");
        assert_eq!(Rgb::WHITE.to_css(), "#ffffff");
    }
}
