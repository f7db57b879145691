use glam::Vec2;

/// An opaque sRGB color, alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#06b6d4`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` notation with the alpha clamped to [0, 1].
    pub fn rgba(self, alpha: f32) -> String {
        let a = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, a)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// Minimal 2D drawing target the field renders into.
///
/// Coordinates are in viewport CSS pixels. Implementations own any device
/// pixel ratio scaling.
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32);
}
