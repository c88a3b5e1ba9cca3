use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels and a 0..1 alpha, as a canvas fill style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Random orange-to-yellow particle color.
    ///
    /// Green is drawn from 185..885 and saturates at 255, so most particles
    /// come out pure yellow with the occasional deeper orange.
    pub fn warm<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let g = 185 + rng.gen_range(0..700u32);
        Self::new(255, g.min(255) as u8, 0, 1.0)
    }

    /// CSS `rgba()` string
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
