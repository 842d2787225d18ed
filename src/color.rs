//! Color type and the fixed demo palette.
//!
//! Colors are 8-bit RGBA. The palette constants mirror the platform's packed
//! `0xAARRGGBB` color integers so shape tables can be written the same way.

use std::fmt;

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = 0xFF;

    pub const WHITE: Rgba8 = argb8_packed(0xFFFF_FFFF);
    pub const BLACK: Rgba8 = argb8_packed(0xFF00_0000);
    pub const RED: Rgba8 = argb8_packed(0xFFFF_0000);
    pub const GREEN: Rgba8 = argb8_packed(0xFF00_FF00);
    pub const BLUE: Rgba8 = argb8_packed(0xFF00_00FF);
    pub const TRANSPARENT: Rgba8 = argb8_packed(0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / Self::BASE_MASK as f64
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.a)
        }
    }
}

/// Create an Rgba8 from a packed ARGB value (0xAARRGGBB).
pub const fn argb8_packed(v: u32) -> Rgba8 {
    Rgba8::new((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
}

// ============================================================================
// Tests
// ============================================================================
