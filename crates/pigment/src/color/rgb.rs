//! sRGB color type
//!
//! 8-bit sRGB is the interchange format of the pipeline: pixel samples come
//! in as `Rgb`, and theme colors leave as `Rgb` formatted for style code.

use std::fmt;

/// A color with 8-bit sRGB channels.
///
/// `Rgb` is an immutable value type with no identity beyond its channel
/// values. Channels are always in `0..=255`; every float entry point clamps
/// rather than rejects, so extraction and adjustment can never emit an
/// out-of-range channel.
///
/// The `Display` impl emits the canonical `"R, G, B"` triple consumed by
/// style-assembly code, which wraps it in `rgb(...)` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Mid-grey, the defined fallback for empty or degenerate pixel
    /// populations.
    pub const MID_GREY: Rgb = Rgb {
        r: 128,
        g: 128,
        b: 128,
    };

    /// Create a new Rgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use pigment::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from normalized float channels.
    ///
    /// Rounds and clamps each channel into `0..=255`, so out-of-range
    /// intermediate values from color math are absorbed here rather than
    /// rejected.
    ///
    /// # Arguments
    /// * `r` - Red channel (0.0..=1.0, clamped)
    /// * `g` - Green channel (0.0..=1.0, clamped)
    /// * `b` - Blue channel (0.0..=1.0, clamped)
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: (r * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (g * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (b * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Normalized float channels (each 0.0..=1.0).
    #[inline]
    pub fn to_f32(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    /// Format as the `"R, G, B"` triple, decimal channels joined by `", "`.
    ///
    /// No wrapping parentheses: the caller applies the `rgb(...)` syntax.
    /// The triple is unambiguous and order-preserving, so it round-trips
    /// losslessly to the color it was derived from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}
