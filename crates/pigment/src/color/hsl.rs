//! HSL polar color representation for lightness manipulation.
//!
//! HSL factors a color into hue (what color it reads as), saturation (how
//! colorful it is) and lightness (how close to black or white it sits).
//! This makes the contrast shift trivial: move lightness, leave the other
//! two channels alone, and the adjusted color stays recognizably the same
//! color.
//!
//! # Components
//!
//! - `h`: Hue angle in degrees, `0.0..360.0`
//! - `s`: Saturation, `0.0..=1.0` (0.0 = achromatic)
//! - `l`: Lightness, `0.0..=1.0` (0.0 = black, 1.0 = white)
//!
//! # Note
//!
//! For achromatic colors (saturation 0) hue is undefined; the conversion
//! sets it to 0.0, which is harmless since a lightness shift on a grey
//! produces a grey regardless of hue.

use super::rgb::Rgb;

/// A color in HSL form (hue degrees, saturation, lightness).
///
/// Round-trips with [`Rgb`] within 1 LSB per channel. Construct via
/// `Hsl::from(rgb)`; convert back with `Rgb::from(hsl)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees (0.0..360.0)
    pub h: f32,
    /// Saturation (0.0 = grey, 1.0 = fully saturated)
    pub s: f32,
    /// Lightness (0.0 = black, 1.0 = white)
    pub l: f32,
}

impl Hsl {
    /// Return the same hue and saturation with a replacement lightness.
    ///
    /// Lightness is clamped into `0.0..=1.0`.
    #[inline]
    pub fn with_lightness(self, l: f32) -> Self {
        Self {
            h: self.h,
            s: self.s,
            l: l.clamp(0.0, 1.0),
        }
    }
}

impl From<Rgb> for Hsl {
    /// Convert sRGB channels to HSL (Cartesian to polar).
    ///
    /// Standard max/min formulation: lightness is the midpoint of the
    /// extreme channels, saturation the chroma normalized by the headroom
    /// available at that lightness, hue the sector angle of the dominant
    /// channel.
    fn from(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_f32();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic: hue undefined, saturation zero
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let sector = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Self { h, s, l }
    }
}

impl From<Hsl> for Rgb {
    /// Convert HSL back to sRGB (polar to Cartesian).
    ///
    /// Uses the standard chroma/sector formulation; the resulting float
    /// channels are rounded and clamped into `0..=255` by
    /// [`Rgb::from_f32`].
    fn from(hsl: Hsl) -> Self {
        let h = ((hsl.h % 360.0) + 360.0) % 360.0;
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::from_f32(r + m, g + m, b + m)
    }
}
