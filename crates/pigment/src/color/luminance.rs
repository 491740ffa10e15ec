//! WCAG relative luminance.
//!
//! Relative luminance is the perceptual brightness scalar that drives every
//! dark-or-light decision in the pipeline. It is computed in linear light:
//! sRGB channels are gamma-decoded first (IEC 61966-2-1 piecewise curve),
//! then weighted by the eye's green-dominant sensitivity.

use super::rgb::Rgb;

/// The perceptual midpoint between "reads as dark" and "reads as light"
/// against a near-black or near-white foreground.
pub const MIDPOINT: f32 = 0.5;

/// Relative luminance of a color, `0.0..=1.0`.
///
/// Implements the WCAG definition: each channel is normalized, linearized
/// (values <= 0.04045 divide by 12.92, the rest follow the 2.4-exponent
/// gamma curve), and the linear channels are combined as
/// `0.2126 R + 0.7152 G + 0.0722 B`.
///
/// Pure and deterministic: equal colors always yield equal luminance.
///
/// # Example
/// ```
/// use pigment::{luminance, Rgb};
///
/// assert_eq!(luminance(Rgb::new(0, 0, 0)), 0.0);
/// assert!((luminance(Rgb::new(255, 0, 0)) - 0.2126).abs() < 1e-3);
/// ```
#[must_use]
pub fn luminance(color: Rgb) -> f32 {
    let lin = |c: f32| -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    let (r, g, b) = color.to_f32();
    0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
}

/// Whether a backdrop with this luminance reads as dark, i.e. pairs with
/// light foreground text.
#[inline]
#[must_use]
pub fn is_dark(luminance: f32) -> bool {
    luminance < MIDPOINT
}
