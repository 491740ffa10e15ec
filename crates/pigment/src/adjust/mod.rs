//! Saturation-preserving contrast adjustment.
//!
//! The sampled backdrop color must stay legible under fixed near-black or
//! near-white foreground text. [`shift_lightness`] is the mechanism: an HSL
//! lightness move that leaves hue and saturation untouched.
//! [`ContrastPolicy`] is the decision layer: how hard to push, based on how
//! close the sampled luminance sits to the perceptual midpoint.

mod policy;

pub use policy::{AdjustBand, ContrastPolicy};

use crate::color::{Hsl, Rgb};

/// Which way the lightness is pushed.
///
/// A color that reads as dark is darkened further (reinforcing its pairing
/// with light text); a color that reads as light is lightened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    /// Push lightness toward 0.0 (black)
    Darken,
    /// Push lightness toward 1.0 (white)
    Lighten,
}

/// Shift a color's HSL lightness toward one extreme, preserving hue and
/// saturation.
///
/// The move is `nudge` in absolute lightness, but never more than `cap`
/// times the remaining headroom toward the chosen extreme. The shift
/// therefore saturates: with `cap < 1.0` it can never reach pure black or
/// white, so the adjusted color stays recognizably related to the source.
///
/// Both parameters are clamped into `0.0..=1.0` rather than rejected.
/// A `nudge` of 0.0 is the identity.
///
/// # Arguments
/// * `color` - The sampled color
/// * `direction` - Which extreme to move toward
/// * `nudge` - Absolute lightness step (0.0..=1.0)
/// * `cap` - Maximum fraction of the remaining headroom to consume
///
/// # Example
/// ```
/// use pigment::{shift_lightness, AdjustDirection, Hsl, Rgb};
///
/// let red = Rgb::new(200, 40, 40);
/// let darker = shift_lightness(red, AdjustDirection::Darken, 0.15, 0.25);
///
/// let before = Hsl::from(red);
/// let after = Hsl::from(darker);
/// assert!(after.l < before.l);
/// assert!((after.h - before.h).abs() < 1.0);
/// ```
#[must_use]
pub fn shift_lightness(
    color: Rgb,
    direction: AdjustDirection,
    nudge: f32,
    cap: f32,
) -> Rgb {
    let nudge = nudge.clamp(0.0, 1.0);
    let cap = cap.clamp(0.0, 1.0);

    let hsl = Hsl::from(color);
    let shifted = match direction {
        AdjustDirection::Darken => {
            let delta = nudge.min(cap * hsl.l);
            hsl.with_lightness(hsl.l - delta)
        }
        AdjustDirection::Lighten => {
            let delta = nudge.min(cap * (1.0 - hsl.l));
            hsl.with_lightness(hsl.l + delta)
        }
    };
    Rgb::from(shifted)
}
