//! pigment: perceptual color sampling and contrast adjustment
//!
//! This library reduces an image's pixel population to a small set of theme
//! colors and keeps those colors legible as text backdrops. It is the color
//! math behind image-themed page styling: a representative "dominant" color,
//! a blended "top strip" color, and a contrast-boost transform that pushes
//! ambiguous colors toward clearly-dark or clearly-light without changing
//! what color they read as.
//!
//! # Quick Start
//!
//! ```
//! use pigment::{dominant_color, luminance, ContrastPolicy, Rgb};
//!
//! let pixels = vec![Rgb::new(120, 80, 200); 64];
//! let dominant = dominant_color(&pixels);
//! assert_eq!(dominant, Rgb::new(120, 80, 200));
//!
//! let lum = luminance(dominant);
//! let backdrop = ContrastPolicy::default().apply(dominant, lum);
//! assert_eq!(backdrop.to_string(), format!("{backdrop}"));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! pixel samples (sRGB bytes, from an external pixel source)
//!     |
//!     +---> dominant_color      (bucket tally -> winning-bucket centroid)
//!     |         |
//!     |     luminance            (WCAG relative luminance, 0.0..=1.0)
//!     |         |
//!     |     ContrastPolicy       (two-band nudge toward dark or light)
//!     |         |
//!     |       Hsl                (lightness shift, hue/saturation fixed)
//!     |         |
//!     +---> average_top_color    (plain per-channel mean, never adjusted)
//!               |
//!               v
//!           Rgb -> "R, G, B"     (Display; caller wraps in rgb(...))
//! ```
//!
//! # Color Science
//!
//! Three deliberate choices keep the output colors both representative and
//! legible. Subtle changes here (averaging instead of bucketing, shifting
//! RGB channels instead of HSL lightness, thresholding on lightness instead
//! of luminance) produce visibly wrong page themes, so the rationale is
//! recorded next to the code it justifies.
//!
//! ## Dominant Color: Bucketing, Not Averaging
//!
//! The arithmetic mean of a photo's pixels trends toward a muddy grey that
//! reads as no color at all. [`dominant_color`] instead quantizes each pixel
//! to 4 bits per channel so visually-similar pixels collapse into one of
//! 4096 buckets, tallies bucket frequency, and returns the centroid of the
//! most frequent bucket. The centroid (rather than the bucket's nominal
//! center) means a single-color image returns that color byte-exact.
//!
//! The top-strip color intentionally does the opposite: it IS a plain mean
//! ([`average_top_color`]), because it stands in for a blended backdrop
//! behind a header, not for the image's character color.
//!
//! ## Luminance, Not Lightness, Drives the Policy
//!
//! Whether text reads against a backdrop is a property of physical light,
//! so the decision scalar is WCAG relative luminance ([`luminance`]):
//! channels are gamma-decoded to linear light and weighted by the eye's
//! green-dominant sensitivity (0.2126 R + 0.7152 G + 0.0722 B). HSL
//! lightness would misrank saturated blues and yellows badly (pure blue has
//! HSL lightness 0.5 but luminance 0.07).
//!
//! ## The Shift Happens in HSL
//!
//! Once the policy decides to push a color, the push must not change what
//! color it reads as. [`shift_lightness`] converts to HSL, moves ONLY the
//! lightness channel, and converts back -- the polar-form analog of scaling
//! one channel while the others stay fixed. The shift is capped at a
//! fraction of the remaining headroom toward the extreme, so it saturates
//! short of pure black or white and the adjusted color stays recognizably
//! related to the sampled one.
//!
//! # The Two-Band Policy
//!
//! [`ContrastPolicy`] measures how far the sampled luminance sits from 0.5,
//! the boundary between "reads as dark" and "reads as light" against a
//! near-black or near-white foreground:
//!
//! | distance from 0.5 | band   | nudge | cap  |
//! |-------------------|--------|-------|------|
//! | < 0.1             | strong | 0.25  | 0.8  |
//! | < 0.3             | mild   | 0.15  | 0.25 |
//! | >= 0.3            | none   | --    | --   |
//!
//! Colors near the midpoint are the ones where foreground legibility is
//! most at risk, so they get the strongest push; colors already clearly
//! dark or light are returned untouched (no unnecessary visual drift).
//! Direction follows the luminance side: a dark-reading color is darkened
//! further (reinforcing its pairing with light text), a light-reading color
//! is lightened.
//!
//! All operations are pure, synchronous functions over in-memory values;
//! they may be called concurrently for many images with no shared state.
//! Empty or degenerate pixel populations recover locally to mid-grey --
//! a themed page must always get *some* color.

pub mod adjust;
pub mod color;
pub mod extract;

#[cfg(test)]
mod domain_tests;

pub use adjust::{shift_lightness, AdjustBand, AdjustDirection, ContrastPolicy};
pub use color::{is_dark, luminance, Hsl, Rgb, MIDPOINT};
pub use extract::{average_color, average_top_color, dominant_color};
