//! Color types and conversion utilities
//!
//! This module provides the value types the sampling pipeline passes around:
//!
//! - **Rgb**: 8-bit sRGB channels. Use for input/output -- pixel samples in,
//!   formatted theme colors out.
//! - **Hsl**: hue/saturation/lightness. Use for the lightness shift, where
//!   exactly one perceptual channel must move while the others stay fixed.
//!
//! # Example
//!
//! ```
//! use pigment::{Hsl, Rgb};
//!
//! // A sampled pixel (sRGB)
//! let rgb = Rgb::new(128, 64, 32);
//!
//! // Convert to HSL to manipulate lightness
//! let hsl = Hsl::from(rgb);
//! let darker = Rgb::from(hsl.with_lightness(hsl.l - 0.1));
//! assert!(darker.r < rgb.r);
//! ```

mod hsl;
mod luminance;
mod rgb;

pub use hsl::Hsl;
pub use luminance::{is_dark, luminance, MIDPOINT};
pub use rgb::Rgb;
