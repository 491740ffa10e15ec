//! Reducing a pixel population to one representative color.
//!
//! Two extractors with deliberately different characters:
//!
//! - [`dominant_color`]: frequency-based bucketing. Finds the image's
//!   "character color" -- the color a viewer would name if asked what
//!   color the image is.
//! - [`average_top_color`]: plain per-channel mean over the top strip.
//!   Finds the blended backdrop tone behind a page header.
//!
//! Both are total functions: empty input falls back to mid-grey rather
//! than failing, since a themed page must always render with some color.

mod average;
mod dominant;

pub use average::{average_color, average_top_color};
pub use dominant::dominant_color;
