//! Swatch - contrast-safe theme colors derived from source images.
//!
//! The color math lives in the vendored [`pigment`] crate; this crate is
//! the boundary around it: the pixel-source seam, the per-image theme
//! derivation service, the caller-side memoization wrapper, and
//! configuration. Pixel acquisition (fetching and decoding images) is an
//! external collaborator's concern -- implement [`services::PixelSource`]
//! to plug one in.

pub mod error;
pub mod models;
pub mod services;

pub use error::{SourceError, ThemeError};
pub use models::{ImageTheme, ThemeConfig};
pub use services::{PixelGrid, PixelSource, ThemeCache, ThemeService};
