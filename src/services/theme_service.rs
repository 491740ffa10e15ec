//! Per-image theme derivation.
//!
//! `ThemeService` composes the pigment pipeline the way the page code
//! consumes it: one call per image reference, producing the full
//! [`ImageTheme`] (adjusted dominant backdrop, top-strip tone, luminance,
//! dark/light reading) in a single pass over the samples.

use pigment::{average_top_color, dominant_color, is_dark, luminance, ContrastPolicy};

use crate::error::ThemeError;
use crate::models::{ImageTheme, ThemeConfig};
use crate::services::pixel_source::PixelSource;

/// Derives [`ImageTheme`]s from a pixel source.
///
/// Stateless beyond its configuration: derivations for different images
/// are independent and may run concurrently (`derive` takes `&self`). The
/// service is deliberately cache-oblivious; wrap calls with
/// [`ThemeCache`](crate::services::ThemeCache) to memoize by image
/// reference.
pub struct ThemeService<S> {
    source: S,
    config: ThemeConfig,
    policy: ContrastPolicy,
}

impl<S: PixelSource> ThemeService<S> {
    /// Create a service over a pixel source with the given configuration.
    pub fn new(source: S, config: ThemeConfig) -> Self {
        let policy = config.policy();
        Self {
            source,
            config,
            policy,
        }
    }

    /// Derive the theme for one image reference.
    ///
    /// Pipeline: acquire samples, extract the dominant color, measure its
    /// luminance, boost contrast per policy, average the top strip, format
    /// both colors. Acquisition failures propagate; empty images derive a
    /// mid-grey theme instead of failing.
    pub fn derive(&self, image_ref: &str) -> Result<ImageTheme, ThemeError> {
        let grid = self.source.pixels(image_ref)?;

        let sampled = dominant_color(grid.pixels());
        let lum = luminance(sampled);
        let dark = is_dark(lum);
        let band = self.policy.band(lum);
        let backdrop = self.policy.apply(sampled, lum);

        let top = average_top_color(grid.pixels(), grid.width(), self.config.strip_height);

        tracing::debug!(
            image_ref,
            sampled = %sampled,
            backdrop = %backdrop,
            top = %top,
            luminance = lum,
            dark,
            band = ?band,
            "Derived image theme"
        );

        Ok(ImageTheme {
            dominant_color: backdrop.to_string(),
            average_top_color: top.to_string(),
            luminance: lum,
            is_dark: dark,
        })
    }
}
