//! The two-band contrast policy.
//!
//! Decides how hard to push a sampled color based on how close its
//! luminance sits to the perceptual midpoint. The band boundaries and
//! magnitude pairs are named configuration, not magic numbers, so they can
//! be tuned without touching the algorithm's structure.

use crate::color::{Rgb, MIDPOINT};

use super::{shift_lightness, AdjustDirection};

/// Which adjustment band a luminance falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustBand {
    /// Within the strong band: legibility most at risk, hardest push
    Strong,
    /// Within the mild band: moderately ambiguous
    Mild,
    /// Outside both bands: already clearly dark or light, left untouched
    Unchanged,
}

/// Contrast-boost policy: distance bands and magnitude pairs.
///
/// The policy measures `|0.5 - luminance|` -- how far the sampled color
/// sits from the boundary between "reads as dark" and "reads as light" --
/// and picks one of three responses:
///
/// - distance < `strong_band`: strong push (`strong_nudge`/`strong_cap`)
/// - distance < `mild_band`: mild push (`mild_nudge`/`mild_cap`)
/// - otherwise: identity
///
/// Direction follows the luminance side of the midpoint: dark colors are
/// darkened further, light colors lightened.
///
/// # Defaults
///
/// The defaults (bands 0.1/0.3, magnitudes 0.25/0.8 and 0.15/0.25) are the
/// tuning in production use; override fields via the builder methods to
/// experiment.
///
/// # Example
///
/// ```
/// use pigment::{luminance, ContrastPolicy, Rgb};
///
/// let policy = ContrastPolicy::default();
///
/// // Clearly dark: left untouched
/// let navy = Rgb::new(10, 10, 60);
/// assert_eq!(policy.apply(navy, luminance(navy)), navy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPolicy {
    /// Distance band for the strong response.
    pub strong_band: f32,
    /// Distance band for the mild response.
    pub mild_band: f32,
    /// Lightness step inside the strong band.
    pub strong_nudge: f32,
    /// Headroom cap inside the strong band.
    pub strong_cap: f32,
    /// Lightness step inside the mild band.
    pub mild_nudge: f32,
    /// Headroom cap inside the mild band.
    pub mild_cap: f32,
}

impl Default for ContrastPolicy {
    fn default() -> Self {
        Self {
            strong_band: 0.1,
            mild_band: 0.3,
            strong_nudge: 0.25,
            strong_cap: 0.8,
            mild_nudge: 0.15,
            mild_cap: 0.25,
        }
    }
}

impl ContrastPolicy {
    /// Create a policy with the default bands and magnitudes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strong and mild distance bands.
    #[inline]
    pub fn bands(mut self, strong: f32, mild: f32) -> Self {
        self.strong_band = strong;
        self.mild_band = mild;
        self
    }

    /// Set the strong-band magnitude pair.
    #[inline]
    pub fn strong(mut self, nudge: f32, cap: f32) -> Self {
        self.strong_nudge = nudge;
        self.strong_cap = cap;
        self
    }

    /// Set the mild-band magnitude pair.
    #[inline]
    pub fn mild(mut self, nudge: f32, cap: f32) -> Self {
        self.mild_nudge = nudge;
        self.mild_cap = cap;
        self
    }

    /// The band a luminance value falls into.
    #[must_use]
    pub fn band(&self, luminance: f32) -> AdjustBand {
        let distance = (MIDPOINT - luminance).abs();
        if distance < self.strong_band {
            AdjustBand::Strong
        } else if distance < self.mild_band {
            AdjustBand::Mild
        } else {
            AdjustBand::Unchanged
        }
    }

    /// The push direction for a luminance value.
    #[must_use]
    pub fn direction(&self, luminance: f32) -> AdjustDirection {
        if luminance < MIDPOINT {
            AdjustDirection::Darken
        } else {
            AdjustDirection::Lighten
        }
    }

    /// Apply the policy to a sampled color.
    ///
    /// `luminance` must be the relative luminance of `color` (the caller
    /// usually has it on hand already for the dark/light text decision).
    /// Outside both bands the input color is returned bit-identical.
    #[must_use]
    pub fn apply(&self, color: Rgb, luminance: f32) -> Rgb {
        let direction = self.direction(luminance);
        match self.band(luminance) {
            AdjustBand::Strong => {
                shift_lightness(color, direction, self.strong_nudge, self.strong_cap)
            }
            AdjustBand::Mild => {
                shift_lightness(color, direction, self.mild_nudge, self.mild_cap)
            }
            AdjustBand::Unchanged => color,
        }
    }
}
