use serde::Serialize;

/// The derived theme for one image, ready for style assembly.
///
/// This is everything the page code needs to build its style objects: two
/// formatted color triples (the caller wraps them in `rgb(...)`), the raw
/// luminance of the sampled dominant color, and the dark/light reading that
/// selects the paired foreground text color (dark backdrop -> light text).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageTheme {
    /// Dominant color after the contrast policy, as `"R, G, B"`.
    pub dominant_color: String,

    /// Plain average of the image's top strip, as `"R, G, B"`.
    /// Never contrast-adjusted.
    pub average_top_color: String,

    /// Relative luminance of the sampled (pre-adjustment) dominant color.
    pub luminance: f32,

    /// Whether the backdrop reads as dark, i.e. pairs with light text.
    pub is_dark: bool,
}
