//! Top-strip average extraction.
//!
//! Unlike the dominant color, the top-strip color deliberately uses a plain
//! per-channel mean with no bucketing: it stands in for the blended
//! backdrop tone a header overlays, not for the image's character color.

use crate::color::Rgb;

/// Per-channel rounded arithmetic mean of a pixel sequence.
///
/// An empty sequence returns [`Rgb::MID_GREY`] rather than failing.
#[must_use]
pub fn average_color(pixels: &[Rgb]) -> Rgb {
    if pixels.is_empty() {
        return Rgb::MID_GREY;
    }

    let mut r_sum = 0u64;
    let mut g_sum = 0u64;
    let mut b_sum = 0u64;
    for &pixel in pixels {
        r_sum += pixel.r as u64;
        g_sum += pixel.g as u64;
        b_sum += pixel.b as u64;
    }

    let count = pixels.len() as u64;
    Rgb::new(
        ((r_sum + count / 2) / count) as u8,
        ((g_sum + count / 2) / count) as u8,
        ((b_sum + count / 2) / count) as u8,
    )
}

/// Average color of the top strip of a row-major pixel grid.
///
/// Takes the first `strip_height` rows of `pixels` (a flattened row-major
/// image of the given `width`) and returns their [`average_color`]. An
/// image shorter than the configured strip is averaged in full; a
/// zero-height strip or empty image falls back to mid-grey.
///
/// # Arguments
/// * `pixels` - Row-major flattened image samples
/// * `width` - Row length in pixels
/// * `strip_height` - Number of top rows to average
///
/// # Example
/// ```
/// use pigment::{average_top_color, Rgb};
///
/// // 1x2 image: black row over white row, strip covers both
/// let pixels = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
/// assert_eq!(average_top_color(&pixels, 1, 2), Rgb::new(128, 128, 128));
/// ```
#[must_use]
pub fn average_top_color(pixels: &[Rgb], width: usize, strip_height: usize) -> Rgb {
    let take = width.saturating_mul(strip_height).min(pixels.len());
    average_color(&pixels[..take])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_white_pair_averages_to_grey() {
        let pixels = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let avg = average_top_color(&pixels, 1, 2);
        assert!(
            avg == Rgb::new(127, 127, 127) || avg == Rgb::new(128, 128, 128),
            "expected integer-rounded mid grey, got {avg:?}"
        );
    }

    #[test]
    fn test_empty_input_falls_back_to_mid_grey() {
        assert_eq!(average_color(&[]), Rgb::MID_GREY);
        assert_eq!(average_top_color(&[], 10, 3), Rgb::MID_GREY);
    }

    #[test]
    fn test_zero_height_strip_falls_back() {
        let pixels = vec![Rgb::new(10, 20, 30); 12];
        assert_eq!(average_top_color(&pixels, 4, 0), Rgb::MID_GREY);
    }

    #[test]
    fn test_strip_taller_than_image_averages_all_rows() {
        // 2x2 image, strip of 10 rows: averages whatever rows exist
        let pixels = [
            Rgb::new(100, 0, 0),
            Rgb::new(200, 0, 0),
            Rgb::new(0, 100, 0),
            Rgb::new(0, 200, 0),
        ];
        assert_eq!(
            average_top_color(&pixels, 2, 10),
            Rgb::new(75, 75, 0)
        );
    }

    #[test]
    fn test_strip_restricts_to_top_rows() {
        // 2x3 image: red top row, green middle, blue bottom
        let pixels = [
            Rgb::new(255, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(0, 0, 255),
        ];
        assert_eq!(average_top_color(&pixels, 2, 1), Rgb::new(255, 0, 0));
        assert_eq!(average_top_color(&pixels, 2, 2), Rgb::new(128, 128, 0));
    }

    #[test]
    fn test_no_bucketing_blends_instead_of_voting() {
        // A majority of dark pixels with a bright minority: the mean moves,
        // where the dominant extractor would snap to the majority
        let mut pixels = vec![Rgb::new(0, 0, 0); 3];
        pixels.push(Rgb::new(255, 255, 255));
        assert_eq!(average_color(&pixels), Rgb::new(64, 64, 64));
    }
}
