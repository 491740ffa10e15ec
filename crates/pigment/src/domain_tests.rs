//! Domain-critical regression tests for pigment.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use crate::adjust::{AdjustBand, AdjustDirection, ContrastPolicy};
    use crate::color::{is_dark, luminance, Hsl, Rgb, MIDPOINT};
    use crate::extract::{average_top_color, dominant_color};

    // ========================================================================
    // GAP 1: Luminance must be computed in linear light, not on raw bytes
    // ========================================================================

    /// If this breaks, it means: luminance is being computed on raw sRGB
    /// bytes instead of gamma-decoded linear channels. sRGB 128 grey is
    /// linear ~0.216, not 0.5; a byte-space computation would classify it
    /// as sitting on the midpoint and route it into the wrong policy band.
    #[test]
    fn test_luminance_gamma_decoding() {
        let lum_128 = luminance(Rgb::new(128, 128, 128));
        assert!(
            (lum_128 - 0.216).abs() < 0.005,
            "REGRESSION: sRGB 128 grey produced luminance {lum_128}, expected ~0.216. \
             If ~0.5, channels are not being gamma-decoded."
        );

        // sRGB 188 is the grey that actually sits on the midpoint
        let lum_188 = luminance(Rgb::new(188, 188, 188));
        assert!(
            (lum_188 - 0.5).abs() < 0.01,
            "REGRESSION: sRGB 188 grey produced luminance {lum_188}, expected ~0.5."
        );
    }

    // ========================================================================
    // GAP 2: The policy's identity guarantee outside the bands
    // ========================================================================

    /// If this breaks, it means: the adjuster is touching colors that are
    /// already clearly dark or clearly light, causing visible drift on
    /// images whose theme color needed no help.
    #[test]
    fn test_identity_outside_bands_is_bit_exact() {
        let policy = ContrastPolicy::default();
        let clearly_decided = [
            Rgb::new(0, 0, 0),
            Rgb::new(25, 30, 40),
            Rgb::new(64, 0, 128),
            Rgb::new(255, 255, 200),
            Rgb::new(255, 255, 255),
        ];
        for color in clearly_decided {
            let lum = luminance(color);
            assert!(
                (MIDPOINT - lum).abs() >= policy.mild_band,
                "fixture {color:?} is no longer outside the bands (lum {lum})"
            );
            assert_eq!(
                policy.apply(color, lum),
                color,
                "REGRESSION: out-of-band color {color:?} was modified"
            );
        }
    }

    // ========================================================================
    // GAP 3: In-band adjustment must strictly disambiguate
    // ========================================================================

    /// If this breaks, it means: the lightness shift is moving colors
    /// toward the midpoint (or not at all), making near-ambiguous backdrops
    /// worse instead of better. The whole point of the strong band is that
    /// colors closest to 0.5 end up furthest from it.
    #[test]
    fn test_strong_band_strictly_increases_midpoint_distance() {
        let policy = ContrastPolicy::default();

        // Near-midpoint colors on both sides, chromatic and grey
        let ambiguous = [
            Rgb::new(186, 186, 186),
            Rgb::new(200, 180, 170),
            Rgb::new(120, 200, 120),
            Rgb::new(170, 170, 255),
        ];
        for color in ambiguous {
            let lum = luminance(color);
            assert_eq!(
                policy.band(lum),
                AdjustBand::Strong,
                "fixture {color:?} drifted out of the strong band (lum {lum})"
            );

            let adjusted = policy.apply(color, lum);
            let adjusted_lum = luminance(adjusted);
            assert!(
                (MIDPOINT - adjusted_lum).abs() > (MIDPOINT - lum).abs(),
                "REGRESSION: {color:?} moved toward the midpoint \
                 ({lum} -> {adjusted_lum})"
            );
        }
    }

    /// If this breaks, it means: the direction choice is inverted. A color
    /// reading as dark must get darker (its light text gains contrast), a
    /// color reading as light must get lighter.
    #[test]
    fn test_adjustment_direction_reinforces_reading() {
        let policy = ContrastPolicy::default();

        let dark_side = Rgb::new(150, 150, 150); // mild band, below midpoint
        let dark_lum = luminance(dark_side);
        assert!(is_dark(dark_lum));
        assert!(
            luminance(policy.apply(dark_side, dark_lum)) < dark_lum,
            "REGRESSION: dark-reading color was lightened"
        );

        let light_side = Rgb::new(210, 210, 210); // mild band, above midpoint
        let light_lum = luminance(light_side);
        assert!(!is_dark(light_lum));
        assert!(
            luminance(policy.apply(light_side, light_lum)) > light_lum,
            "REGRESSION: light-reading color was darkened"
        );
    }

    // ========================================================================
    // GAP 4: Hue and saturation invariance under adjustment
    // ========================================================================

    /// If this breaks, it means: the adjustment is moving more than the
    /// lightness channel, so the "adjusted dominant" no longer reads as
    /// the same color as the image it came from.
    #[test]
    fn test_adjust_preserves_hue_and_saturation() {
        let policy = ContrastPolicy::default();
        let chromatic = [
            Rgb::new(200, 120, 90),
            Rgb::new(90, 170, 200),
            Rgb::new(170, 140, 210),
        ];
        for color in chromatic {
            let lum = luminance(color);
            let adjusted = policy.apply(color, lum);
            assert_ne!(adjusted, color, "fixture {color:?} should be in-band");

            let before = Hsl::from(color);
            let after = Hsl::from(adjusted);
            assert!(
                (before.h - after.h).abs() < 2.0,
                "REGRESSION: hue drifted for {color:?}: {} -> {}",
                before.h,
                after.h
            );
            assert!(
                (before.s - after.s).abs() < 0.03,
                "REGRESSION: saturation drifted for {color:?}: {} -> {}",
                before.s,
                after.s
            );
        }
    }

    // ========================================================================
    // GAP 5: Dominant color must vote, not blend
    // ========================================================================

    /// If this breaks, it means: the dominant extractor degenerated into a
    /// plain average. A half-red half-blue image must return a red (the
    /// majority character color), not the purple mean no pixel actually
    /// has.
    #[test]
    fn test_dominant_votes_instead_of_blending() {
        let mut pixels = vec![Rgb::new(220, 20, 20); 60];
        pixels.extend(vec![Rgb::new(20, 20, 220); 40]);

        let dominant = dominant_color(&pixels);
        assert_eq!(
            dominant,
            Rgb::new(220, 20, 20),
            "REGRESSION: expected the majority red, got {dominant:?} \
             (a purple here means the extractor is averaging)"
        );
    }

    /// If this breaks, it means: bucket traversal order became
    /// nondeterministic (e.g. a HashMap crept in), so the same image can
    /// theme a page differently across requests.
    #[test]
    fn test_dominant_tie_break_is_stable() {
        let pixels = [
            Rgb::new(40, 200, 40),
            Rgb::new(200, 40, 40),
            Rgb::new(40, 200, 40),
            Rgb::new(200, 40, 40),
        ];
        for _ in 0..10 {
            assert_eq!(dominant_color(&pixels), Rgb::new(40, 200, 40));
        }
    }

    // ========================================================================
    // GAP 6: Degenerate input recovers, never fails
    // ========================================================================

    /// If this breaks, it means: an empty or degenerate pixel population
    /// propagates an error or panic out of the core. A themed page must
    /// always get some color; mid-grey is the defined fallback.
    #[test]
    fn test_degenerate_inputs_fall_back_to_mid_grey() {
        assert_eq!(dominant_color(&[]), Rgb::MID_GREY);
        assert_eq!(average_top_color(&[], 0, 0), Rgb::MID_GREY);
        assert_eq!(average_top_color(&[], 640, 16), Rgb::MID_GREY);

        // A single pixel is degenerate but valid
        let single = [Rgb::new(9, 9, 9)];
        assert_eq!(dominant_color(&single), Rgb::new(9, 9, 9));
        assert_eq!(average_top_color(&single, 1, 16), Rgb::new(9, 9, 9));
    }

    // ========================================================================
    // End-to-end scenario from production: the pure-red listing image
    // ========================================================================

    /// Walks the full pipeline for a solid red image and checks every
    /// intermediate the page code consumes: luminance ~0.2126 puts red in
    /// the mild band, the backdrop darkens without changing hue, and the
    /// paired text color is the light one.
    #[test]
    fn test_pure_red_image_end_to_end() {
        let pixels = vec![Rgb::new(255, 0, 0); 32 * 32];

        let dominant = dominant_color(&pixels);
        assert_eq!(dominant, Rgb::new(255, 0, 0));

        let lum = luminance(dominant);
        assert!((lum - 0.2126).abs() < 1e-3);

        // distance ~0.287: mild band, darkening
        let policy = ContrastPolicy::default();
        assert_eq!(policy.band(lum), AdjustBand::Mild);
        assert_eq!(policy.direction(lum), AdjustDirection::Darken);

        let backdrop = policy.apply(dominant, lum);
        assert!(
            backdrop.r < dominant.r,
            "backdrop should be a darker red, got {backdrop:?}"
        );
        assert_eq!(backdrop.g, 0);
        assert_eq!(backdrop.b, 0);
        let hue = Hsl::from(backdrop).h;
        assert!(hue.abs() < 1.0, "red hue must survive, got {hue}");

        // Dark backdrop pairs with light text
        assert!(is_dark(lum));

        // Formatted for the style layer
        let formatted = backdrop.to_string();
        assert_eq!(formatted, format!("{}, 0, 0", backdrop.r));
    }
}
