//! Constrained random sampling of the gradient stops.

use crate::color::{hsl_to_hex, normalize_hue};
use rand::Rng;

/// The two gradient stops plus the averaged theme color, as hex strings.
///
/// Sampled once per page load and kept unchanged until unload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    pub left_hex: String,
    pub right_hex: String,
    pub theme_hex: String,
}

struct Stops {
    h1: f64,
    s1: f64,
    l1: f64,
    h2: f64,
    s2: f64,
    l2: f64,
}

fn sample_stops(rng: &mut impl Rng) -> Stops {
    let base_hue = rng.gen_range(0.0..360.0);
    // 16-28 degrees apart reads as "same family" while staying visible.
    let d_hue = rng.gen_range(16.0..28.0);
    let h1 = normalize_hue(base_hue - d_hue / 2.0);
    let h2 = normalize_hue(base_hue + d_hue / 2.0);

    // Moderate saturation so the hue survives the high lightness.
    let s_base: f64 = rng.gen_range(46.0..56.0);
    let s1 = (s_base + rng.gen_range(-3.0..3.0)).clamp(42.0, 60.0);
    let s2 = (s_base + rng.gen_range(-3.0..3.0)).clamp(42.0, 60.0);

    // Asymmetric clamps keep the right stop on the lighter side. The two
    // ranges meet at 90, so an extreme draw can leave both stops at 90.
    let l_base: f64 = rng.gen_range(84.0..88.0);
    let l_delta: f64 = rng.gen_range(10.0..14.0);
    let l1 = (l_base - l_delta).clamp(68.0, 90.0);
    let l2 = (l_base + l_delta).clamp(90.0, 98.0);

    Stops {
        h1,
        s1,
        l1,
        h2,
        s2,
        l2,
    }
}

impl ColorPair {
    /// Samples a light two-stop pair with nearby hues, the left stop darker
    /// than the right, plus a theme color averaged from both stops.
    #[must_use]
    pub fn sample(rng: &mut impl Rng) -> ColorPair {
        let stops = sample_stops(rng);

        let theme_hue = (stops.h1 + stops.h2) / 2.0;
        let theme_sat = (stops.s1 + stops.s2) / 2.0;
        let theme_light = (stops.l1 + stops.l2) / 2.0;

        ColorPair {
            left_hex: hsl_to_hex(stops.h1, stops.s1, stops.l1),
            right_hex: hsl_to_hex(stops.h2, stops.s2, stops.l2),
            theme_hex: hsl_to_hex(theme_hue, theme_sat, theme_light),
        }
    }
}
