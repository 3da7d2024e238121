//! HSL to hex conversion for the cover gradient stops.

/// Converts an HSL triple (hue in degrees, saturation and lightness in
/// percent) to a lowercase `#rrggbb` string.
///
/// Sextant selection expects a hue already wrapped into `[0, 360)`, see
/// [`normalize_hue`]. Any finite input still yields a well-formed hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        to_channel(r, m),
        to_channel(g, m),
        to_channel(b, m)
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64, m: f64) -> u8 {
    ((v + m) * 255.0).round() as u8
}

/// Wraps a hue in degrees into `[0, 360)`, handling negative values.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    (h % 360.0 + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::{hsl_to_hex, normalize_hue};

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn primary_and_achromatic_anchors() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn every_sextant_produces_well_formed_hex() {
        for h in 0..360 {
            for (s, l) in [(0.0, 0.0), (50.0, 25.0), (100.0, 50.0), (60.0, 90.0)] {
                let hex = hsl_to_hex(f64::from(h), s, l);
                assert!(is_hex_color(&hex), "bad hex {hex} for h={h} s={s} l={l}");
            }
        }
    }

    #[test]
    fn sextant_boundaries_do_not_panic() {
        for h in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 359.999] {
            assert!(is_hex_color(&hsl_to_hex(h, 50.0, 86.0)));
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn normalize_hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-10.0), 350.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-365.0), 355.0);
    }
}
