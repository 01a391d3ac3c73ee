//! RGB/HLS conversion over integer triples.
//!
//! Both directions normalize with the source scale, run the standard
//! hue/lightness/saturation transform on unit-range floats, de-normalize with
//! the target scale, and truncate each component toward zero. Truncation is
//! intentional: sub-unit precision is dropped at every conversion, and tests
//! assert the truncated values. Out-of-range input is not validated; it flows
//! through the arithmetic and comes out as whatever the math produces.

/// Divisors for RGB triples: each channel spans 0..=255.
pub const RGB_SCALE: [f64; 3] = [255.0, 255.0, 255.0];
/// Divisors for HLS triples: hue spans 0..=360 degrees, lightness and
/// saturation 0..=100.
pub const HLS_SCALE: [f64; 3] = [360.0, 100.0, 100.0];

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Divide each component by the matching scale entry.
fn normalize(color: [i32; 3], scale: [f64; 3]) -> [f64; 3] {
    [
        f64::from(color[0]) / scale[0],
        f64::from(color[1]) / scale[1],
        f64::from(color[2]) / scale[2],
    ]
}

/// Multiply each component by the matching scale entry and truncate.
#[allow(clippy::cast_possible_truncation)]
fn quantize(color: [f64; 3], scale: [f64; 3]) -> [i32; 3] {
    [
        (color[0] * scale[0]) as i32,
        (color[1] * scale[1]) as i32,
        (color[2] * scale[2]) as i32,
    ]
}

/// Convert an RGB triple (0..=255 per channel) to an HLS triple
/// (hue 0..=360, lightness and saturation 0..=100).
///
/// Achromatic input yields hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hls(rgb: [i32; 3]) -> [i32; 3] {
    let [r, g, b] = normalize(rgb, RGB_SCALE);

    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;

    if minc == maxc {
        return quantize([0.0, l, 0.0], HLS_SCALE);
    }

    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    // Hue wraps a full turn; Euclidean remainder keeps negative sectors positive.
    let h = (h / 6.0).rem_euclid(1.0);

    quantize([h, l, s], HLS_SCALE)
}

/// Convert an HLS triple (hue 0..=360, lightness and saturation 0..=100) to
/// an RGB triple (0..=255 per channel).
///
/// Zero saturation yields a grey. Hue outside 0..=360 wraps.
#[must_use]
pub fn hls_to_rgb(hls: [i32; 3]) -> [i32; 3] {
    let [h, l, s] = normalize(hls, HLS_SCALE);

    if s == 0.0 {
        return quantize([l, l, l], RGB_SCALE);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;

    quantize(
        [
            hue_channel(m1, m2, h + ONE_THIRD),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - ONE_THIRD),
        ],
        RGB_SCALE,
    )
}

/// One channel of the piecewise hue-sector ramp.
fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}
