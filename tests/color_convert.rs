use hyprtint::color::convert::{hls_to_rgb, rgb_to_hls};

#[test]
fn primaries_to_hls() {
    assert_eq!(rgb_to_hls([255, 0, 0]), [0, 50, 100]);
    assert_eq!(rgb_to_hls([0, 255, 0]), [120, 50, 100]);
    assert_eq!(rgb_to_hls([0, 0, 255]), [240, 50, 100]);
}

#[test]
fn primaries_from_hls() {
    assert_eq!(hls_to_rgb([0, 50, 100]), [255, 0, 0]);
    assert_eq!(hls_to_rgb([120, 50, 100]), [0, 255, 0]);
    assert_eq!(hls_to_rgb([240, 50, 100]), [0, 0, 255]);
}

#[test]
fn achromatic_yields_zero_hue_and_saturation() {
    assert_eq!(rgb_to_hls([0, 0, 0]), [0, 0, 0]);
    assert_eq!(rgb_to_hls([255, 255, 255]), [0, 100, 0]);
    assert_eq!(rgb_to_hls([128, 128, 128]), [0, 50, 0]);
}

#[test]
fn zero_saturation_yields_grey() {
    assert_eq!(hls_to_rgb([0, 0, 0]), [0, 0, 0]);
    assert_eq!(hls_to_rgb([0, 100, 0]), [255, 255, 255]);
    // Hue is irrelevant once saturation is zero.
    assert_eq!(hls_to_rgb([90, 50, 0]), [127, 127, 127]);
}

#[test]
fn hue_wraps_a_full_turn() {
    assert_eq!(hls_to_rgb([360, 50, 100]), [255, 0, 0]);
}

#[test]
fn mixed_triples_truncate() {
    // Components truncate toward zero at every conversion; these are the
    // exact truncated values, not rounded ones.
    assert_eq!(rgb_to_hls([51, 102, 153]), [210, 40, 49]);
    assert_eq!(rgb_to_hls([10, 20, 30]), [210, 7, 50]);
    assert_eq!(rgb_to_hls([200, 100, 50]), [20, 49, 60]);
    assert_eq!(hls_to_rgb([180, 25, 75]), [15, 111, 111]);
    assert_eq!(hls_to_rgb([300, 60, 40]), [193, 112, 193]);
}

#[test]
fn truncation_loss_is_permanent() {
    // Near-black input collapses: lightness truncates to 0 on the way out,
    // so the way back cannot recover the original channels.
    assert_eq!(rgb_to_hls([1, 2, 3]), [210, 0, 50]);
    assert_eq!(hls_to_rgb([210, 0, 50]), [0, 0, 0]);
}

#[test]
fn round_trip_exact_for_primaries_and_extremes() {
    for rgb in [
        [0, 0, 0],
        [255, 255, 255],
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
    ] {
        assert_eq!(hls_to_rgb(rgb_to_hls(rgb)), rgb);
    }
}

#[test]
fn round_trip_greys_within_truncation_bound() {
    // Lightness quantizes to 1% steps, so a grey can drift by up to three
    // channel units across a round trip, never more.
    for v in 0..=255 {
        let rgb = [v, v, v];
        let back = hls_to_rgb(rgb_to_hls(rgb));
        for (a, b) in rgb.iter().zip(&back) {
            assert!(
                (a - b).abs() <= 3,
                "grey {v} round-tripped to {back:?}"
            );
        }
    }
}

#[test]
fn round_trip_grid_within_truncation_bound() {
    let mut worst = 0;
    for r in (0..=255).step_by(17) {
        for g in (0..=255).step_by(17) {
            for b in (0..=255).step_by(17) {
                let rgb = [r, g, b];
                let back = hls_to_rgb(rgb_to_hls(rgb));
                for (x, y) in rgb.iter().zip(&back) {
                    worst = worst.max((x - y).abs());
                }
            }
        }
    }
    assert!(worst <= 8, "worst round-trip drift was {worst}");
}
