use mc_core::config::{FIXED_BLACK_GRAY, FIXED_WHITE_GRAY, FilterConfig};
use mc_core::gray::{GrayBuffer, TONE_BLACK, TONE_WHITE};

use crate::histogram::Histogram;

/// The two calibrated brightness cut points.
///
/// Classifies any brightness `b` as black (`b < black_gray`), gray
/// (`black_gray <= b < white_gray`), or white (`b >= white_gray`).
/// Invariant: `black_gray < white_gray`. Computed once per image, immutable
/// afterwards.
///
/// # Example
/// ```
/// use mc_filter::tone::Thresholds;
/// let t = Thresholds::fixed();
/// assert!(t.black_gray < t.white_gray);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// Brightness below this is black.
    pub black_gray: u8,
    /// Brightness at or above this is white.
    pub white_gray: u8,
}

impl Thresholds {
    /// The fixed fallback pair used when calibration is skipped.
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            black_gray: FIXED_BLACK_GRAY,
            white_gray: FIXED_WHITE_GRAY,
        }
    }
}

/// Pick the gray band half-width from the band balance.
///
/// The mid band is compared against the dark/light average with fixed
/// multiplicative breakpoints, first match wins: a mid-heavy image gets a
/// narrow band, an image with almost no mid tones gets a wide one.
fn gray_range(dark: u64, mid: u64, light: u64) -> i32 {
    let avg = (dark + light) as f64 / 2.0;
    let mid = mid as f64;
    if mid > avg * 2.0 {
        20
    } else if mid < avg / 10.0 {
        60
    } else if mid < avg / 6.0 {
        40
    } else if mid < avg / 2.0 {
        30
    } else {
        25
    }
}

/// Derive thresholds from a brightness histogram.
///
/// Anchors the gray band on the 20th-percentile brightness, widens it by the
/// band-balance heuristic, then applies the two sequential edge clamps so the
/// pair stays inside [0, 255]. Total function: any histogram, including one
/// with all mass in a single bucket, yields an ordered pair.
///
/// # Example
/// ```
/// use mc_core::config::FilterConfig;
/// use mc_core::gray::GrayBuffer;
/// use mc_filter::histogram::Histogram;
/// use mc_filter::tone::calibrate;
/// let buf = GrayBuffer::filled(64, 64, 128);
/// let t = calibrate(&Histogram::from_buffer(&buf), &FilterConfig::default());
/// assert!(t.black_gray <= 128 && 128 < t.white_gray);
/// ```
#[must_use]
pub fn calibrate(hist: &Histogram, config: &FilterConfig) -> Thresholds {
    let bands = hist.band_counts(config.dark_band_end, config.light_band_start);
    let range = gray_range(bands.dark, bands.mid, bands.light);

    let anchor = i32::from(hist.percentile_point(config.percentile_divisor));
    let mut black_gray = anchor - range;
    let mut white_gray = anchor + range;

    // Edge clamps, both applied unconditionally in this order.
    let offset = (black_gray - white_gray).abs();
    if black_gray < range {
        black_gray += offset;
        white_gray += offset;
    }
    if white_gray > 255 - range {
        black_gray -= offset;
        white_gray -= offset;
    }

    let black_gray = black_gray.clamp(0, 255) as u8;
    let white_gray = white_gray.clamp(0, 255) as u8;
    if black_gray >= white_gray {
        // Only reachable through a pathological clamp collapse.
        log::warn!("calibration collapsed ({black_gray}, {white_gray}), using fixed thresholds");
        return Thresholds::fixed();
    }
    Thresholds {
        black_gray,
        white_gray,
    }
}

/// Map one brightness value to one of the three tones.
///
/// # Example
/// ```
/// use mc_filter::tone::{Thresholds, classify};
/// let t = Thresholds { black_gray: 75, white_gray: 115 };
/// assert_eq!(classify(0, t, 128), 0);
/// assert_eq!(classify(80, t, 128), 128);
/// assert_eq!(classify(200, t, 128), 255);
/// ```
#[inline(always)]
#[must_use]
pub fn classify(brightness: u8, thresholds: Thresholds, gray_tone: u8) -> u8 {
    if brightness < thresholds.black_gray {
        TONE_BLACK
    } else if brightness < thresholds.white_gray {
        gray_tone
    } else {
        TONE_WHITE
    }
}

/// Map every pixel through [`classify`], producing a three-tone image.
#[must_use]
pub fn tone_map(src: &GrayBuffer, thresholds: Thresholds, gray_tone: u8) -> GrayBuffer {
    GrayBuffer {
        data: src
            .data
            .iter()
            .map(|&b| classify(b, thresholds, gray_tone))
            .collect(),
        width: src.width,
        height: src.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::gray::TONE_GRAY;

    fn hist_all_at(brightness: u8, pixels: u32) -> Histogram {
        let mut counts = [0u32; 256];
        counts[brightness as usize] = pixels;
        Histogram { counts }
    }

    #[test]
    fn classify_is_exhaustively_three_way() {
        let t = Thresholds {
            black_gray: 75,
            white_gray: 115,
        };
        for b in 0..=255u8 {
            let tone = classify(b, t, TONE_GRAY);
            if b < 75 {
                assert_eq!(tone, TONE_BLACK, "brightness {b}");
            } else if b < 115 {
                assert_eq!(tone, TONE_GRAY, "brightness {b}");
            } else {
                assert_eq!(tone, TONE_WHITE, "brightness {b}");
            }
        }
    }

    #[test]
    fn calibrate_brackets_a_single_occupied_bucket() {
        let t = calibrate(&hist_all_at(128, 4096), &FilterConfig::default());
        assert!(t.black_gray < t.white_gray);
        assert!(t.black_gray <= 128);
        assert!(t.white_gray > 128);
        // No dark/light mass at all: mid > 2·avg, so the band is narrow.
        assert_eq!(t.black_gray, 108);
        assert_eq!(t.white_gray, 148);
    }

    #[test]
    fn calibrate_all_black_shifts_the_band_up() {
        // All mass at 0: mid band empty, avg = half the pixels, range = 60.
        // Anchor 0 gives (-60, 60); the low clamp shifts both up by 120.
        let t = calibrate(&hist_all_at(0, 100), &FilterConfig::default());
        assert_eq!(t.black_gray, 60);
        assert_eq!(t.white_gray, 180);
    }

    #[test]
    fn calibrate_all_white_shifts_the_band_down() {
        // Anchor 255 gives (195, 315); the high clamp shifts both down by 120.
        let t = calibrate(&hist_all_at(255, 100), &FilterConfig::default());
        assert_eq!(t.black_gray, 75);
        assert_eq!(t.white_gray, 195);
    }

    #[test]
    fn calibrate_applies_both_clamps_in_sequence() {
        // Mid band empty (range 60) with the anchor at 30: the first clamp
        // pushes the pair to (90, 210), the second pulls it back down because
        // 210 > 195 — both clamps fire on the same image.
        let t = calibrate(&hist_all_at(30, 100), &FilterConfig::default());
        assert_eq!(t.white_gray, 90);
        assert_eq!(t.black_gray, 0);
        assert!(t.black_gray < t.white_gray);
    }

    #[test]
    fn gray_range_breakpoints_in_priority_order() {
        // mid > 2·avg wins even when later conditions would also match.
        assert_eq!(gray_range(0, 100, 0), 20);
        assert_eq!(gray_range(100, 0, 100), 60);
        assert_eq!(gray_range(100, 15, 100), 40);
        assert_eq!(gray_range(100, 40, 100), 30);
        assert_eq!(gray_range(100, 80, 100), 25);
    }

    #[test]
    fn tone_map_output_holds_only_the_three_tones() {
        let mut buf = GrayBuffer::new(16, 16);
        for (i, p) in buf.data.iter_mut().enumerate() {
            *p = i as u8;
        }
        let t = Thresholds {
            black_gray: 75,
            white_gray: 115,
        };
        let toned = tone_map(&buf, t, TONE_GRAY);
        assert!(
            toned
                .data
                .iter()
                .all(|&p| p == TONE_BLACK || p == TONE_GRAY || p == TONE_WHITE)
        );
    }
}
