use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::gray::TONE_GRAY;

/// How the black/gray/white cut points are chosen.
///
/// # Example
/// ```
/// use mc_core::config::CalibrationMode;
/// let mode = CalibrationMode::default();
/// assert!(matches!(mode, CalibrationMode::Adaptive));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Derive thresholds from the image's own brightness histogram.
    #[default]
    Adaptive,
    /// Skip the histogram and use fixed cut points.
    Fixed {
        /// Brightness below this is black.
        black_gray: u8,
        /// Brightness at or above this is white.
        white_gray: u8,
    },
}

/// Fixed cut points used when calibration is skipped.
pub const FIXED_BLACK_GRAY: u8 = 75;
/// See [`FIXED_BLACK_GRAY`].
pub const FIXED_WHITE_GRAY: u8 = 115;

/// Whether and how the working image is downscaled before tone mapping.
///
/// # Example
/// ```
/// use mc_core::config::ResizePolicy;
/// let policy = ResizePolicy::default();
/// assert_eq!(policy, ResizePolicy::MaxDimension(640));
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Always process at the source resolution.
    None,
    /// Downscale proportionally so the larger dimension fits this bound.
    MaxDimension(u32),
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::MaxDimension(640)
    }
}

/// Complete filter configuration. Serializable to TOML.
///
/// Every field has a sane default; the constants are empirical and tunable,
/// not derived.
///
/// # Example
/// ```
/// use mc_core::config::FilterConfig;
/// let config = FilterConfig::default();
/// assert_eq!(config.edge_threshold, 176);
/// assert_eq!(config.gray_tone, 128);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FilterConfig {
    // === Pipeline ===
    /// Threshold selection mode.
    pub calibration: CalibrationMode,
    /// Downscale policy applied before tone mapping.
    pub resize: ResizePolicy,

    // === Tones ===
    /// Mid-tone sentinel written by the tone map and matched by the halftone
    /// composite. Clamped to (0, 255) exclusive.
    pub gray_tone: u8,

    // === Contours ===
    /// Minimum contour-filter response for a pixel to count as ink.
    pub edge_threshold: u8,

    // === Histogram bands ===
    /// Brightness below this counts toward the dark band.
    pub dark_band_end: u8,
    /// Brightness at or above this counts toward the light band.
    pub light_band_start: u8,
    /// The percentile anchor is where the cumulative histogram reaches
    /// `total / percentile_divisor` (5 = the 20th percentile).
    pub percentile_divisor: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            calibration: CalibrationMode::Adaptive,
            resize: ResizePolicy::default(),
            gray_tone: TONE_GRAY,
            edge_threshold: 176,
            dark_band_end: 64,
            light_band_start: 192,
            percentile_divisor: 5,
        }
    }
}

impl FilterConfig {
    /// Clamp all fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.gray_tone = self.gray_tone.clamp(1, 254);
        self.percentile_divisor = self.percentile_divisor.max(1);
        if self.dark_band_end >= self.light_band_start {
            log::warn!(
                "inverted histogram bands ({}, {}), restoring defaults",
                self.dark_band_end,
                self.light_band_start
            );
            self.dark_band_end = 64;
            self.light_band_start = 192;
        }
        if let CalibrationMode::Fixed {
            black_gray,
            white_gray,
        } = &mut self.calibration
            && *black_gray >= *white_gray
        {
            *black_gray = FIXED_BLACK_GRAY;
            *white_gray = FIXED_WHITE_GRAY;
        }
        if let ResizePolicy::MaxDimension(max) = &mut self.resize {
            *max = (*max).max(1);
        }
    }
}

/// Intermediate TOML structure: every field optional for partial override.
#[derive(Deserialize)]
struct ConfigFile {
    filter: Option<FilterSection>,
}

/// Filter section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct FilterSection {
    calibration: Option<CalibrationMode>,
    resize: Option<ResizePolicy>,
    gray_tone: Option<u8>,
    edge_threshold: Option<u8>,
    dark_band_end: Option<u8>,
    light_band_start: Option<u8>,
    percentile_divisor: Option<u32>,
}

/// Load a TOML file and merge it onto the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use mc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<FilterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = FilterConfig::default();

    if let Some(f) = file.filter {
        if let Some(v) = f.calibration {
            config.calibration = v;
        }
        if let Some(v) = f.resize {
            config.resize = v;
        }
        if let Some(v) = f.gray_tone {
            config.gray_tone = v;
        }
        if let Some(v) = f.edge_threshold {
            config.edge_threshold = v;
        }
        if let Some(v) = f.dark_band_end {
            config.dark_band_end = v;
        }
        if let Some(v) = f.light_band_start {
            config.light_band_start = v;
        }
        if let Some(v) = f.percentile_divisor {
            config.percentile_divisor = v;
        }
    }

    config.clamp_all();
    Ok(config)
}
