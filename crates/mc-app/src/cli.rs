use std::path::PathBuf;

use clap::Parser;
use mc_core::config::{CalibrationMode, FilterConfig, ResizePolicy};

/// mangacam — manga-style three-tone halftone renderer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source image (PNG, JPEG, BMP, GIF).
    pub input: PathBuf,

    /// Output path. The extension is always rewritten to .png.
    /// Default: the input path with a "_manga" suffix.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum working dimension in pixels. 0 disables downscaling.
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Skip histogram calibration and use the fixed thresholds.
    #[arg(long, default_value_t = false)]
    pub no_calibrate: bool,

    /// Contour noise threshold [0-255].
    #[arg(long)]
    pub edge_threshold: Option<u8>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply CLI overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut FilterConfig) {
        if let Some(max) = self.max_size {
            config.resize = if max == 0 {
                ResizePolicy::None
            } else {
                ResizePolicy::MaxDimension(max)
            };
        }
        if self.no_calibrate {
            config.calibration = CalibrationMode::Fixed {
                black_gray: mc_core::config::FIXED_BLACK_GRAY,
                white_gray: mc_core::config::FIXED_WHITE_GRAY,
            };
        }
        if let Some(threshold) = self.edge_threshold {
            config.edge_threshold = threshold;
        }
        config.clamp_all();
    }

    /// Output path: explicit `--output`, or the input with a "_manga" suffix.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if let Some(ref out) = self.output {
            return out.clone();
        }
        let stem = self
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("out");
        self.input.with_file_name(format!("{stem}_manga.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("mangacam").chain(args.iter().copied()))
    }

    #[test]
    fn default_output_adds_the_manga_suffix() {
        let cli = parse(&["photos/kai.jpg"]);
        assert_eq!(
            cli.output_path(),
            PathBuf::from("photos/kai_manga.png")
        );
    }

    #[test]
    fn explicit_output_wins() {
        let cli = parse(&["kai.jpg", "-o", "page.png"]);
        assert_eq!(cli.output_path(), PathBuf::from("page.png"));
    }

    #[test]
    fn max_size_zero_disables_downscaling() {
        let cli = parse(&["kai.jpg", "--max-size", "0"]);
        let mut config = FilterConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.resize, ResizePolicy::None);
    }

    #[test]
    fn no_calibrate_selects_the_fixed_pair() {
        let cli = parse(&["kai.jpg", "--no-calibrate"]);
        let mut config = FilterConfig::default();
        cli.apply_overrides(&mut config);
        assert!(matches!(config.calibration, CalibrationMode::Fixed { .. }));
    }

    #[test]
    fn edge_threshold_override_applies() {
        let cli = parse(&["kai.jpg", "--edge-threshold", "90"]);
        let mut config = FilterConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.edge_threshold, 90);
    }
}
