use std::path::{Path, PathBuf};

use anyhow::Result;
use mc_core::config::FilterConfig;
use mc_filter::MangaPipeline;
use mc_source::{load_grayscale, save_png};

/// Convert one image file end to end: decode, render, encode.
///
/// Returns the path actually written (always `.png`). Decode and encode
/// failures surface immediately with the offending path; no partial output is
/// written.
///
/// # Errors
/// Returns an error if decoding, processing, or encoding fails.
///
/// # Example
/// ```no_run
/// use mc_core::config::FilterConfig;
/// use std::path::Path;
/// let written = mc_app::convert::convert_image(
///     Path::new("kai.jpg"),
///     Path::new("kai_manga.png"),
///     FilterConfig::default(),
/// ).unwrap();
/// ```
pub fn convert_image(input: &Path, output: &Path, config: FilterConfig) -> Result<PathBuf> {
    let gray = load_grayscale(input)?;
    log::info!(
        "rendering {} ({}×{})",
        input.display(),
        gray.width,
        gray.height
    );
    let page = MangaPipeline::new(config).process(&gray)?;
    save_png(&page, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::config::ResizePolicy;

    fn write_test_jpeg(path: &Path, width: u32, height: u32, value: u8) {
        let img = image::GrayImage::from_pixel(width, height, image::Luma([value]));
        img.save_with_format(path, image::ImageFormat::Jpeg)
            .expect("write test image");
    }

    #[test]
    fn jpeg_in_png_out_with_rewritten_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in.jpg");
        write_test_jpeg(&input, 40, 30, 128);

        let requested = dir.path().join("out.jpg");
        let written = convert_image(&input, &requested, FilterConfig::default()).expect("convert");

        assert_eq!(written, dir.path().join("out.png"));
        let reloaded = image::open(&written).expect("reload").to_luma8();
        assert_eq!(reloaded.dimensions(), (40, 30));
        // The finalized page is strictly two-valued after halftoning.
        assert!(reloaded.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn oversized_input_is_written_downscaled() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("big.png");
        let img = image::GrayImage::from_pixel(1000, 400, image::Luma([128u8]));
        img.save(&input).expect("write test image");

        let written = convert_image(
            &input,
            &dir.path().join("small.png"),
            FilterConfig {
                resize: ResizePolicy::MaxDimension(640),
                ..FilterConfig::default()
            },
        )
        .expect("convert");

        let reloaded = image::open(&written).expect("reload").to_luma8();
        assert_eq!(reloaded.dimensions(), (640, 256));
    }

    #[test]
    fn missing_input_fails_without_writing_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("out.png");
        let err = convert_image(
            &dir.path().join("missing.jpg"),
            &output,
            FilterConfig::default(),
        );
        assert!(err.is_err());
        assert!(!output.exists());
    }
}
