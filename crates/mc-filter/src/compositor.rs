use anyhow::Result;
use mc_core::config::{CalibrationMode, FilterConfig, ResizePolicy};
use mc_core::error::CoreError;
use mc_core::gray::{GrayBuffer, TONE_BLACK};

use crate::contour;
use crate::halftone;
use crate::histogram::Histogram;
use crate::mask::Mask;
use crate::tone::{self, Thresholds};

/// Select between two images per pixel: TRUE picks `overlay`, FALSE keeps
/// `base`. Both images and the mask must share dimensions.
///
/// # Example
/// ```
/// use mc_core::gray::GrayBuffer;
/// use mc_filter::compositor::composite_masked;
/// use mc_filter::mask::Mask;
/// let base = GrayBuffer::filled(2, 2, 255);
/// let overlay = GrayBuffer::filled(2, 2, 0);
/// let mut mask = Mask::new(2, 2);
/// mask.set(0, 0, true);
/// let out = composite_masked(&base, &overlay, &mask);
/// assert_eq!(out.get(0, 0), 0);
/// assert_eq!(out.get(1, 1), 255);
/// ```
#[must_use]
pub fn composite_masked(base: &GrayBuffer, overlay: &GrayBuffer, mask: &Mask) -> GrayBuffer {
    debug_assert!(
        base.width == overlay.width
            && base.height == overlay.height
            && base.width == mask.width
            && base.height == mask.height,
        "composite dimension mismatch"
    );
    GrayBuffer {
        data: base
            .data
            .iter()
            .zip(&overlay.data)
            .zip(&mask.data)
            .map(|((&b, &o), &m)| if m { o } else { b })
            .collect(),
        width: base.width,
        height: base.height,
    }
}

/// One rendering session: immutable config in, finalized page out.
///
/// The stages run strictly in order inside [`MangaPipeline::process`] —
/// calibrate, downscale, tone map, halftone composite, ink composite — each
/// consuming the previous stage's output. The source buffer is never mutated;
/// sessions share no state, so independent images can be processed in
/// parallel by independent pipelines.
///
/// # Example
/// ```
/// use mc_core::config::FilterConfig;
/// use mc_core::gray::GrayBuffer;
/// use mc_filter::compositor::MangaPipeline;
/// let pipeline = MangaPipeline::new(FilterConfig::default());
/// let photo = GrayBuffer::filled(64, 64, 128);
/// let page = pipeline.process(&photo).unwrap();
/// assert_eq!((page.width, page.height), (64, 64));
/// ```
pub struct MangaPipeline {
    config: FilterConfig,
}

impl MangaPipeline {
    /// Create a pipeline. The config is clamped once here and immutable
    /// afterwards.
    #[must_use]
    pub fn new(mut config: FilterConfig) -> Self {
        config.clamp_all();
        Self { config }
    }

    /// Thresholds for `src` under the configured calibration mode.
    ///
    /// Adaptive mode reads the histogram of the full-resolution grayscale
    /// image; fixed mode skips the histogram entirely.
    #[must_use]
    pub fn calibrate(&self, src: &GrayBuffer) -> Thresholds {
        match self.config.calibration {
            CalibrationMode::Adaptive => {
                let hist = Histogram::from_buffer(src);
                let thresholds = tone::calibrate(&hist, &self.config);
                log::info!(
                    "calibrated thresholds: black < {} <= gray < {} <= white",
                    thresholds.black_gray,
                    thresholds.white_gray
                );
                thresholds
            }
            CalibrationMode::Fixed {
                black_gray,
                white_gray,
            } => {
                log::info!("fixed thresholds: black < {black_gray} <= gray < {white_gray} <= white");
                Thresholds {
                    black_gray,
                    white_gray,
                }
            }
        }
    }

    /// Run the full pipeline on one grayscale image.
    ///
    /// The contour pass runs on the working (post-resize) image, so ink line
    /// thickness stays proportional to the output resolution.
    ///
    /// # Errors
    /// Returns an error on empty input or if downscaling fails.
    pub fn process(&self, src: &GrayBuffer) -> Result<GrayBuffer> {
        if src.width == 0 || src.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: src.width,
                height: src.height,
            }
            .into());
        }

        let thresholds = self.calibrate(src);

        let working = match self.config.resize {
            ResizePolicy::None => src.clone(),
            ResizePolicy::MaxDimension(max) => mc_source::shrink_to_fit(src, max)?,
        };

        let toned = tone::tone_map(&working, thresholds, self.config.gray_tone);

        // Print the mid band with the diagonal tile.
        let gray_tone = self.config.gray_tone;
        let sheet = halftone::tile(toned.width, toned.height);
        let gray_mask = Mask::from_predicate(&toned, |b| b == gray_tone);
        let halftoned = composite_masked(&toned, &sheet, &gray_mask);

        // Ink the contours over everything else.
        let edge_mask = contour::detect_edges(&working, self.config.edge_threshold);
        let ink = GrayBuffer::filled(halftoned.width, halftoned.height, TONE_BLACK);
        Ok(composite_masked(&halftoned, &ink, &edge_mask))
    }
}
