use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use mc_core::gray::GrayBuffer;

/// Downscale proportionally so the larger dimension fits `max_dimension`.
///
/// Images already within the bound are returned unchanged (a copy). Uses the
/// default convolution resampler, which smooths rather than decimates. Never
/// upscales.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use mc_core::gray::GrayBuffer;
/// use mc_source::resize::shrink_to_fit;
/// let src = GrayBuffer::filled(1000, 500, 40);
/// let small = shrink_to_fit(&src, 640).unwrap();
/// assert_eq!((small.width, small.height), (640, 320));
/// ```
pub fn shrink_to_fit(src: &GrayBuffer, max_dimension: u32) -> Result<GrayBuffer> {
    if src.width.max(src.height) <= max_dimension {
        return Ok(src.clone());
    }

    let (width, height) = fit_dimensions(src.width, src.height, max_dimension);
    log::info!(
        "downscaling {}×{} → {width}×{height}",
        src.width,
        src.height
    );

    let src_image = Image::from_vec_u8(src.width, src.height, src.data.clone(), PixelType::U8)
        .context("invalid source dimensions")?;
    let mut dst_image = Image::new(width, height, PixelType::U8);

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, Some(&ResizeOptions::new()))
        .context("resize failed")?;

    Ok(GrayBuffer::from_raw(width, height, dst_image.into_vec())?)
}

/// Scale (width, height) so the larger side equals `max_dimension`, the other
/// proportionally, never below 1.
fn fit_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max = u64::from(max_dimension);
    if width >= height {
        let h = (max * u64::from(height) / u64::from(width)).max(1);
        (max_dimension, h as u32)
    } else {
        let w = (max * u64::from(width) / u64::from(height)).max(1);
        (w as u32, max_dimension)
    }
}
