use std::path::Path;

use anyhow::{Context, Result};
use mc_core::gray::GrayBuffer;

/// Decode an image file and convert it to grayscale.
///
/// Any format the `image` crate decodes is accepted (PNG, JPEG, BMP, GIF).
/// The file is read once; a decode failure is fatal, with the path in the
/// error context.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use mc_source::load::load_grayscale;
/// use std::path::Path;
/// let gray = load_grayscale(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_grayscale(path: &Path) -> Result<GrayBuffer> {
    let img = image::open(path).with_context(|| format!("cannot decode {}", path.display()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    log::debug!("decoded {} ({width}×{height})", path.display());
    Ok(GrayBuffer::from_raw(width, height, luma.into_raw())?)
}
