use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use mc_core::gray::GrayBuffer;

/// Encode a buffer as PNG, rewriting the output extension.
///
/// The output is always PNG regardless of what extension the caller supplied;
/// `out.jpg` becomes `out.png`. Returns the path actually written.
///
/// # Errors
/// Returns an error if the destination is not writable or encoding fails.
/// No partial output is left behind by the PNG encoder on failure.
///
/// # Example
/// ```no_run
/// use mc_core::gray::GrayBuffer;
/// use mc_source::save::save_png;
/// use std::path::Path;
/// let page = GrayBuffer::filled(64, 64, 255);
/// let written = save_png(&page, Path::new("out.jpg")).unwrap();
/// assert_eq!(written.extension().unwrap(), "png");
/// ```
pub fn save_png(buf: &GrayBuffer, path: &Path) -> Result<PathBuf> {
    let path = path.with_extension("png");
    let img = image::GrayImage::from_raw(buf.width, buf.height, buf.data.clone())
        .ok_or_else(|| anyhow!("buffer does not match {}×{}", buf.width, buf.height))?;
    img.save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("cannot encode {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
