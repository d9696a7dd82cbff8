use mc_core::gray::GrayBuffer;

use crate::mask::Mask;

/// Contour-filter response at pixel (x, y).
///
/// 3×3 Laplacian-style kernel (8×center minus the eight neighbors), absolute
/// value clamped to [0, 255]. Border pixels respond 0.
///
/// # Example
/// ```
/// use mc_core::gray::GrayBuffer;
/// use mc_filter::contour::edge_response;
/// let flat = GrayBuffer::filled(5, 5, 77);
/// assert_eq!(edge_response(&flat, 2, 2), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn edge_response(src: &GrayBuffer, x: u32, y: u32) -> u8 {
    if src.width < 3 || src.height < 3 {
        return 0;
    }
    if x == 0 || y == 0 || x >= src.width - 1 || y >= src.height - 1 {
        return 0;
    }

    let c = i32::from(src.get(x, y));
    let ring = i32::from(src.get(x - 1, y - 1))
        + i32::from(src.get(x, y - 1))
        + i32::from(src.get(x + 1, y - 1))
        + i32::from(src.get(x - 1, y))
        + i32::from(src.get(x + 1, y))
        + i32::from(src.get(x - 1, y + 1))
        + i32::from(src.get(x, y + 1))
        + i32::from(src.get(x + 1, y + 1));

    (8 * c - ring).abs().min(255) as u8
}

/// Binarize the contour-filter response into an ink mask.
///
/// TRUE (ink) where the response is at least `threshold`. Raising the
/// threshold can only shrink the mask. Degenerate 1-pixel-wide images have no
/// interior and produce an all-FALSE mask.
///
/// # Example
/// ```
/// use mc_core::gray::GrayBuffer;
/// use mc_filter::contour::detect_edges;
/// let flat = GrayBuffer::filled(8, 8, 200);
/// assert_eq!(detect_edges(&flat, 176).count_true(), 0);
/// ```
#[must_use]
pub fn detect_edges(src: &GrayBuffer, threshold: u8) -> Mask {
    let mut mask = Mask::new(src.width, src.height);
    for y in 0..src.height {
        for x in 0..src.width {
            mask.set(x, y, edge_response(src, x, y) >= threshold);
        }
    }
    mask
}
