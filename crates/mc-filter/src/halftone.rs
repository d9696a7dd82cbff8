use mc_core::gray::GrayBuffer;

/// Side length of the halftone seed pattern.
pub const SEED_SIZE: u32 = 5;

/// 5×5 diagonal halftone seed. 0 = ink, 255 = paper.
///
/// One ink cell per row, drifting one column per row, so tiling it produces
/// continuous diagonal stripes across the page.
pub const SEED: [[u8; 5]; 5] = [
    [0, 255, 255, 255, 255],
    [255, 255, 255, 255, 0],
    [255, 255, 255, 0, 255],
    [255, 255, 0, 255, 255],
    [255, 0, 255, 255, 255],
];

/// Replicate the seed pattern over a `width × height` sheet.
///
/// Pixel-exact periodic repeat anchored at (0, 0); partial tiles at the right
/// and bottom edges are clipped. Deterministic: the same target size always
/// produces the same sheet.
///
/// # Example
/// ```
/// use mc_filter::halftone::{SEED, tile};
/// let sheet = tile(10, 10);
/// assert_eq!(sheet.get(0, 0), 0);
/// assert_eq!(sheet.get(5, 5), SEED[0][0]);
/// assert_eq!(sheet.get(9, 6), SEED[1][4]);
/// ```
#[must_use]
pub fn tile(width: u32, height: u32) -> GrayBuffer {
    let mut sheet = GrayBuffer::new(width, height);
    for y in 0..height {
        let row = &SEED[(y % SEED_SIZE) as usize];
        for x in 0..width {
            sheet.set(x, y, row[(x % SEED_SIZE) as usize]);
        }
    }
    sheet
}
