use mc_core::gray::GrayBuffer;

/// Binary selection mask, same dimensions as the image it drives.
///
/// Used for both composite passes: TRUE selects the overlay (halftone sheet or
/// ink), FALSE keeps the base pixel.
///
/// # Example
/// ```
/// use mc_filter::mask::Mask;
/// let mask = Mask::new(4, 4);
/// assert!(!mask.get(0, 0));
/// assert_eq!(mask.count_true(), 0);
/// ```
#[derive(Clone)]
pub struct Mask {
    /// Selection bits, row-major.
    pub data: Vec<bool>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Mask {
    /// All-FALSE mask of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![false; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build a mask by testing every pixel of `buf` against a predicate.
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// use mc_filter::mask::Mask;
    /// let buf = GrayBuffer::filled(2, 2, 128);
    /// let mask = Mask::from_predicate(&buf, |b| b == 128);
    /// assert_eq!(mask.count_true(), 4);
    /// ```
    #[must_use]
    pub fn from_predicate(buf: &GrayBuffer, pred: impl Fn(u8) -> bool) -> Self {
        Self {
            data: buf.data.iter().map(|&b| pred(b)).collect(),
            width: buf.width,
            height: buf.height,
        }
    }

    /// Selection bit at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height, "mask out of bounds");
        let idx = (y * self.width + x) as usize;
        idx < self.data.len() && self.data[idx]
    }

    /// Set the selection bit at (x, y). Out-of-bounds writes are dropped.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        self.data[idx] = value;
    }

    /// Number of TRUE bits.
    #[must_use]
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}
