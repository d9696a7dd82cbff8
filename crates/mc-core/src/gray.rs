use crate::error::CoreError;

/// Ink tone. Darkest of the three output levels.
pub const TONE_BLACK: u8 = 0;

/// Default mid-tone sentinel. Any value strictly between black and white works;
/// the compositor only ever compares against it, never displays it.
pub const TONE_GRAY: u8 = 128;

/// Paper tone. Lightest of the three output levels.
pub const TONE_WHITE: u8 = 255;

/// Owned grayscale pixel buffer, row-major, one byte per pixel.
///
/// Every pipeline stage past decoding works on this type: the working
/// grayscale image, the tone-mapped image, the tiled halftone sheet, and the
/// final composite are all `GrayBuffer`s.
///
/// # Example
/// ```
/// use mc_core::gray::GrayBuffer;
/// let buf = GrayBuffer::new(10, 10);
/// assert_eq!(buf.data.len(), 100);
/// ```
#[derive(Clone)]
pub struct GrayBuffer {
    /// Brightness values [0, 255], row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayBuffer {
    /// Create a buffer of the given dimensions, filled with black.
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// let buf = GrayBuffer::new(100, 50);
    /// assert_eq!(buf.width, 100);
    /// assert_eq!(buf.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a buffer of the given dimensions, filled with `value`.
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// let buf = GrayBuffer::filled(4, 4, 255);
    /// assert_eq!(buf.get(3, 3), 255);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Wrap an existing byte vector as a buffer.
    ///
    /// # Errors
    /// Returns an error if the vector length does not equal `width × height`.
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// let buf = GrayBuffer::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
    /// assert_eq!(buf.get(1, 1), 255);
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize {
            return Err(CoreError::DimensionMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Brightness at (x, y).
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// let buf = GrayBuffer::filled(10, 10, 42);
    /// assert_eq!(buf.get(0, 0), 42);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y * self.width + x) as usize;
        if idx >= self.data.len() {
            return 0;
        }
        self.data[idx]
    }

    /// Write brightness at (x, y). Out-of-bounds writes are dropped.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        self.data[idx] = value;
    }

    /// Overwrite every pixel with `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Number of pixels (`width × height`).
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }
}
