use mc_core::gray::GrayBuffer;

/// Pixel counts per brightness band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BandCounts {
    /// Pixels below the dark cut point.
    pub dark: u64,
    /// Pixels between the two cut points.
    pub mid: u64,
    /// Pixels at or above the light cut point.
    pub light: u64,
}

/// 256-bucket brightness histogram.
///
/// Invariant: the bucket sum equals the pixel count of the buffer it was
/// computed from.
///
/// # Example
/// ```
/// use mc_core::gray::GrayBuffer;
/// use mc_filter::histogram::Histogram;
/// let buf = GrayBuffer::filled(8, 8, 128);
/// let hist = Histogram::from_buffer(&buf);
/// assert_eq!(hist.counts[128], 64);
/// assert_eq!(hist.total(), 64);
/// ```
#[derive(Clone)]
pub struct Histogram {
    /// Count per brightness value, index = brightness.
    pub counts: [u32; 256],
}

impl Histogram {
    /// Count every pixel of `buf` into brightness buckets.
    #[must_use]
    pub fn from_buffer(buf: &GrayBuffer) -> Self {
        let mut counts = [0u32; 256];
        for &b in &buf.data {
            counts[b as usize] += 1;
        }
        Self { counts }
    }

    /// Total pixel count (sum over all buckets).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Sum the buckets into dark / mid / light bands.
    ///
    /// `dark_end` and `light_start` are the band cut points: dark is
    /// [0, dark_end), mid is [dark_end, light_start), light is
    /// [light_start, 256).
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// use mc_filter::histogram::Histogram;
    /// let buf = GrayBuffer::filled(4, 4, 100);
    /// let bands = Histogram::from_buffer(&buf).band_counts(64, 192);
    /// assert_eq!(bands.mid, 16);
    /// ```
    #[must_use]
    pub fn band_counts(&self, dark_end: u8, light_start: u8) -> BandCounts {
        let mut bands = BandCounts::default();
        for (brightness, &count) in self.counts.iter().enumerate() {
            let count = u64::from(count);
            if brightness < dark_end as usize {
                bands.dark += count;
            } else if brightness < light_start as usize {
                bands.mid += count;
            } else {
                bands.light += count;
            }
        }
        bands
    }

    /// Smallest brightness at which the cumulative count reaches
    /// `total / divisor`. With divisor 5 this is the 20th-percentile anchor.
    ///
    /// # Example
    /// ```
    /// use mc_core::gray::GrayBuffer;
    /// use mc_filter::histogram::Histogram;
    /// let buf = GrayBuffer::filled(10, 10, 42);
    /// assert_eq!(Histogram::from_buffer(&buf).percentile_point(5), 42);
    /// ```
    #[must_use]
    pub fn percentile_point(&self, divisor: u32) -> u8 {
        let target = self.total() / u64::from(divisor.max(1));
        let mut cumulative = 0u64;
        for (brightness, &count) in self.counts.iter().enumerate() {
            cumulative += u64::from(count);
            if cumulative >= target {
                return brightness as u8;
            }
        }
        255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_sum_equals_pixel_count() {
        let mut buf = GrayBuffer::new(13, 7);
        for (i, p) in buf.data.iter_mut().enumerate() {
            *p = (i % 251) as u8;
        }
        let hist = Histogram::from_buffer(&buf);
        assert_eq!(hist.total(), 13 * 7);
    }

    #[test]
    fn band_counts_split_on_the_cut_points() {
        let mut buf = GrayBuffer::new(4, 1);
        buf.data = vec![63, 64, 191, 192];
        let bands = Histogram::from_buffer(&buf).band_counts(64, 192);
        assert_eq!(bands, BandCounts { dark: 1, mid: 2, light: 1 });
    }

    #[test]
    fn percentile_point_finds_the_first_bucket_reaching_a_fifth() {
        // 100 pixels: 19 at brightness 10, 81 at brightness 200.
        // Cumulative reaches 20 only at brightness 200.
        let mut buf = GrayBuffer::new(10, 10);
        for (i, p) in buf.data.iter_mut().enumerate() {
            *p = if i < 19 { 10 } else { 200 };
        }
        assert_eq!(Histogram::from_buffer(&buf).percentile_point(5), 200);
    }

    #[test]
    fn percentile_point_on_uniform_image_is_that_brightness() {
        let buf = GrayBuffer::filled(64, 64, 128);
        assert_eq!(Histogram::from_buffer(&buf).percentile_point(5), 128);
    }
}
