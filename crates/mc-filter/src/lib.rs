/// Manga rendering engine for mangacam.
///
/// Converts a grayscale pixel buffer into a three-tone halftoned page:
/// histogram calibration, tone mapping, diagonal halftone, ink contours.

pub mod compositor;
pub mod contour;
pub mod halftone;
pub mod histogram;
pub mod mask;
pub mod tone;

pub use compositor::MangaPipeline;
pub use histogram::Histogram;
pub use mask::Mask;
pub use tone::Thresholds;
