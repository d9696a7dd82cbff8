/// Image boundary for mangacam: decode, encode, resize.
///
/// Thin wrappers over the `image` and `fast_image_resize` crates. All pixel
/// math lives in mc-filter; this crate only crosses the file/format boundary.

pub mod load;
pub mod resize;
pub mod save;

pub use load::load_grayscale;
pub use resize::shrink_to_fit;
pub use save::save_png;
