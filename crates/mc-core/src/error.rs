use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Buffer length does not match the declared dimensions.
    #[error("dimension mismatch: {width}×{height} for a buffer of {len} bytes")]
    DimensionMismatch {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Actual buffer length.
        len: usize,
    },

    /// Invalid width/height dimensions.
    #[error("invalid dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
