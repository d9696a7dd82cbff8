/// Configuration, types, and shared structures for mangacam.
///
/// This crate contains the shared pixel buffer, tone constants, configuration
/// logic, and error types used across the mangacam workspace.

pub mod config;
pub mod error;
pub mod gray;

pub use config::{CalibrationMode, FilterConfig, ResizePolicy};
pub use error::CoreError;
pub use gray::{GrayBuffer, TONE_BLACK, TONE_GRAY, TONE_WHITE};
