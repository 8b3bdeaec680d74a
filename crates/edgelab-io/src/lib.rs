#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_any_bgr8`] for automatic format detection.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::read_image_any_bgr8;
