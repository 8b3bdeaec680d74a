#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for computer vision purposes.
pub mod image;

/// tagged grayscale / color buffers.
pub mod buffer;

/// Error types for the image module.
pub mod error;

pub use crate::buffer::ImageBuffer;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
