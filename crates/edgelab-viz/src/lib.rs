#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// The display trait and the pixel preparation shared by all backends.
pub mod display;

/// Error types for the display backends.
pub mod error;

/// Display that only reports through the logger.
pub mod headless;

/// Display opened on first use.
pub mod lazy;

/// Display backed by a spawned rerun viewer.
pub mod rerun_display;

pub use crate::display::{DisplayFrame, ImageDisplay, PixelLayout};
pub use crate::error::DisplayError;
pub use crate::headless::HeadlessDisplay;
pub use crate::lazy::LazyDisplay;
pub use crate::rerun_display::RerunDisplay;
