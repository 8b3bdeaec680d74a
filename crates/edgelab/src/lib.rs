#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use edgelab_image as image;

#[doc(inline)]
pub use edgelab_imgproc as imgproc;

#[doc(inline)]
pub use edgelab_io as io;

#[doc(inline)]
pub use edgelab_viz as viz;

/// runtime configuration of a session.
pub mod config;

/// the pure state machine behind the menu loop.
pub mod dispatch;

/// Error types for the application.
pub mod error;

/// the fixed option menu.
pub mod menu;

/// operator input and output.
pub mod operator;

/// the interactive session driving filters and display.
pub mod session;

pub use crate::error::AppError;
pub use crate::session::{RunOutcome, Session};
