#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// 8-bit rescaling and blending operations.
pub mod core;

/// Error types for the filter operations.
pub mod error;

/// image filtering backed by the imageproc crate.
pub mod filter;

/// filter parameters and the kernel size policy.
pub mod kernels;

/// module containing parallelization utilities.
pub mod parallel;

/// the capability interface consumed by the dispatcher.
pub mod provider;

pub use crate::error::FilterError;
pub use crate::filter::ImageprocFilters;
pub use crate::kernels::{CannyThresholds, KernelSize};
pub use crate::provider::EdgeFilterProvider;
