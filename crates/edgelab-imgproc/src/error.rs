use edgelab_image::ImageError;

/// An error type for the filter operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// Error from the image buffers.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when a buffer cannot be handed to the filter backend.
    #[error("Failed to convert a {0}x{1} buffer for the filter backend")]
    BufferConversion(usize, usize),

    /// Error when a kernel size is not usable.
    #[error("Kernel size must be odd, got {0}")]
    InvalidKernelSize(u32),
}
