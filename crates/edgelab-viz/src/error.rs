/// An error type for the display backends.
#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    /// Error when preparing the pixels for display.
    #[error("Failed to prepare the image for display. {0}")]
    ImageError(#[from] edgelab_image::ImageError),

    /// Error coming from the rerun recording stream.
    #[error("Rerun recording failed. {0}")]
    RerunError(#[from] rerun::RecordingStreamError),

    /// Error when the display backend could not be opened.
    #[error("The display backend is not available")]
    Unavailable,
}
