/// An error type for the application.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Error while talking to the operator.
    #[error("Console I/O failed. {0}")]
    Console(#[from] std::io::Error),

    /// Error from a filter operation.
    #[error(transparent)]
    Filter(#[from] edgelab_imgproc::FilterError),

    /// Error from the display backend.
    #[error(transparent)]
    Display(#[from] edgelab_viz::DisplayError),

    /// Error when an unknown display backend is requested.
    #[error("Unknown display backend: {0}, expected `rerun` or `headless`")]
    UnknownDisplayBackend(String),
}
