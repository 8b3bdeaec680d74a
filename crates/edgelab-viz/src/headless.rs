use edgelab_image::ImageBuffer;

use crate::display::{DisplayFrame, ImageDisplay};
use crate::error::DisplayError;

/// Display for environments without a viewer.
///
/// Each shown image is prepared exactly as a graphical backend would prepare it and then
/// reported through the logger.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    shown: usize,
}

impl HeadlessDisplay {
    /// Create a new headless display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images shown so far.
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl ImageDisplay for HeadlessDisplay {
    fn show(&mut self, title: &str, image: &ImageBuffer) -> Result<(), DisplayError> {
        let frame = DisplayFrame::from_buffer(image)?;
        self.shown += 1;
        log::info!(
            "[{}] {}: {} {:?}",
            self.shown,
            title,
            frame.size,
            frame.layout
        );
        Ok(())
    }
}
