use crate::image::{Image, ImageSize};

/// An 8-bit image whose channel layout is only known at runtime.
///
/// Color buffers keep the BGR channel order used throughout processing; converting to RGB is
/// left to whoever presents the pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageBuffer {
    /// single channel intensity image.
    Gray(Image<u8, 1>),
    /// three channel color image in BGR order.
    Bgr(Image<u8, 3>),
}

impl ImageBuffer {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            ImageBuffer::Gray(img) => img.size(),
            ImageBuffer::Bgr(img) => img.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            ImageBuffer::Gray(img) => img.num_channels(),
            ImageBuffer::Bgr(img) => img.num_channels(),
        }
    }
}
