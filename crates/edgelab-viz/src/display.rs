use edgelab_image::{Image, ImageBuffer, ImageSize};
use edgelab_imgproc::color::rgb_from_bgr;

use crate::error::DisplayError;

/// How the pixels of a [`DisplayFrame`] must be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// one luminance value per pixel.
    Luminance,
    /// red, green and blue values per pixel.
    Rgb,
}

/// Pixels ready to be handed to a viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayFrame {
    /// size of the frame in pixels.
    pub size: ImageSize,
    /// interpretation of `pixels`.
    pub layout: PixelLayout,
    /// row-major pixel data.
    pub pixels: Vec<u8>,
}

impl DisplayFrame {
    /// Prepare an image for display.
    ///
    /// Single channel images are presented as grayscale, three channel images are converted
    /// from BGR to RGB.
    ///
    /// # Example
    ///
    /// ```
    /// use edgelab_image::{Image, ImageBuffer};
    /// use edgelab_viz::{DisplayFrame, PixelLayout};
    ///
    /// let bgr = Image::<u8, 3>::new([1, 1].into(), vec![10, 20, 30]).unwrap();
    /// let frame = DisplayFrame::from_buffer(&ImageBuffer::Bgr(bgr)).unwrap();
    ///
    /// assert_eq!(frame.layout, PixelLayout::Rgb);
    /// assert_eq!(frame.pixels, vec![30, 20, 10]);
    /// ```
    pub fn from_buffer(image: &ImageBuffer) -> Result<Self, DisplayError> {
        let frame = match image {
            ImageBuffer::Gray(gray) => Self {
                size: gray.size(),
                layout: PixelLayout::Luminance,
                pixels: gray.as_slice().to_vec(),
            },
            ImageBuffer::Bgr(bgr) => {
                let mut rgb = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
                rgb_from_bgr(bgr, &mut rgb)?;
                Self {
                    size: rgb.size(),
                    layout: PixelLayout::Rgb,
                    pixels: rgb.into_vec(),
                }
            }
        };

        Ok(frame)
    }
}

/// Presents labelled images to the operator.
pub trait ImageDisplay {
    /// Show `image` labelled with `title`.
    fn show(&mut self, title: &str, image: &ImageBuffer) -> Result<(), DisplayError>;
}

impl<D: ImageDisplay + ?Sized> ImageDisplay for Box<D> {
    fn show(&mut self, title: &str, image: &ImageBuffer) -> Result<(), DisplayError> {
        (**self).show(title, image)
    }
}

impl<D: ImageDisplay + ?Sized> ImageDisplay for &mut D {
    fn show(&mut self, title: &str, image: &ImageBuffer) -> Result<(), DisplayError> {
        (**self).show(title, image)
    }
}

/// Turn a title into a lowercase identifier made of ascii alphanumerics and underscores.
pub(crate) fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') && !out.is_empty() {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
