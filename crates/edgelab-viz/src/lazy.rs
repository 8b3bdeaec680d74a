use edgelab_image::ImageBuffer;

use crate::display::ImageDisplay;
use crate::error::DisplayError;

/// Display that is only opened when the first image is shown.
///
/// Runs that never show anything, such as a session whose image fails to load, never start
/// the underlying backend.
///
/// # Example
///
/// ```
/// use edgelab_image::{Image, ImageBuffer};
/// use edgelab_viz::{HeadlessDisplay, ImageDisplay, LazyDisplay};
///
/// let mut display = LazyDisplay::new(|| Ok(HeadlessDisplay::new()));
/// assert!(!display.is_open());
///
/// let gray = ImageBuffer::Gray(Image::from_size_val([2, 2].into(), 0).unwrap());
/// display.show("gray", &gray).unwrap();
/// assert!(display.is_open());
/// ```
pub struct LazyDisplay<D, F> {
    open: Option<F>,
    display: Option<D>,
}

impl<D, F> LazyDisplay<D, F>
where
    D: ImageDisplay,
    F: FnOnce() -> Result<D, DisplayError>,
{
    /// Create a display opened by `open` on first use.
    pub fn new(open: F) -> Self {
        Self {
            open: Some(open),
            display: None,
        }
    }

    /// Whether the underlying display has been opened.
    pub fn is_open(&self) -> bool {
        self.display.is_some()
    }
}

impl<D, F> ImageDisplay for LazyDisplay<D, F>
where
    D: ImageDisplay,
    F: FnOnce() -> Result<D, DisplayError>,
{
    fn show(&mut self, title: &str, image: &ImageBuffer) -> Result<(), DisplayError> {
        if self.display.is_none() {
            // a failed open is not retried
            let open = self.open.take().ok_or(DisplayError::Unavailable)?;
            log::debug!("opening display for {}", title);
            self.display = Some(open()?);
        }

        match self.display.as_mut() {
            Some(display) => display.show(title, image),
            None => Err(DisplayError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use edgelab_image::{Image, ImageBuffer};

    use super::LazyDisplay;
    use crate::{DisplayError, HeadlessDisplay, ImageDisplay};

    #[test]
    fn opens_once_on_first_show() -> Result<(), DisplayError> {
        let opened = Cell::new(0);
        let mut display = LazyDisplay::new(|| {
            opened.set(opened.get() + 1);
            Ok(HeadlessDisplay::new())
        });
        assert_eq!(opened.get(), 0);

        let gray = ImageBuffer::Gray(Image::from_size_val([2, 2].into(), 0)?);
        display.show("a", &gray)?;
        display.show("b", &gray)?;

        assert_eq!(opened.get(), 1);
        assert!(display.is_open());

        Ok(())
    }

    #[test]
    fn failed_open_is_reported() -> Result<(), DisplayError> {
        let mut display =
            LazyDisplay::new(|| Err::<HeadlessDisplay, _>(DisplayError::Unavailable));

        let gray = ImageBuffer::Gray(Image::from_size_val([2, 2].into(), 0)?);
        assert!(matches!(
            display.show("a", &gray),
            Err(DisplayError::Unavailable)
        ));
        assert!(matches!(
            display.show("b", &gray),
            Err(DisplayError::Unavailable)
        ));
        assert!(!display.is_open());

        Ok(())
    }
}
