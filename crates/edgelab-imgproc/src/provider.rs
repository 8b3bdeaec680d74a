use edgelab_image::Image;

use crate::error::FilterError;
use crate::kernels::{CannyThresholds, KernelSize};

/// The filter operations the interactive explorer relies on.
///
/// Every method reads its input and returns a freshly allocated result, inputs are never
/// modified. Implementations are free to delegate to any image processing backend; see
/// [`crate::ImageprocFilters`] for the default one.
pub trait EdgeFilterProvider {
    /// Convert a BGR8 image to a single channel intensity image.
    fn grayscale(&self, src: &Image<u8, 3>) -> Result<Image<u8, 1>, FilterError>;

    /// Sobel gradient magnitude: both directional responses rescaled to 8-bit and blended
    /// with equal weight.
    fn sobel(&self, gray: &Image<u8, 1>) -> Result<Image<u8, 1>, FilterError>;

    /// Canny edge map with values 0 or 255.
    fn canny(
        &self,
        gray: &Image<u8, 1>,
        thresholds: CannyThresholds,
    ) -> Result<Image<u8, 1>, FilterError>;

    /// Absolute Laplacian response rescaled to 8-bit.
    fn laplacian(&self, gray: &Image<u8, 1>) -> Result<Image<u8, 1>, FilterError>;

    /// Isotropic gaussian blur of a color image with a square kernel.
    fn gaussian_blur(
        &self,
        src: &Image<u8, 3>,
        kernel: KernelSize,
    ) -> Result<Image<u8, 3>, FilterError>;

    /// Median filter of a color image with a square window, channel by channel.
    fn median_blur(
        &self,
        src: &Image<u8, 3>,
        kernel: KernelSize,
    ) -> Result<Image<u8, 3>, FilterError>;
}

impl<P: EdgeFilterProvider + ?Sized> EdgeFilterProvider for &P {
    fn grayscale(&self, src: &Image<u8, 3>) -> Result<Image<u8, 1>, FilterError> {
        (**self).grayscale(src)
    }

    fn sobel(&self, gray: &Image<u8, 1>) -> Result<Image<u8, 1>, FilterError> {
        (**self).sobel(gray)
    }

    fn canny(
        &self,
        gray: &Image<u8, 1>,
        thresholds: CannyThresholds,
    ) -> Result<Image<u8, 1>, FilterError> {
        (**self).canny(gray, thresholds)
    }

    fn laplacian(&self, gray: &Image<u8, 1>) -> Result<Image<u8, 1>, FilterError> {
        (**self).laplacian(gray)
    }

    fn gaussian_blur(
        &self,
        src: &Image<u8, 3>,
        kernel: KernelSize,
    ) -> Result<Image<u8, 3>, FilterError> {
        (**self).gaussian_blur(src, kernel)
    }

    fn median_blur(
        &self,
        src: &Image<u8, 3>,
        kernel: KernelSize,
    ) -> Result<Image<u8, 3>, FilterError> {
        (**self).median_blur(src, kernel)
    }
}
