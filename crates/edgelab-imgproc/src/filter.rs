use edgelab_image::{Image, ImageSize};
use image::Pixel;

use crate::color;
use crate::core::{add_weighted, convert_scale_abs};
use crate::error::FilterError;
use crate::kernels::{gaussian_kernel_1d, CannyThresholds, KernelSize};
use crate::provider::EdgeFilterProvider;

/// Wrap a grayscale image into an `image` crate buffer.
fn to_gray_image(src: &Image<u8, 1>) -> Result<image::GrayImage, FilterError> {
    image::GrayImage::from_raw(
        src.width() as u32,
        src.height() as u32,
        src.as_slice().to_vec(),
    )
    .ok_or(FilterError::BufferConversion(src.width(), src.height()))
}

/// Wrap a three channel image into an `image` crate buffer.
///
/// The pixels keep their BGR order, only channel independent filters may run on the result.
fn to_color_image(src: &Image<u8, 3>) -> Result<image::RgbImage, FilterError> {
    image::RgbImage::from_raw(
        src.width() as u32,
        src.height() as u32,
        src.as_slice().to_vec(),
    )
    .ok_or(FilterError::BufferConversion(src.width(), src.height()))
}

fn from_image_buffer<P, const C: usize>(
    buffer: image::ImageBuffer<P, Vec<P::Subpixel>>,
) -> Result<Image<P::Subpixel, C>, FilterError>
where
    P: Pixel,
{
    let size = ImageSize {
        width: buffer.width() as usize,
        height: buffer.height() as usize,
    };
    Ok(Image::new(size, buffer.into_raw())?)
}

/// [`EdgeFilterProvider`] backed by the `imageproc` crate.
///
/// # Example
///
/// ```
/// use edgelab_image::Image;
/// use edgelab_imgproc::{EdgeFilterProvider, ImageprocFilters, KernelSize};
///
/// let filters = ImageprocFilters::new();
/// let image = Image::<u8, 3>::from_size_val([8, 6].into(), 42).unwrap();
///
/// let blurred = filters.median_blur(&image, KernelSize::new(3).unwrap()).unwrap();
/// assert_eq!(blurred, image);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageprocFilters;

impl ImageprocFilters {
    /// Create a new imageproc backed provider.
    pub fn new() -> Self {
        Self
    }
}

impl EdgeFilterProvider for ImageprocFilters {
    fn grayscale(&self, src: &Image<u8, 3>) -> Result<Image<u8, 1>, FilterError> {
        let mut gray = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        color::gray_from_bgr_u8(src, &mut gray)?;
        Ok(gray)
    }

    fn sobel(&self, gray: &Image<u8, 1>) -> Result<Image<u8, 1>, FilterError> {
        let src = to_gray_image(gray)?;

        let dx: Image<i16, 1> = from_image_buffer(imageproc::gradients::horizontal_sobel(&src))?;
        let dy: Image<i16, 1> = from_image_buffer(imageproc::gradients::vertical_sobel(&src))?;

        let mut abs_dx = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
        let mut abs_dy = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
        convert_scale_abs(&dx, &mut abs_dx)?;
        convert_scale_abs(&dy, &mut abs_dy)?;

        let mut combined = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
        add_weighted(&abs_dx, 0.5, &abs_dy, 0.5, 0.0, &mut combined)?;

        Ok(combined)
    }

    fn canny(
        &self,
        gray: &Image<u8, 1>,
        thresholds: CannyThresholds,
    ) -> Result<Image<u8, 1>, FilterError> {
        let (low, high) = thresholds.ordered();
        log::debug!("canny with thresholds low={} high={}", low, high);

        let src = to_gray_image(gray)?;
        from_image_buffer(imageproc::edges::canny(&src, low, high))
    }

    fn laplacian(&self, gray: &Image<u8, 1>) -> Result<Image<u8, 1>, FilterError> {
        let src = to_gray_image(gray)?;
        let response: Image<i16, 1> =
            from_image_buffer(imageproc::filter::laplacian_filter(&src))?;

        let mut dst = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
        convert_scale_abs(&response, &mut dst)?;

        Ok(dst)
    }

    fn gaussian_blur(
        &self,
        src: &Image<u8, 3>,
        kernel: KernelSize,
    ) -> Result<Image<u8, 3>, FilterError> {
        let sigma = kernel.gaussian_sigma();
        log::debug!("gaussian blur with a {} kernel, sigma={}", kernel, sigma);

        let kernel_1d = gaussian_kernel_1d(kernel.get() as usize, sigma);
        let color = to_color_image(src)?;

        from_image_buffer(imageproc::filter::separable_filter_equal(
            &color, &kernel_1d,
        ))
    }

    fn median_blur(
        &self,
        src: &Image<u8, 3>,
        kernel: KernelSize,
    ) -> Result<Image<u8, 3>, FilterError> {
        log::debug!("median blur with a {} window", kernel);

        let color = to_color_image(src)?;
        let radius = kernel.radius();

        from_image_buffer(imageproc::filter::median_filter(&color, radius, radius))
    }
}

#[cfg(test)]
mod tests {
    use edgelab_image::{Image, ImageSize};

    use super::ImageprocFilters;
    use crate::{CannyThresholds, EdgeFilterProvider, FilterError, KernelSize};

    /// A gray image whose left half is 0 and right half is `value`.
    fn vertical_step(size: ImageSize, value: u8) -> Result<Image<u8, 1>, FilterError> {
        let data = (0..size.height)
            .flat_map(|_| (0..size.width).map(move |x| if x < size.width / 2 { 0 } else { value }))
            .collect();
        Ok(Image::new(size, data)?)
    }

    #[test]
    fn grayscale_keeps_size() -> Result<(), FilterError> {
        let image = Image::<u8, 3>::from_size_val([5, 4].into(), 255)?;
        let gray = ImageprocFilters::new().grayscale(&image)?;

        assert_eq!(gray.size(), image.size());
        assert!(gray.as_slice().iter().all(|&v| v == 255));

        Ok(())
    }

    #[test]
    fn sobel_vertical_edge() -> Result<(), FilterError> {
        let gray = vertical_step([8, 5].into(), 200)?;
        let edges = ImageprocFilters::new().sobel(&gray)?;

        assert_eq!(edges.size(), gray.size());
        for y in 0..5 {
            for x in 0..8 {
                // |dx| saturates at 255 next to the step, dy is zero everywhere
                let expected = if x == 3 || x == 4 { 128 } else { 0 };
                assert_eq!(edges.get([y, x, 0]), Some(&expected), "at ({x}, {y})");
            }
        }

        Ok(())
    }

    #[test]
    fn canny_binary_output() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 640,
            height: 480,
        };
        // a bright rectangle on a dark background
        let data = (0..size.height)
            .flat_map(|y| {
                (0..size.width).map(move |x| {
                    if (160..480).contains(&x) && (120..360).contains(&y) {
                        220
                    } else {
                        20
                    }
                })
            })
            .collect();
        let gray = Image::<u8, 1>::new(size, data)?;

        let edges = ImageprocFilters::new().canny(
            &gray,
            CannyThresholds {
                lower: 100,
                upper: 200,
            },
        )?;

        assert_eq!(edges.size(), size);
        assert_eq!(edges.num_channels(), 1);
        assert!(edges.as_slice().iter().all(|&v| v == 0 || v == 255));
        assert!(edges.as_slice().iter().any(|&v| v == 255));

        Ok(())
    }

    #[test]
    fn canny_flat_image_has_no_edges() -> Result<(), FilterError> {
        let gray = Image::<u8, 1>::from_size_val([32, 32].into(), 90)?;
        let edges = ImageprocFilters::new().canny(
            &gray,
            CannyThresholds {
                lower: 200,
                upper: 100,
            },
        )?;

        assert!(edges.as_slice().iter().all(|&v| v == 0));

        Ok(())
    }

    #[test]
    fn laplacian_single_peak() -> Result<(), FilterError> {
        let mut gray = Image::<u8, 1>::from_size_val([5, 5].into(), 0)?;
        gray.as_slice_mut()[2 * 5 + 2] = 10;

        let response = ImageprocFilters::new().laplacian(&gray)?;

        assert_eq!(response.get([2, 2, 0]), Some(&40));
        assert_eq!(response.get([1, 2, 0]), Some(&10));
        assert_eq!(response.get([2, 1, 0]), Some(&10));
        assert_eq!(response.get([1, 1, 0]), Some(&0));
        assert_eq!(response.get([0, 0, 0]), Some(&0));

        Ok(())
    }

    #[test]
    fn gaussian_blur_flat_image() -> Result<(), FilterError> {
        let image = Image::<u8, 3>::from_size_val([16, 12].into(), 100)?;
        let blurred = ImageprocFilters::new().gaussian_blur(&image, KernelSize::new(5)?)?;

        assert_eq!(blurred.size(), image.size());
        assert!(blurred.as_slice().iter().all(|&v| v.abs_diff(100) <= 1));

        Ok(())
    }

    #[test]
    fn gaussian_blur_smooths_step() -> Result<(), FilterError> {
        let gray = vertical_step([10, 3].into(), 250)?;
        let data = gray.as_slice().iter().flat_map(|&v| [v, v, v]).collect();
        let image = Image::<u8, 3>::new(gray.size(), data)?;

        let blurred = ImageprocFilters::new().gaussian_blur(&image, KernelSize::new(3)?)?;

        // both sides of the step move towards each other
        let left = *blurred.get([1, 4, 0]).ok_or(FilterError::BufferConversion(0, 0))?;
        let right = *blurred.get([1, 5, 0]).ok_or(FilterError::BufferConversion(0, 0))?;
        assert!(left > 0 && left < 125);
        assert!(right > 125 && right < 250);

        Ok(())
    }

    #[test]
    fn median_blur_removes_salt() -> Result<(), FilterError> {
        let mut image = Image::<u8, 3>::from_size_val([7, 7].into(), 50)?;
        let center = (3 * 7 + 3) * 3;
        image.as_slice_mut()[center..center + 3].copy_from_slice(&[255, 0, 255]);

        let filtered = ImageprocFilters::new().median_blur(&image, KernelSize::new(3)?)?;

        assert_eq!(filtered.size(), image.size());
        assert!(filtered.as_slice().iter().all(|&v| v == 50));

        Ok(())
    }

    #[test]
    fn median_blur_unit_kernel_is_identity() -> Result<(), FilterError> {
        let data = (0..4 * 3 * 3).map(|v| v as u8).collect();
        let image = Image::<u8, 3>::new([4, 3].into(), data)?;

        let filtered = ImageprocFilters::new().median_blur(&image, KernelSize::new(1)?)?;
        assert_eq!(filtered, image);

        Ok(())
    }

    #[test]
    fn large_kernels_larger_than_image() -> Result<(), FilterError> {
        let image = Image::<u8, 3>::from_size_val([40, 30].into(), 77)?;
        let filters = ImageprocFilters::new();
        let kernel = KernelSize::new(301)?;

        let median = filters.median_blur(&image, kernel)?;
        assert_eq!(median, image);

        let blurred = filters.gaussian_blur(&image, kernel)?;
        assert_eq!(blurred.size(), image.size());
        assert!(blurred.as_slice().iter().all(|&v| v.abs_diff(77) <= 1));

        Ok(())
    }
}
