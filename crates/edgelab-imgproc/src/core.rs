use edgelab_image::{Image, ImageError};
use num_traits::ToPrimitive;

use crate::parallel;

/// Saturate a floating point value to the 8-bit range, rounding half to even.
fn saturate_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Scale a signed response to 8-bit by taking its absolute value.
///
/// dst(x,y,c) = saturate(|src(x,y,c)|)
///
/// # Arguments
///
/// * `src` - The input image, typically a signed derivative response.
/// * `dst` - The output 8-bit image.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use edgelab_image::Image;
/// use edgelab_imgproc::core::convert_scale_abs;
///
/// let src = Image::<i16, 1>::new([4, 1].into(), vec![-3, 12, -400, 255]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
///
/// convert_scale_abs(&src, &mut dst).unwrap();
/// assert_eq!(dst.as_slice(), &[3, 12, 255, 255]);
/// ```
pub fn convert_scale_abs<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError>
where
    T: ToPrimitive + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        src_pixel
            .iter()
            .zip(dst_pixel.iter_mut())
            .for_each(|(s, d)| {
                *d = saturate_u8(s.to_f64().unwrap_or_default().abs());
            });
    });

    Ok(())
}

/// Performs weighted addition of two 8-bit images `src1` and `src2` with weights `alpha`
/// and `beta`, and a scalar `gamma`. The formula used is:
///
/// dst(x,y,c) = saturate(src1(x,y,c) * alpha + src2(x,y,c) * beta + gamma)
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `alpha` - Weight of the first image elements to be multiplied.
/// * `src2` - The second input image.
/// * `beta` - Weight of the second image elements to be multiplied.
/// * `gamma` - Scalar added to each sum.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
/// Returns an error if the size of `dst` does not match the size of `src1` or `src2`.
pub fn add_weighted<const C: usize>(
    src1: &Image<u8, C>,
    alpha: f64,
    src2: &Image<u8, C>,
    beta: f64,
    gamma: f64,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val_two(src1, src2, dst, |&a, &b, dst_pixel| {
        *dst_pixel = saturate_u8(a as f64 * alpha + b as f64 * beta + gamma);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use edgelab_image::{Image, ImageError, ImageSize};

    #[test]
    fn convert_scale_abs_saturates() -> Result<(), ImageError> {
        let src = Image::<i16, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![i16::MIN, -1, 0, 1, 254, i16::MAX],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        super::convert_scale_abs(&src, &mut dst)?;
        assert_eq!(dst.as_slice(), &[255, 1, 0, 1, 254, 255]);

        Ok(())
    }

    #[test]
    fn convert_scale_abs_rounds_floats() -> Result<(), ImageError> {
        let src = Image::<f32, 1>::new([3, 1].into(), vec![-0.4, 2.6, -126.5])?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        super::convert_scale_abs(&src, &mut dst)?;
        assert_eq!(dst.as_slice(), &[0, 3, 126]);

        Ok(())
    }

    #[test]
    fn add_weighted_half_half() -> Result<(), ImageError> {
        let src1 = Image::<u8, 1>::new([2, 2].into(), vec![0, 100, 255, 7])?;
        let src2 = Image::<u8, 1>::new([2, 2].into(), vec![0, 50, 255, 8])?;
        let mut dst = Image::<u8, 1>::from_size_val(src1.size(), 0)?;

        super::add_weighted(&src1, 0.5, &src2, 0.5, 0.0, &mut dst)?;
        assert_eq!(dst.as_slice(), &[0, 75, 255, 8]);

        Ok(())
    }

    #[test]
    fn add_weighted_rounds_half_to_even() -> Result<(), ImageError> {
        let src1 = Image::<u8, 1>::new([4, 1].into(), vec![1, 3, 5, 0])?;
        let src2 = Image::<u8, 1>::new([4, 1].into(), vec![0, 0, 0, 1])?;
        let mut dst = Image::<u8, 1>::from_size_val(src1.size(), 0)?;

        super::add_weighted(&src1, 0.5, &src2, 0.5, 0.0, &mut dst)?;
        assert_eq!(dst.as_slice(), &[0, 2, 2, 0]);

        Ok(())
    }

    #[test]
    fn add_weighted_size_mismatch() -> Result<(), ImageError> {
        let src1 = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        let src2 = Image::<u8, 1>::from_size_val([2, 3].into(), 0)?;
        let mut dst = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;

        let res = super::add_weighted(&src1, 0.5, &src2, 0.5, 0.0, &mut dst);
        assert_eq!(res, Err(ImageError::InvalidImageSize(2, 2, 2, 3)));

        Ok(())
    }
}
