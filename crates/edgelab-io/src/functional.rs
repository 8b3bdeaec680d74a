use std::path::Path;

use edgelab_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path into a BGR8 buffer.
///
/// The method tries to read from any image format supported by the image crate. Grayscale and
/// alpha images are expanded to three channels, and the red and blue channels are swapped so the
/// result follows the BGR layout used by the processing crates.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A three channel image in BGR order.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] for a missing path and a decode error when the file
/// is not a readable image.
pub fn read_image_any_bgr8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} as {:?} ({}x{})",
        file_path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let mut data = img.into_rgb8().into_raw();

    // rgb -> bgr
    data.chunks_exact_mut(3).for_each(|pixel| pixel.swap(0, 2));

    Ok(Image::new(size, data)?)
}

#[cfg(test)]
mod tests {
    use super::read_image_any_bgr8;
    use crate::error::IoError;

    #[test]
    fn read_missing_file() {
        let res = read_image_any_bgr8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_png_as_bgr() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("red.png");

        // a 2x1 image: one red and one blue pixel
        let rgb = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255])
            .ok_or("failed to build the test image")?;
        rgb.save(&file_path)?;

        let image = read_image_any_bgr8(&file_path)?;
        assert_eq!(image.size().width, 2);
        assert_eq!(image.size().height, 1);
        assert_eq!(image.as_slice(), &[0, 0, 255, 255, 0, 0]);

        Ok(())
    }

    #[test]
    fn read_gray_png_expands_channels() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let gray = image::GrayImage::from_raw(3, 2, vec![10, 20, 30, 40, 50, 60])
            .ok_or("failed to build the test image")?;
        gray.save(&file_path)?;

        let image = read_image_any_bgr8(&file_path)?;
        assert_eq!(image.num_channels(), 3);
        assert_eq!(image.get([1, 2, 0]), Some(&60));
        assert_eq!(image.get([1, 2, 2]), Some(&60));

        Ok(())
    }

    #[test]
    fn read_garbage_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("noise.png");
        std::fs::write(&file_path, b"definitely not an image")?;

        let res = read_image_any_bgr8(&file_path);
        assert!(res.is_err());

        Ok(())
    }
}
