use edgelab_image::ImageBuffer;

use crate::display::{slug, DisplayFrame, ImageDisplay, PixelLayout};
use crate::error::DisplayError;

/// Display that logs every image to a rerun viewer.
///
/// Images are logged under their own entity path, `<index>_<title>`, together with a text entry
/// holding the full title, so earlier results stay browsable next to the latest one. The viewer is not modal: [`ImageDisplay::show`] returns as
/// soon as the image is handed to the recording stream.
pub struct RerunDisplay {
    rec: rerun::RecordingStream,
    shown: usize,
}

impl RerunDisplay {
    /// Spawn a rerun viewer and connect to it.
    ///
    /// # Arguments
    ///
    /// * `app_id` - The application id shown by the viewer.
    pub fn spawn(app_id: &str) -> Result<Self, DisplayError> {
        let rec = rerun::RecordingStreamBuilder::new(app_id).spawn()?;
        log::info!("spawned rerun viewer for {}", app_id);
        Ok(Self::from_stream(rec))
    }

    /// Use an already configured recording stream.
    pub fn from_stream(rec: rerun::RecordingStream) -> Self {
        Self { rec, shown: 0 }
    }
}

impl ImageDisplay for RerunDisplay {
    fn show(&mut self, title: &str, image: &ImageBuffer) -> Result<(), DisplayError> {
        let frame = DisplayFrame::from_buffer(image)?;

        let color_model = match frame.layout {
            PixelLayout::Luminance => rerun::ColorModel::L,
            PixelLayout::Rgb => rerun::ColorModel::RGB,
        };

        let entity_path = entity_path(self.shown, title);
        log::debug!("logging {} ({}) to {}", title, frame.size, entity_path);

        self.rec.log(
            entity_path.as_str(),
            &rerun::Image::from_elements(frame.pixels.as_slice(), frame.size.into(), color_model),
        )?;

        // the entity path is a slug, keep the title readable next to the image
        self.rec.log(
            entity_path.as_str(),
            &rerun::TextLog::new(title).with_level(rerun::TextLogLevel::INFO),
        )?;

        self.shown += 1;

        Ok(())
    }
}

/// Entity path of the `index`-th shown image.
fn entity_path(index: usize, title: &str) -> String {
    format!("{:02}_{}", index, slug(title))
}
