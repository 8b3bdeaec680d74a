use std::path::Path;

use edgelab_image::{Image, ImageBuffer};
use edgelab_imgproc::EdgeFilterProvider;
use edgelab_viz::ImageDisplay;

use crate::dispatch::{self, Command, FilterRequest, State};
use crate::error::AppError;
use crate::menu;
use crate::operator::OperatorConsole;

/// Title of the grayscale image shown before the menu.
pub const ORIGINAL_TITLE: &str = "Original Grayscale Image";

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// the image could not be loaded, the menu never started.
    ImageUnavailable,
    /// the operator chose to exit.
    Exited,
    /// the operator input ran out before an exit was chosen.
    InputClosed,
}

/// One interactive run over a single image.
///
/// The session owns the filter provider, the display and the operator console, and drives the
/// [`dispatch::step`] state machine with the lines read from the console.
pub struct Session<P, D, O> {
    provider: P,
    display: D,
    console: O,
}

impl<P, D, O> Session<P, D, O>
where
    P: EdgeFilterProvider,
    D: ImageDisplay,
    O: OperatorConsole,
{
    /// Create a new session.
    pub fn new(provider: P, display: D, console: O) -> Self {
        Self {
            provider,
            display,
            console,
        }
    }

    /// Load the image at `image_path` and run the menu loop on it.
    ///
    /// A missing or unreadable image is reported to the operator once and ends the run with
    /// [`RunOutcome::ImageUnavailable`].
    pub fn run(&mut self, image_path: impl AsRef<Path>) -> Result<RunOutcome, AppError> {
        let image_path = image_path.as_ref();

        let image = match edgelab_io::read_image_any_bgr8(image_path) {
            Ok(image) => image,
            Err(err) => {
                log::debug!("failed to load {}: {}", image_path.display(), err);
                self.console.say(&format!(
                    "Error: Image '{}' not found!",
                    image_path.display()
                ))?;
                return Ok(RunOutcome::ImageUnavailable);
            }
        };

        log::info!("loaded {} ({})", image_path.display(), image.size());

        self.run_with_image(image)
    }

    /// Run the menu loop on an already loaded BGR image.
    pub fn run_with_image(&mut self, image: Image<u8, 3>) -> Result<RunOutcome, AppError> {
        let gray = self.provider.grayscale(&image)?;
        self.display
            .show(ORIGINAL_TITLE, &ImageBuffer::Gray(gray.clone()))?;

        let mut state = State::AwaitingChoice;
        loop {
            if state == State::AwaitingChoice {
                self.console.say(&menu::render())?;
            }

            let Some(line) = self.console.read_line(state.prompt())? else {
                log::info!("operator input closed");
                return Ok(RunOutcome::InputClosed);
            };

            let transition = dispatch::step(state, &line);
            match transition.command {
                Command::None => {}
                Command::Notify(notice) => self.console.say(notice.message())?,
                Command::Apply(request) => self.apply(request, &image, &gray)?,
            }

            state = transition.next;
            if state == State::Finished {
                return Ok(RunOutcome::Exited);
            }
        }
    }

    /// Run one filter and display its result.
    ///
    /// Filter failures are reported to the operator and the loop carries on, display failures
    /// end the session.
    fn apply(
        &mut self,
        request: FilterRequest,
        color: &Image<u8, 3>,
        gray: &Image<u8, 1>,
    ) -> Result<(), AppError> {
        log::debug!("applying {:?}", request);

        let result = match request {
            FilterRequest::Sobel => self.provider.sobel(gray).map(ImageBuffer::Gray),
            FilterRequest::Canny(thresholds) => {
                self.provider.canny(gray, thresholds).map(ImageBuffer::Gray)
            }
            FilterRequest::Laplacian => self.provider.laplacian(gray).map(ImageBuffer::Gray),
            FilterRequest::Gaussian(kernel) => {
                self.provider.gaussian_blur(color, kernel).map(ImageBuffer::Bgr)
            }
            FilterRequest::Median(kernel) => {
                self.provider.median_blur(color, kernel).map(ImageBuffer::Bgr)
            }
        };

        match result {
            Ok(output) => {
                log::debug!(
                    "{} produced a {} image with {} channel(s)",
                    request.title(),
                    output.size(),
                    output.num_channels()
                );
                self.display.show(request.title(), &output)?
            }
            Err(err) => {
                log::warn!("{} failed: {}", request.title(), err);
                self.console.say(&format!("Error: {}", err))?;
            }
        }

        Ok(())
    }

    /// Consume the session and return its parts.
    pub fn into_parts(self) -> (P, D, O) {
        (self.provider, self.display, self.console)
    }
}
