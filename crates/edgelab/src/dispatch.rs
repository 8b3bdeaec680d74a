//! The menu loop as a pure transition function.
//!
//! [`step`] maps the current [`State`] and one line of operator input to the next state and the
//! [`Command`] the session has to carry out. It never touches the console, the filters or the
//! display, so every path of the loop can be checked without them.

use edgelab_imgproc::{CannyThresholds, KernelSize};

use crate::menu::MenuChoice;

/// Which smoothing filter is waiting for its kernel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Smoothing {
    /// gaussian blur.
    Gaussian,
    /// median filter.
    Median,
}

/// Where the loop currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// waiting for a menu choice.
    AwaitingChoice,
    /// waiting for the lower Canny threshold.
    AwaitingCannyLower,
    /// waiting for the upper Canny threshold.
    AwaitingCannyUpper {
        /// the lower threshold already entered.
        lower: i32,
    },
    /// waiting for a kernel size.
    AwaitingKernel(Smoothing),
    /// the operator chose to exit.
    Finished,
}

impl State {
    /// Text shown to the operator before reading input in this state.
    pub fn prompt(&self) -> &'static str {
        match self {
            State::AwaitingChoice => "Enter your choice (1-6): ",
            State::AwaitingCannyLower => "Enter Lower threshold (e.g., 100): ",
            State::AwaitingCannyUpper { .. } => "Enter Upper threshold (e.g., 200): ",
            State::AwaitingKernel(_) => "Enter kernel size (must be odd, e.g., 5): ",
            State::Finished => "",
        }
    }
}

/// A fully parameterised filter invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterRequest {
    /// Sobel gradient magnitude of the grayscale image.
    Sobel,
    /// Canny edges of the grayscale image.
    Canny(CannyThresholds),
    /// Laplacian response of the grayscale image.
    Laplacian,
    /// gaussian blur of the color image.
    Gaussian(KernelSize),
    /// median filter of the color image.
    Median(KernelSize),
}

impl FilterRequest {
    /// Title used when displaying the result.
    pub fn title(&self) -> &'static str {
        match self {
            FilterRequest::Sobel => "Sobel Edge Detection",
            FilterRequest::Canny(_) => "Canny Edge Detection",
            FilterRequest::Laplacian => "Laplacian Edge Detection",
            FilterRequest::Gaussian(_) => "Gaussian Smoothed",
            FilterRequest::Median(_) => "Median Filtered",
        }
    }
}

/// Messages for the operator that are not filter results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// the menu choice was not recognised.
    InvalidChoice,
    /// a Canny threshold was not an integer.
    InvalidThresholds,
    /// a kernel size was not a usable integer.
    InvalidKernelSize,
    /// the operator left.
    Farewell,
}

impl Notice {
    /// Text printed to the operator.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::InvalidChoice => "Invalid choice.",
            Notice::InvalidThresholds => "Please enter valid numbers.",
            Notice::InvalidKernelSize => "Invalid input.",
            Notice::Farewell => "Exiting...",
        }
    }
}

/// Side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// nothing to do besides moving to the next state.
    None,
    /// run a filter and display its result.
    Apply(FilterRequest),
    /// print a message.
    Notify(Notice),
}

/// Result of feeding one line of input to [`step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// state after this input.
    pub next: State,
    /// side effect to carry out.
    pub command: Command,
}

impl Transition {
    fn to(next: State) -> Self {
        Self {
            next,
            command: Command::None,
        }
    }

    fn back(command: Command) -> Self {
        Self {
            next: State::AwaitingChoice,
            command,
        }
    }
}

fn parse_threshold(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Parse a kernel size and apply the odd size policy.
fn parse_kernel(input: &str) -> Option<KernelSize> {
    let requested: i64 = input.trim().parse().ok()?;
    let requested = u32::try_from(requested).ok()?;
    let kernel = KernelSize::from_requested(requested);
    if kernel.get() != requested {
        log::debug!("kernel size {} bumped to {}", requested, kernel.get());
    }
    Some(kernel)
}

/// Advance the loop by one line of operator input.
///
/// # Example
///
/// ```
/// use edgelab::dispatch::{step, Command, FilterRequest, Smoothing, State};
///
/// let t = step(State::AwaitingChoice, "4");
/// assert_eq!(t.next, State::AwaitingKernel(Smoothing::Gaussian));
///
/// let t = step(t.next, "4");
/// assert_eq!(t.next, State::AwaitingChoice);
/// match t.command {
///     Command::Apply(FilterRequest::Gaussian(kernel)) => assert_eq!(kernel.get(), 5),
///     other => panic!("unexpected command {other:?}"),
/// }
/// ```
pub fn step(state: State, input: &str) -> Transition {
    match state {
        State::AwaitingChoice => match MenuChoice::parse(input) {
            Some(MenuChoice::Sobel) => Transition::back(Command::Apply(FilterRequest::Sobel)),
            Some(MenuChoice::Canny) => Transition::to(State::AwaitingCannyLower),
            Some(MenuChoice::Laplacian) => {
                Transition::back(Command::Apply(FilterRequest::Laplacian))
            }
            Some(MenuChoice::GaussianSmooth) => {
                Transition::to(State::AwaitingKernel(Smoothing::Gaussian))
            }
            Some(MenuChoice::MedianFilter) => {
                Transition::to(State::AwaitingKernel(Smoothing::Median))
            }
            Some(MenuChoice::Exit) => Transition {
                next: State::Finished,
                command: Command::Notify(Notice::Farewell),
            },
            None => Transition::back(Command::Notify(Notice::InvalidChoice)),
        },
        State::AwaitingCannyLower => match parse_threshold(input) {
            Some(lower) => Transition::to(State::AwaitingCannyUpper { lower }),
            None => Transition::back(Command::Notify(Notice::InvalidThresholds)),
        },
        State::AwaitingCannyUpper { lower } => match parse_threshold(input) {
            Some(upper) => Transition::back(Command::Apply(FilterRequest::Canny(
                CannyThresholds { lower, upper },
            ))),
            None => Transition::back(Command::Notify(Notice::InvalidThresholds)),
        },
        State::AwaitingKernel(smoothing) => match parse_kernel(input) {
            Some(kernel) => Transition::back(Command::Apply(match smoothing {
                Smoothing::Gaussian => FilterRequest::Gaussian(kernel),
                Smoothing::Median => FilterRequest::Median(kernel),
            })),
            None => Transition::back(Command::Notify(Notice::InvalidKernelSize)),
        },
        State::Finished => Transition::to(State::Finished),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel_of(t: Transition) -> u32 {
        match t.command {
            Command::Apply(FilterRequest::Gaussian(k)) | Command::Apply(FilterRequest::Median(k)) => {
                k.get()
            }
            other => panic!("expected a smoothing request, got {other:?}"),
        }
    }

    #[test]
    fn single_step_filters() {
        assert_eq!(
            step(State::AwaitingChoice, "1"),
            Transition::back(Command::Apply(FilterRequest::Sobel))
        );
        assert_eq!(
            step(State::AwaitingChoice, "3"),
            Transition::back(Command::Apply(FilterRequest::Laplacian))
        );
    }

    #[test]
    fn invalid_choice_reprompts() {
        for input in ["0", "7", "", "sobel"] {
            assert_eq!(
                step(State::AwaitingChoice, input),
                Transition::back(Command::Notify(Notice::InvalidChoice))
            );
        }
    }

    #[test]
    fn exit_finishes() {
        let t = step(State::AwaitingChoice, "6");
        assert_eq!(t.next, State::Finished);
        assert_eq!(t.command, Command::Notify(Notice::Farewell));

        // nothing happens after the end
        assert_eq!(step(State::Finished, "1"), Transition::to(State::Finished));
    }

    #[test]
    fn canny_collects_both_thresholds() {
        let t = step(State::AwaitingChoice, "2");
        assert_eq!(t, Transition::to(State::AwaitingCannyLower));

        let t = step(t.next, "100");
        assert_eq!(t, Transition::to(State::AwaitingCannyUpper { lower: 100 }));

        let t = step(t.next, " 200 ");
        assert_eq!(
            t,
            Transition::back(Command::Apply(FilterRequest::Canny(CannyThresholds {
                lower: 100,
                upper: 200
            })))
        );
    }

    #[test]
    fn canny_rejects_non_numeric() {
        assert_eq!(
            step(State::AwaitingCannyLower, "abc"),
            Transition::back(Command::Notify(Notice::InvalidThresholds))
        );
        assert_eq!(
            step(State::AwaitingCannyUpper { lower: 10 }, "12.5"),
            Transition::back(Command::Notify(Notice::InvalidThresholds))
        );
    }

    #[test]
    fn even_kernel_is_bumped() {
        let gaussian = State::AwaitingKernel(Smoothing::Gaussian);
        let median = State::AwaitingKernel(Smoothing::Median);

        assert_eq!(kernel_of(step(gaussian, "4")), 5);
        assert_eq!(kernel_of(step(median, "4")), 5);
        assert_eq!(kernel_of(step(gaussian, "0")), 1);
    }

    #[test]
    fn odd_kernel_passes_through() {
        let median = State::AwaitingKernel(Smoothing::Median);
        for k in [1u32, 3, 5, 7, 31] {
            assert_eq!(kernel_of(step(median, &k.to_string())), k);
        }
    }

    #[test]
    fn large_kernel_passes_through() {
        let gaussian = State::AwaitingKernel(Smoothing::Gaussian);
        assert_eq!(kernel_of(step(gaussian, "301")), 301);
        assert_eq!(kernel_of(step(gaussian, "256")), 257);
        assert_eq!(kernel_of(step(gaussian, "100000")), 100001);
    }

    #[test]
    fn bad_kernel_is_invalid_input() {
        for input in ["five", "-3", "", "3x3", "4.5", "99999999999"] {
            assert_eq!(
                step(State::AwaitingKernel(Smoothing::Gaussian), input),
                Transition::back(Command::Notify(Notice::InvalidKernelSize)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn prompts() {
        assert_eq!(State::AwaitingChoice.prompt(), "Enter your choice (1-6): ");
        assert_eq!(
            State::AwaitingKernel(Smoothing::Median).prompt(),
            "Enter kernel size (must be odd, e.g., 5): "
        );
    }
}
