use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use edgelab::config::{DisplayBackend, SessionConfig};
use edgelab::imgproc::ImageprocFilters;
use edgelab::operator::{LineConsole, OperatorConsole};
use edgelab::viz::{HeadlessDisplay, ImageDisplay, LazyDisplay, RerunDisplay};
use edgelab::{RunOutcome, Session};

/// Interactively apply edge detection and smoothing filters to an image
#[derive(FromArgs)]
struct Args {
    /// path to the image to explore
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// where results are shown: rerun or headless
    #[argh(option, default = "DisplayBackend::Rerun")]
    display: DisplayBackend,

    /// application id reported to the rerun viewer
    #[argh(option, default = "SessionConfig::DEFAULT_APP_ID.to_string()")]
    app_id: String,

    /// read operator input from this file instead of stdin
    #[argh(option)]
    script: Option<PathBuf>,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        Self {
            image_path: args.image_path,
            display: args.display,
            app_id: args.app_id,
            script: args.script,
        }
    }
}

fn run_session<D, O>(
    config: &SessionConfig,
    display: D,
    console: O,
) -> Result<RunOutcome, Box<dyn std::error::Error>>
where
    D: ImageDisplay,
    O: OperatorConsole,
{
    let mut session = Session::new(ImageprocFilters::new(), display, console);
    Ok(session.run(&config.image_path)?)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let config = SessionConfig::from(args);

    // the viewer is spawned on the first image, after loading succeeded
    let display: Box<dyn ImageDisplay> = match config.display {
        DisplayBackend::Rerun => {
            let app_id = config.app_id.clone();
            Box::new(LazyDisplay::new(move || RerunDisplay::spawn(&app_id)))
        }
        DisplayBackend::Headless => Box::new(HeadlessDisplay::new()),
    };

    let outcome = match &config.script {
        Some(script) => {
            log::info!("reading operator input from {}", script.display());
            let reader = BufReader::new(File::open(script)?);
            let console = LineConsole::new(reader, std::io::stdout()).with_echo(true);
            run_session(&config, display, console)?
        }
        None => run_session(&config, display, LineConsole::stdio())?,
    };

    log::debug!("session ended: {:?}", outcome);

    Ok(match outcome {
        RunOutcome::ImageUnavailable => ExitCode::FAILURE,
        RunOutcome::Exited | RunOutcome::InputClosed => ExitCode::SUCCESS,
    })
}
