use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

/// Where results are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayBackend {
    /// spawn a rerun viewer.
    #[default]
    Rerun,
    /// only report through the logger.
    Headless,
}

impl FromStr for DisplayBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rerun" => Ok(DisplayBackend::Rerun),
            "headless" | "none" => Ok(DisplayBackend::Headless),
            _ => Err(AppError::UnknownDisplayBackend(s.to_string())),
        }
    }
}

/// Everything needed to start a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// the image to explore.
    pub image_path: PathBuf,
    /// where results are shown.
    pub display: DisplayBackend,
    /// application id reported to the viewer.
    pub app_id: String,
    /// read operator input from this file instead of stdin.
    pub script: Option<PathBuf>,
}

impl SessionConfig {
    /// Default application id reported to the viewer.
    pub const DEFAULT_APP_ID: &'static str = "edgelab";
}
