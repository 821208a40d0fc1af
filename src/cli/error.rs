//! Errors surfaced by subcommand handlers.

use std::path::PathBuf;
use thiserror::Error;

use color_namer::analyzer::AnalysisError;
use color_namer::camera::FrameError;
use color_namer::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid frame: {0}")]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Failed to read image '{}': {source}", path.display())]
    ImageRead {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write image '{}': {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("{0}")]
    Usage(String),
}
