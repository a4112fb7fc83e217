//! Application errors.

use pathsketch_core::tools::ConfigError;
use pathsketch_render::RendererError;
use thiserror::Error;

/// Errors surfaced by the command line shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Script error: {0}")]
    Script(String),
    #[error("Settings error: {0}")]
    Config(#[from] ConfigError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
