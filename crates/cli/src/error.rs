use thiserror::Error;

use crate::commands::error::ProjectStartupError;

/// Top-level CLI error that composes all module-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Startup error: {0}")]
    Startup(#[from] ProjectStartupError),

    #[error("Path error: {0}")]
    Path(String),
}

impl From<String> for CliError {
    fn from(err: String) -> Self {
        CliError::Path(err)
    }
}
