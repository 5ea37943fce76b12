use keygate_core::authentication::AuthError;
use thiserror::Error;

/// Errors that can occur while starting the service
#[derive(Error, Debug)]
pub enum ProjectStartupError {
    #[error("Project not initialized: {0}")]
    NotInitialized(String),

    #[error("Core startup error: {0}")]
    CoreStartup(#[from] keygate_core::StartError),
}

/// Errors that can occur while extracting a key from a header value
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Rejected(#[from] AuthError),
}
