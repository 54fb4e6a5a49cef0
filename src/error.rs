use thiserror::Error;

use crate::api::FetchError;

/// Failures that stop the application before or while it runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Client(#[from] FetchError),
}
