//! Errors that stop the viewer from starting.

use codeview_core::{ConfigError, SourceError};
use thiserror::Error;

/// Startup failure, rendered by the root error boundary.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
