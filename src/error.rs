//! Startup error taxonomy.
//!
//! Everything here is fatal: `main` logs the error and exits with a failure
//! status. Once the frame loop runs, per-tick operations cannot fail; the only
//! recoverable condition is a rejected registry append, see
//! [`RegistryError`](crate::resources::actorregistry::RegistryError).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Window, renderer or subsystem creation failed.
    #[error("initialization failed: {0}")]
    Init(String),
    /// A texture, sprite sheet or asset description could not be loaded.
    #[error("failed to load asset '{}': {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },
    /// The configuration file exists but could not be read or is malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
