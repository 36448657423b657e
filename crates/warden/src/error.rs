//! Error types for the Warden facade.

use thiserror::Error;
use warden_core::{ConfigError, RegistryError};

/// Errors that can occur during Warden operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WardenError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Registry error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type for Warden operations.
pub type Result<T> = std::result::Result<T, WardenError>;
