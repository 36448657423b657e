//! Error types for Warden core.

use thiserror::Error;

use crate::config::MAX_CHUNK_WIDTH;
use crate::types::RuleId;

/// Errors raised while constructing or updating a codec configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chunk width {0} exceeds the {MAX_CHUNK_WIDTH}-bit limit")]
    ChunkWidthTooLarge(u32),

    #[error("chunk width must be at least 1 bit")]
    ChunkWidthZero,

    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u32),
}

/// Errors raised by rule registry mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("rule with id {0} already exists")]
    DuplicateRule(RuleId),
}
