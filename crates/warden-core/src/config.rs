//! Codec configuration.
//!
//! The configuration fixes the token wire format: how many bits each chunk
//! carries, the base its digits are rendered in, and how chunks are padded.
//! Encoder and decoder must agree on all of it; the token itself carries no
//! version tag (see [`PermissionCodec::decode`](crate::codec::PermissionCodec::decode)).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Hard cap on the bit width of a single chunk.
pub const MAX_CHUNK_WIDTH: u32 = 128;

/// Wire-format configuration for the permission codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Bits of the permission bit-vector per chunk. Must be in 1..=128.
    pub chunk_width: u32,

    /// Numeric base each chunk is rendered in (2..=36).
    pub base: u32,

    /// Zero-padded digit count per rendered chunk.
    ///
    /// Not validated against `chunk_width`: a width too small to hold a
    /// full chunk is the caller's responsibility.
    pub digit_width: usize,

    /// Character used to left-pad a chunk to `digit_width` digits.
    pub pad_char: char,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            chunk_width: 32,
            base: 16,
            digit_width: 8,
            pad_char: '0',
        }
    }
}

impl CodecConfig {
    /// Create a validated configuration.
    pub fn new(
        chunk_width: u32,
        base: u32,
        digit_width: usize,
        pad_char: char,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            chunk_width,
            base,
            digit_width,
            pad_char,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_width == 0 {
            return Err(ConfigError::ChunkWidthZero);
        }
        if self.chunk_width > MAX_CHUNK_WIDTH {
            return Err(ConfigError::ChunkWidthTooLarge(self.chunk_width));
        }
        if self.base < 2 || self.base > 36 {
            return Err(ConfigError::UnsupportedBase(self.base));
        }
        Ok(())
    }

    /// Merge a patch over this configuration and validate the result.
    ///
    /// Pure: returns the merged configuration without touching `self`, so a
    /// rejected update leaves the current configuration in force.
    pub fn merged(&self, patch: &CodecConfigPatch) -> Result<Self, ConfigError> {
        let merged = Self {
            chunk_width: patch.chunk_width.unwrap_or(self.chunk_width),
            base: patch.base.unwrap_or(self.base),
            digit_width: patch.digit_width.unwrap_or(self.digit_width),
            pad_char: patch.pad_char.unwrap_or(self.pad_char),
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// Partial codec configuration; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit_width: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_char: Option<char>,
}

impl CodecConfigPatch {
    /// Patch only the chunk width.
    pub fn chunk_width(width: u32) -> Self {
        Self {
            chunk_width: Some(width),
            ..Self::default()
        }
    }

    /// Patch only the base.
    pub fn base(base: u32) -> Self {
        Self {
            base: Some(base),
            ..Self::default()
        }
    }
}
