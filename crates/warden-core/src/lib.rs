//! # Warden Core
//!
//! Pure primitives for Warden: rules, the rule registry, and the permission
//! token codec.
//!
//! This crate contains no I/O and no locking. It is pure computation over
//! rule descriptors and arbitrary-precision permission bit-vectors.
//!
//! ## Key Types
//!
//! - [`Rule`] / [`RuleId`] - A capability and its stable bit-position key
//! - [`RuleRegistry`] - Insertion-ordered rule collection, unique by id
//! - [`CodecConfig`] - The token wire format (chunk width, base, padding)
//! - [`PermissionCodec`] - Encode/decode plus the grant/revoke/verify algebra
//!
//! ## Tokens
//!
//! A token is the chunked, delimited, base-rendered serialization of an
//! unsigned arbitrary-precision integer in which bit `k` encodes the grant
//! status of rule `k + 1`. See the [`codec`] module.

pub mod codec;
pub mod config;
pub mod error;
pub mod registry;
pub mod rule;
pub mod types;

pub use codec::{PermissionCodec, CHUNK_DELIMITER};
pub use config::{CodecConfig, CodecConfigPatch, MAX_CHUNK_WIDTH};
pub use error::{ConfigError, RegistryError};
pub use registry::RuleRegistry;
pub use rule::{Rule, RulePatch};
pub use types::RuleId;
