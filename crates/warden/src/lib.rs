//! # Warden
//!
//! Compact, reversible permission tokens - a set of granted rule ids
//! encoded as a short, human-transmittable string, with grant, revoke,
//! and verify operating directly on the token.
//!
//! ## Overview
//!
//! Warden keeps an in-memory registry of capability rules and encodes any
//! subset of them as a chunked token string:
//!
//! - **Rule**: A named capability with a stable numeric id. Rule `id` owns
//!   bit `id - 1` of the permission bit-vector.
//! - **Token**: The bit-vector rendered as fixed-width chunks in a
//!   configurable base, most-significant chunk first, joined by `-`.
//! - **Grant / Revoke**: Decode, flip the eligible bits, re-encode. Ids not
//!   currently registered are skipped, never errors.
//! - **Verify**: Test one bit; reads beyond the token's width are absent,
//!   not failures.
//!
//! ## Key Concepts
//!
//! - Tokens are never stored here. Callers hold them; every operation takes
//!   a token in and hands a new one back.
//! - Deleting a rule never rewrites issued tokens; it only makes the id
//!   ineligible for future grants and revokes.
//! - The token carries no version tag. Encoder and decoder must share one
//!   configuration; a mismatch decodes to a wrong value, not an error.
//!
//! ## Usage
//!
//! ```rust
//! use warden::{Rule, RuleId, Warden};
//!
//! let warden = Warden::with_rules(vec![
//!     Rule::new(1, "login"),
//!     Rule::new(3, "reports"),
//!     Rule::new(6, "admin"),
//! ])
//! .unwrap();
//!
//! let token = warden.generate_acl_code(&[RuleId::new(1), RuleId::new(6)]);
//! assert_eq!(token, "00000021");
//! assert!(warden.verify(&token, RuleId::new(1)));
//! assert!(!warden.verify(&token, RuleId::new(3)));
//!
//! let token = warden.revoke_permission(&token, &[RuleId::new(6)]);
//! assert_eq!(token, "00000001");
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports `warden_core` as [`core`] for access to the pure
//! primitives, and the commonly used types at the root.

pub mod engine;
pub mod error;

// Re-export the primitives crate
pub use warden_core as core;

// Re-export main types for convenience
pub use engine::Warden;
pub use error::{Result, WardenError};

// Re-export commonly used core types
pub use warden_core::{
    CodecConfig, CodecConfigPatch, ConfigError, PermissionCodec, RegistryError, Rule, RuleId,
    RulePatch, RuleRegistry, CHUNK_DELIMITER, MAX_CHUNK_WIDTH,
};
