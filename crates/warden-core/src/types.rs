//! Strong type definitions for Warden.
//!
//! Rule identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rule, and the key for its position in the permission
/// bit-vector: rule `id` owns bit `id - 1`, with id 1 at the least
/// significant bit.
///
/// IDs are caller-assigned and stable. They need not be contiguous or
/// ordered; the registry only requires uniqueness.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub u64);

impl RuleId {
    /// Create a new RuleId.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The bit position this rule occupies in a permission bit-vector,
    /// or `None` for id 0, which owns no bit and can never be granted.
    pub const fn bit_index(&self) -> Option<u64> {
        self.0.checked_sub(1)
    }

    /// Sentinel for "no rules registered" (returned by an empty registry's
    /// max id). No bit maps to it.
    pub const NONE: Self = Self(0);
}

impl fmt::Debug for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleId({})", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RuleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
