//! Rule descriptors and partial updates.
//!
//! A rule names a capability the permission system can grant. The codec
//! never interprets slugs or names; it only cares about the id.

use serde::{Deserialize, Serialize};

use crate::types::RuleId;

/// A single capability rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier, unique within a registry. Owns bit `id - 1`.
    pub id: RuleId,

    /// Machine-readable slug (opaque to the codec).
    pub slug: String,

    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Rule {
    /// Create a rule with no display name.
    pub fn new(id: impl Into<RuleId>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: None,
        }
    }

    /// Attach a display name to this rule.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Partial update for a stored rule.
///
/// Carries no id on purpose: the stored id is immutable once inserted.
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatch {
    /// Replacement slug, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Replacement display name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RulePatch {
    /// A patch that replaces the slug.
    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// A patch that replaces the display name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the slug on an existing patch.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the display name on an existing patch.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
