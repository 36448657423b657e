//! The rule registry.
//!
//! An insertion-ordered collection of rule descriptors. The codec consults
//! it (read-only) to decide which candidate ids are eligible for grant and
//! revoke; callers mutate it through the add/update/remove operations.

use serde_json::{Map, Value};

use crate::error::RegistryError;
use crate::rule::{Rule, RulePatch};
use crate::types::RuleId;

/// Ordered collection of capability rules, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a rule list, rejecting duplicate ids.
    pub fn with_rules(rules: Vec<Rule>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.add(rule)?;
        }
        Ok(registry)
    }

    /// Add a rule. Fails if a rule with the same id is already present.
    pub fn add(&mut self, rule: Rule) -> Result<(), RegistryError> {
        if self.contains(rule.id) {
            return Err(RegistryError::DuplicateRule(rule.id));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Merge a patch over the rule with the given id.
    ///
    /// A no-op if the id is absent. The stored id itself never changes;
    /// [`RulePatch`] cannot even express a new one.
    pub fn update(&mut self, id: RuleId, patch: RulePatch) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            if let Some(slug) = patch.slug {
                rule.slug = slug;
            }
            if let Some(name) = patch.name {
                rule.name = Some(name);
            }
        }
    }

    /// Remove the rule with the given id, if present.
    ///
    /// Removing a rule does not retroactively clear its bit in any token
    /// already issued; it only makes the id ineligible for future grants.
    pub fn remove(&mut self, id: RuleId) {
        self.rules.retain(|r| r.id != id);
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by id.
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Whether a rule with this id is registered.
    pub fn contains(&self, id: RuleId) -> bool {
        self.rules.iter().any(|r| r.id == id)
    }

    /// The largest registered id, or [`RuleId::NONE`] when empty.
    ///
    /// This bounds the bit-vector width for *generation* only; tokens may
    /// already encode bits beyond it.
    pub fn max_id(&self) -> RuleId {
        self.rules
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(RuleId::NONE)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the rule space as a JSON object for operators.
    ///
    /// Keys are decimal ids in registry order; values carry the slug and,
    /// only when set, the name.
    pub fn template(&self) -> String {
        let mut map = Map::new();
        for rule in &self.rules {
            let mut entry = Map::new();
            entry.insert("slug".to_string(), Value::String(rule.slug.clone()));
            if let Some(name) = &rule.name {
                entry.insert("name".to_string(), Value::String(name.clone()));
            }
            map.insert(rule.id.to_string(), Value::Object(entry));
        }
        Value::Object(map).to_string()
    }
}
