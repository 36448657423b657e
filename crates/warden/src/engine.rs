//! The Warden: unified API for permission tokens.
//!
//! The Warden brings together the rule registry and the token codec behind
//! a thread-safe interface. Token operations hold the registry lock for
//! their full duration, so every grant or revoke sees one consistent
//! registry snapshot even while other threads add or remove rules.

use std::sync::RwLock;

use num_bigint::BigUint;
use warden_core::{
    CodecConfig, CodecConfigPatch, PermissionCodec, Rule, RuleId, RulePatch, RuleRegistry,
};

use crate::error::Result;

/// The main Warden struct.
///
/// Provides a unified API for:
/// - Managing capability rules
/// - Issuing and extending permission tokens (grant)
/// - Shrinking permission tokens (revoke)
/// - Checking a token against a rule (verify)
/// - Describing the rule space to operators (template)
pub struct Warden {
    /// The shared rule registry.
    registry: RwLock<RuleRegistry>,
    /// The token codec, swapped wholesale on configuration updates.
    codec: RwLock<PermissionCodec>,
}

impl Warden {
    /// Create a warden over a registry and a validated configuration.
    pub fn new(registry: RuleRegistry, config: CodecConfig) -> Self {
        Self {
            registry: RwLock::new(registry),
            codec: RwLock::new(PermissionCodec::new(config)),
        }
    }

    /// Create a warden from a rule list with the default wire format.
    pub fn with_rules(rules: Vec<Rule>) -> Result<Self> {
        let registry = RuleRegistry::with_rules(rules)?;
        Ok(Self::new(registry, CodecConfig::default()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registry Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a rule. Fails if the id is already registered.
    pub fn add_rule(&self, rule: Rule) -> Result<()> {
        self.registry.write().unwrap().add(rule)?;
        Ok(())
    }

    /// Merge a patch over a stored rule; a no-op if the id is absent.
    pub fn update_rule(&self, id: RuleId, patch: RulePatch) {
        self.registry.write().unwrap().update(id, patch);
    }

    /// Remove a rule; a no-op if the id is absent. Tokens already issued
    /// keep whatever bits they have.
    pub fn remove_rule(&self, id: RuleId) {
        self.registry.write().unwrap().remove(id);
    }

    /// Snapshot of the rules in registry order.
    pub fn rules(&self) -> Vec<Rule> {
        self.registry.read().unwrap().rules().to_vec()
    }

    /// The largest registered id, or [`RuleId::NONE`] when empty.
    pub fn max_rule_id(&self) -> RuleId {
        self.registry.read().unwrap().max_id()
    }

    /// JSON description of the rule space, keyed by decimal id in registry
    /// order.
    pub fn rule_template(&self) -> String {
        self.registry.read().unwrap().template()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The wire-format configuration in force.
    pub fn config(&self) -> CodecConfig {
        self.codec.read().unwrap().config().clone()
    }

    /// Merge a patch over the current configuration.
    ///
    /// The merged configuration is validated before it takes effect; on
    /// error the previous configuration stays in force and tokens issued
    /// under it remain decodable.
    pub fn set_config(&self, patch: &CodecConfigPatch) -> Result<()> {
        let mut codec = self.codec.write().unwrap();
        let merged = codec.config().merged(patch)?;
        tracing::debug!(config = ?merged, "codec configuration updated");
        *codec = PermissionCodec::new(merged);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Token Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the token grants the given rule. Out-of-range bits read as
    /// absent, never as an error.
    pub fn verify(&self, token: &str, rule_id: RuleId) -> bool {
        self.codec.read().unwrap().verify(token, rule_id)
    }

    /// Set the bits of every eligible candidate id and return the new
    /// token. Ineligible ids are skipped silently.
    pub fn grant_permission(&self, token: &str, rule_ids: &[RuleId]) -> String {
        let registry = self.registry.read().unwrap();
        self.codec.read().unwrap().grant(token, rule_ids, &registry)
    }

    /// Clear the bits of every eligible candidate id and return the new
    /// token. Clearing everything yields the canonical zero token.
    pub fn revoke_permission(&self, token: &str, rule_ids: &[RuleId]) -> String {
        let registry = self.registry.read().unwrap();
        self.codec.read().unwrap().revoke(token, rule_ids, &registry)
    }

    /// Build a token from scratch for the given ids.
    pub fn generate_acl_code(&self, rule_ids: &[RuleId]) -> String {
        let registry = self.registry.read().unwrap();
        self.codec.read().unwrap().generate(rule_ids, &registry)
    }

    /// Decode a token into its permission bit-vector.
    pub fn decode(&self, token: &str) -> BigUint {
        self.codec.read().unwrap().decode(token)
    }

    /// Encode a permission bit-vector as a token.
    pub fn encode(&self, value: &BigUint) -> String {
        self.codec.read().unwrap().encode(value)
    }
}

impl Default for Warden {
    fn default() -> Self {
        Self::new(RuleRegistry::new(), CodecConfig::default())
    }
}
