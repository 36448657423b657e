//! Proptest generators for property-based testing.

use proptest::prelude::*;

use warden_core::{Rule, RuleRegistry};

/// Generate a duplicate-free, ascending set of rule ids.
///
/// Ids range up to 600 so generated permission vectors regularly spill
/// far past a machine word and across many chunks.
pub fn rule_ids() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..=600, 1..=48).prop_map(|ids| ids.into_iter().collect())
}

/// Generate a rule slug.
pub fn slug() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,31}".prop_map(String::from)
}

/// Build a registry over the given ids with synthetic slugs.
pub fn registry_from_ids(ids: &[u64]) -> RuleRegistry {
    RuleRegistry::with_rules(
        ids.iter()
            .map(|&id| Rule::new(id, format!("rule{}", id)))
            .collect(),
    )
    .expect("generated ids are unique")
}

/// Generate a registered id set together with a subset of it to grant.
pub fn registry_and_subset() -> impl Strategy<Value = (Vec<u64>, Vec<u64>)> {
    rule_ids().prop_flat_map(|ids| {
        let all = ids.clone();
        let len = ids.len();
        prop::sample::subsequence(ids, 0..=len)
            .prop_map(move |subset| (all.clone(), subset))
    })
}
