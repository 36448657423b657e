//! Test fixtures and helpers.
//!
//! Common registry setups for unit and integration tests.

use warden::Warden;
use warden_core::{Rule, RuleRegistry};

/// The standard four-rule registry used across the test suites: low ids,
/// a gap, and a far-out id so multi-chunk tokens show up early.
pub fn standard_rules() -> Vec<Rule> {
    vec![
        Rule::new(1, "login").with_name("Login"),
        Rule::new(2, "billing").with_name("Billing"),
        Rule::new(16, "reports"),
        Rule::new(1000, "admin").with_name("Administrator"),
    ]
}

/// A warden over [`standard_rules`] with the default wire format.
pub fn standard_warden() -> Warden {
    Warden::with_rules(standard_rules()).expect("standard rules are duplicate-free")
}

/// A warden whose registry holds only the far-apart ids 111 and 212,
/// exercising grants that land hundreds of bits up the vector.
pub fn sparse_warden() -> Warden {
    Warden::with_rules(vec![Rule::new(111, "frontier"), Rule::new(212, "outpost")])
        .expect("sparse rules are duplicate-free")
}

/// A contiguous registry `rule1..=ruleN`, for scale tests.
pub fn dense_rules(count: u64) -> RuleRegistry {
    RuleRegistry::with_rules(
        (1..=count)
            .map(|id| Rule::new(id, format!("rule{}", id)))
            .collect(),
    )
    .expect("contiguous ids are duplicate-free")
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::RuleId;

    #[test]
    fn test_standard_rules_are_unique() {
        let warden = standard_warden();
        assert_eq!(warden.rules().len(), 4);
        assert_eq!(warden.max_rule_id(), RuleId::new(1000));
    }

    #[test]
    fn test_sparse_warden_spans_chunks() {
        let warden = sparse_warden();
        let token = warden.generate_acl_code(&[RuleId::new(212)]);
        // Bit 211 needs seven 32-bit chunks.
        assert_eq!(token.split('-').count(), 7);
    }

    #[test]
    fn test_dense_rules_count() {
        let registry = dense_rules(100);
        assert_eq!(registry.len(), 100);
        assert_eq!(registry.max_id(), RuleId::new(100));
    }
}
