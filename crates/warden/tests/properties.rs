//! Property-based invariants over the grant/revoke/verify algebra.

use num_traits::Zero;
use proptest::prelude::*;
use warden::{CodecConfig, RuleId, Warden};
use warden_testkit::generators::{registry_and_subset, registry_from_ids};

fn ids(raw: &[u64]) -> Vec<RuleId> {
    raw.iter().copied().map(RuleId::new).collect()
}

proptest! {
    /// Every granted id verifies true; every registered-but-ungranted id
    /// verifies false.
    #[test]
    fn round_trip((registered, granted) in registry_and_subset()) {
        let warden = Warden::new(registry_from_ids(&registered), CodecConfig::default());
        let token = warden.generate_acl_code(&ids(&granted));

        for &id in &granted {
            prop_assert!(warden.verify(&token, RuleId::new(id)));
        }
        for &id in registered.iter().filter(|id| !granted.contains(*id)) {
            prop_assert!(!warden.verify(&token, RuleId::new(id)));
        }
    }

    /// Granting the same set twice changes nothing.
    #[test]
    fn grant_is_idempotent((registered, granted) in registry_and_subset()) {
        let warden = Warden::new(registry_from_ids(&registered), CodecConfig::default());
        let once = warden.grant_permission("", &ids(&granted));
        let twice = warden.grant_permission(&once, &ids(&granted));
        prop_assert_eq!(once, twice);
    }

    /// Revoking exactly what was granted returns to the canonical zero.
    #[test]
    fn revoke_inverts_grant((registered, granted) in registry_and_subset()) {
        let warden = Warden::new(registry_from_ids(&registered), CodecConfig::default());
        let token = warden.generate_acl_code(&ids(&granted));
        let cleared = warden.revoke_permission(&token, &ids(&granted));

        prop_assert_eq!(&cleared, "00000000");
        prop_assert!(warden.decode(&cleared).is_zero());
        prop_assert_eq!(warden.decode(&cleared), warden.decode(""));
    }

    /// Unregistered and out-of-range candidates never change the result.
    #[test]
    fn ineligible_ids_are_neutral((registered, granted) in registry_and_subset()) {
        let warden = Warden::new(registry_from_ids(&registered), CodecConfig::default());

        let mut padded = granted.clone();
        // Gaps inside the registered range plus ids beyond the max id.
        padded.extend((1..=600).filter(|id| !registered.contains(id)).take(5));
        padded.extend(601..=605);
        padded.push(0);

        prop_assert_eq!(
            warden.generate_acl_code(&ids(&granted)),
            warden.generate_acl_code(&ids(&padded))
        );
        let base = warden.generate_acl_code(&ids(&registered));
        prop_assert_eq!(
            warden.revoke_permission(&base, &ids(&granted)),
            warden.revoke_permission(&base, &ids(&padded))
        );
    }

    /// The zero encoding never depends on how many bits were set before.
    #[test]
    fn canonical_zero_is_stable((registered, granted) in registry_and_subset()) {
        let warden = Warden::new(registry_from_ids(&registered), CodecConfig::default());
        let token = warden.generate_acl_code(&ids(&granted));
        let cleared = warden.revoke_permission(&token, &ids(&granted));
        let fresh = warden.generate_acl_code(&[]);
        prop_assert_eq!(cleared, fresh);
    }
}
