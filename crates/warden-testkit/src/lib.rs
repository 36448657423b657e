//! # Warden Testkit
//!
//! Testing utilities for Warden.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Canned registries and wardens for common test scenarios
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Fixtures
//!
//! ```rust
//! use warden_testkit::fixtures::standard_warden;
//! use warden::RuleId;
//!
//! let warden = standard_warden();
//! let token = warden.generate_acl_code(&[RuleId::new(1)]);
//! assert!(warden.verify(&token, RuleId::new(1)));
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use warden_testkit::generators::registry_and_subset;
//!
//! proptest! {
//!     #[test]
//!     fn granted_ids_verify((registered, granted) in registry_and_subset()) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{dense_rules, sparse_warden, standard_rules, standard_warden};
pub use generators::{registry_and_subset, registry_from_ids, rule_ids, slug};
