//! Scoped allow-list authorization gate
//!
//! A caller may perform a protected action only if it holds a credential
//! from at least one issuer on an administrator-curated allow-list. The
//! allow-list is partitioned by a scope derived from the resource, the
//! policy template and variant, and the resource's current controlling
//! identity; transferring a resource rotates its scope keys and orphans
//! the old allow-lists.
//!
//! The crate is organized leaf-first:
//!
//! - [`registry`] - per-scope membership with O(1) add/remove and an
//!   enumerable view;
//! - [`scope`] - scope key derivation from the live controller;
//! - [`validator`] - admission-time issuer validation;
//! - [`evaluator`] - the any-of authorization scan;
//! - [`fee`] - the linear fee pass-through;
//! - [`gate`] - the composed entry points.

pub mod evaluator;
pub mod fee;
pub mod gate;
pub mod registry;
pub mod scope;
pub mod validator;

pub use evaluator::{authorize, check_member, MemberEligibility};
pub use fee::compute_fee;
pub use gate::{AuthorizationGate, Collaborators};
pub use registry::MembershipRegistry;
pub use scope::{derive_scope, DerivedScope};
pub use validator::validate_issuer;
