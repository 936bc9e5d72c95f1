//! Core contract for the Warden authorization gate
//!
//! This crate holds everything the gate and its integrations share:
//! identifier newtypes, the unified error taxonomy, the centralized hash
//! helper, the collaborator traits the host platform implements, and the
//! audit-event contract. It has no mutable state and performs no I/O.

pub mod errors;
pub mod events;
pub mod hash;
pub mod interfaces;
pub mod types;

pub use errors::{GateError, GateResult};
pub use events::{AuditSink, MembershipEvent, TracingAuditSink};
pub use interfaces::{
    AdminPermissionCheck, ControllingIdentityLookup, CredentialBalanceOracle, IssuerIntrospection,
    PolicyAttachmentRegistry, RateSource,
};
pub use types::{
    Address, CapabilityId, IssuerId, ResourceId, ScopeKey, TemplateId, VariantId,
};
