//! Collaborator seams consumed by the gate
//!
//! The gate never talks to the host platform directly; every external
//! dependency comes in through one of these object-safe traits. Production
//! integrations implement them against the host runtime, `warden-testkit`
//! ships in-memory implementations for tests.

use crate::errors::GateResult;
use crate::types::{Address, CapabilityId, IssuerId, ResourceId, TemplateId, VariantId};

/// Resolves a resource's current controlling identity.
///
/// Consulted live on every scope derivation; implementations must not cache
/// across calls, and the gate never memoizes the answer. A controller change
/// between two calls is exactly how a scope resets.
pub trait ControllingIdentityLookup: Send + Sync {
    /// Current controller of `resource`. Fails if the resource is unknown.
    fn owner(&self, resource: ResourceId) -> GateResult<Address>;
}

/// Confirms a policy variant has been attached to a resource.
///
/// Consulted only when admitting an issuer.
pub trait PolicyAttachmentRegistry: Send + Sync {
    /// True if (`template`, `variant`) is attached to `resource`.
    fn is_attached(&self, resource: ResourceId, template: TemplateId, variant: VariantId) -> bool;
}

/// Read-only credential balance oracle.
///
/// A call may fail per issuer (a member that stopped conforming to the
/// credential interface); the evaluator decides what a failure means for
/// the scan.
pub trait CredentialBalanceOracle: Send + Sync {
    /// Number of credentials `account` holds from `issuer`.
    fn balance_of(&self, issuer: IssuerId, account: Address) -> GateResult<u64>;
}

/// Supplies the unit fee rate for a policy variant.
pub trait RateSource: Send + Sync {
    /// Unit rate for (`template`, `variant`). Fails for unknown entries.
    fn unit_rate(&self, template: TemplateId, variant: VariantId) -> GateResult<u128>;
}

/// Authorizes administrative mutation of a resource's allow-list.
pub trait AdminPermissionCheck: Send + Sync {
    /// True if `actor` may administer `resource`'s allow-list.
    fn can_administer(&self, actor: Address, resource: ResourceId) -> bool;
}

/// Introspection over candidate issuer addresses.
///
/// Both probes are read-only. `supports_capability` may fail (unreachable
/// target, malformed response); the validator treats any failure the same
/// as a negative answer.
pub trait IssuerIntrospection: Send + Sync {
    /// True if executable code lives at `address`.
    fn has_code(&self, address: Address) -> bool;

    /// Ask `address` whether it declares `capability`.
    fn supports_capability(&self, address: Address, capability: CapabilityId) -> GateResult<bool>;
}
