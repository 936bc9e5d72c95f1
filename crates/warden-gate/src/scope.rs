//! Scope key derivation
//!
//! A scope key is a domain-separated SHA-256 digest over the resource's
//! current controlling identity and the three caller-supplied fields. The
//! controller is looked up live on every derivation and never cached:
//! transferring a resource silently rotates every scope key under it, which
//! is the mechanism by which old allow-lists become unreachable.

use warden_core::hash::Hasher;
use warden_core::{
    Address, ControllingIdentityLookup, GateResult, ResourceId, ScopeKey, TemplateId, VariantId,
};

/// Domain-separation label; versioned so a future layout change cannot
/// collide with keys derived today.
const SCOPE_DOMAIN: &[u8] = b"warden/scope/v1";

/// A freshly derived scope, bundling the key with the controller observed
/// during derivation (the audit events need both).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedScope {
    /// The scope key.
    pub key: ScopeKey,
    /// Controlling identity at derivation time.
    pub controller: Address,
}

/// Derive the scope for (`resource`, `template`, `variant`) under the
/// resource's current controller.
///
/// All fields are fixed-width, so the concatenation is injective and the
/// combination order-sensitive.
pub fn derive_scope(
    lookup: &dyn ControllingIdentityLookup,
    resource: ResourceId,
    template: TemplateId,
    variant: VariantId,
) -> GateResult<DerivedScope> {
    let controller = lookup.owner(resource)?;
    let mut hasher = Hasher::new();
    hasher.update(SCOPE_DOMAIN);
    hasher.update(controller.as_bytes());
    hasher.update(resource.address().as_bytes());
    hasher.update(template.address().as_bytes());
    hasher.update(&variant.value().to_be_bytes());
    Ok(DerivedScope {
        key: ScopeKey::from_bytes(hasher.finalize()),
        controller,
    })
}
