//! Test fixtures for the Warden gate
//!
//! In-memory implementations of every collaborator seam in
//! `warden-core::interfaces`, plus small address helpers. All fakes take
//! interior mutability so tests can mutate the world (transfer a resource,
//! break an oracle) after the gate has been wired up with `Arc` handles.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use warden_core::{
    AdminPermissionCheck, Address, AuditSink, CapabilityId, ControllingIdentityLookup,
    CredentialBalanceOracle, GateError, GateResult, IssuerId, IssuerIntrospection,
    MembershipEvent, PolicyAttachmentRegistry, RateSource, ResourceId, TemplateId, VariantId,
};

/// Address whose last byte is `n`.
pub fn addr(n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = n;
    Address::from_bytes(bytes)
}

/// Issuer id whose last byte is `n`.
pub fn issuer(n: u8) -> IssuerId {
    IssuerId(addr(n))
}

/// Resource id whose last byte is `n`.
pub fn resource(n: u8) -> ResourceId {
    ResourceId(addr(n))
}

/// Template id whose last byte is `n`.
pub fn template(n: u8) -> TemplateId {
    TemplateId(addr(n))
}

/// In-memory resource ledger: owner lookup plus owner-as-admin permission
/// check. Transferring a resource is a single `set_owner` call.
#[derive(Debug, Default)]
pub struct MockLedger {
    owners: RwLock<HashMap<ResourceId, Address>>,
}

impl MockLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or transfer a resource.
    pub fn set_owner(&self, resource: ResourceId, owner: Address) {
        self.owners.write().insert(resource, owner);
    }
}

impl ControllingIdentityLookup for MockLedger {
    fn owner(&self, resource: ResourceId) -> GateResult<Address> {
        self.owners
            .read()
            .get(&resource)
            .copied()
            .ok_or_else(|| GateError::collaborator(format!("unknown {resource}")))
    }
}

impl AdminPermissionCheck for MockLedger {
    fn can_administer(&self, actor: Address, resource: ResourceId) -> bool {
        self.owners
            .read()
            .get(&resource)
            .is_some_and(|owner| *owner == actor)
    }
}

/// In-memory policy-attachment registry.
#[derive(Debug, Default)]
pub struct MockPolicyRegistry {
    attached: RwLock<HashSet<(ResourceId, TemplateId, VariantId)>>,
}

impl MockPolicyRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark (`template`, `variant`) attached to `resource`.
    pub fn attach(&self, resource: ResourceId, template: TemplateId, variant: VariantId) {
        self.attached.write().insert((resource, template, variant));
    }
}

impl PolicyAttachmentRegistry for MockPolicyRegistry {
    fn is_attached(&self, resource: ResourceId, template: TemplateId, variant: VariantId) -> bool {
        self.attached.read().contains(&(resource, template, variant))
    }
}

/// In-memory issuer introspection: which addresses carry code, which
/// declare the credential capability, and which fail the probe outright.
#[derive(Debug, Default)]
pub struct MockIntrospection {
    contracts: RwLock<HashSet<Address>>,
    capable: RwLock<HashSet<Address>>,
    probe_failures: RwLock<HashSet<Address>>,
}

impl MockIntrospection {
    /// Empty world; nothing is deployed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place executable code at `address`.
    pub fn deploy_contract(&self, address: Address) {
        self.contracts.write().insert(address);
    }

    /// Make `address` declare the credential-verification capability.
    pub fn declare_capable(&self, address: Address) {
        self.capable.write().insert(address);
    }

    /// Deploy a contract that also declares the capability.
    pub fn deploy_capable_issuer(&self, issuer: IssuerId) {
        self.deploy_contract(issuer.address());
        self.declare_capable(issuer.address());
    }

    /// Make the capability probe error for `address`.
    pub fn fail_probe(&self, address: Address) {
        self.probe_failures.write().insert(address);
    }
}

impl IssuerIntrospection for MockIntrospection {
    fn has_code(&self, address: Address) -> bool {
        self.contracts.read().contains(&address)
    }

    fn supports_capability(&self, address: Address, _capability: CapabilityId) -> GateResult<bool> {
        if self.probe_failures.read().contains(&address) {
            return Err(GateError::collaborator("probe returned malformed response"));
        }
        Ok(self.capable.read().contains(&address))
    }
}

/// In-memory credential balances, with per-issuer failure injection.
#[derive(Debug, Default)]
pub struct MockCredentialOracle {
    balances: RwLock<HashMap<(IssuerId, Address), u64>>,
    failing: RwLock<HashSet<IssuerId>>,
}

impl MockCredentialOracle {
    /// Empty oracle; every balance reads zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `account`'s balance from `issuer`.
    pub fn set_balance(&self, issuer: IssuerId, account: Address, balance: u64) {
        self.balances.write().insert((issuer, account), balance);
    }

    /// Make every query against `issuer` fail.
    pub fn fail_issuer(&self, issuer: IssuerId) {
        self.failing.write().insert(issuer);
    }
}

impl CredentialBalanceOracle for MockCredentialOracle {
    fn balance_of(&self, issuer: IssuerId, account: Address) -> GateResult<u64> {
        if self.failing.read().contains(&issuer) {
            return Err(GateError::collaborator(format!("{issuer} does not answer")));
        }
        Ok(*self.balances.read().get(&(issuer, account)).unwrap_or(&0))
    }
}

/// In-memory rate table.
#[derive(Debug, Default)]
pub struct FixedRateSource {
    rates: RwLock<HashMap<(TemplateId, VariantId), u128>>,
}

impl FixedRateSource {
    /// Empty table; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit rate for (`template`, `variant`).
    pub fn set_rate(&self, template: TemplateId, variant: VariantId, rate: u128) {
        self.rates.write().insert((template, variant), rate);
    }
}

impl RateSource for FixedRateSource {
    fn unit_rate(&self, template: TemplateId, variant: VariantId) -> GateResult<u128> {
        self.rates
            .read()
            .get(&(template, variant))
            .copied()
            .ok_or_else(|| {
                GateError::invalid_input(format!("no unit rate for {template}/{variant}"))
            })
    }
}

/// Audit sink that accumulates events in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: RwLock<Vec<MembershipEvent>>,
}

impl MemoryAuditSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<MembershipEvent> {
        self.events.read().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<MembershipEvent> {
        std::mem::take(&mut self.events.write())
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: MembershipEvent) {
        self.events.write().push(event);
    }
}
