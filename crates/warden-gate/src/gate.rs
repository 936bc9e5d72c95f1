//! Gate entry points
//!
//! [`AuthorizationGate`] owns the membership registry and composes the
//! deriver, validator, evaluator, and fee pass-through around it. The
//! administrative surface (`add_issuer` / `remove_issuer`) runs every check
//! before its single registry write, so a failure partway leaves no partial
//! state. The protected entry points are pure reads over the current
//! registry snapshot.

use crate::evaluator::authorize;
use crate::fee::compute_fee;
use crate::registry::MembershipRegistry;
use crate::scope::{derive_scope, DerivedScope};
use crate::validator::validate_issuer;
use std::sync::Arc;
use tracing::info;
use warden_core::{
    AdminPermissionCheck, Address, AuditSink, ControllingIdentityLookup, CredentialBalanceOracle,
    GateError, GateResult, IssuerId, IssuerIntrospection, MembershipEvent, PolicyAttachmentRegistry,
    RateSource, ResourceId, TemplateId, VariantId,
};

/// The collaborator handles a gate is wired with.
pub struct Collaborators {
    /// Live controller lookup for scope derivation.
    pub controllers: Arc<dyn ControllingIdentityLookup>,
    /// Policy-attachment precondition for admissions.
    pub attachments: Arc<dyn PolicyAttachmentRegistry>,
    /// Credential balance oracle for the authorization scan.
    pub oracle: Arc<dyn CredentialBalanceOracle>,
    /// Unit-rate source for fees.
    pub rates: Arc<dyn RateSource>,
    /// Admin permission check for allow-list mutation.
    pub admin: Arc<dyn AdminPermissionCheck>,
    /// Introspection for issuer validation.
    pub introspection: Arc<dyn IssuerIntrospection>,
    /// Destination for membership audit events.
    pub audit: Arc<dyn AuditSink>,
}

/// The scoped allow-list authorization gate.
pub struct AuthorizationGate {
    registry: MembershipRegistry,
    collaborators: Collaborators,
}

impl AuthorizationGate {
    /// A gate with an empty registry.
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            registry: MembershipRegistry::new(),
            collaborators,
        }
    }

    fn derive(
        &self,
        resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
    ) -> GateResult<DerivedScope> {
        derive_scope(
            self.collaborators.controllers.as_ref(),
            resource,
            template,
            variant,
        )
    }

    fn require_admin(&self, actor: Address, resource: ResourceId) -> GateResult<()> {
        if !self.collaborators.admin.can_administer(actor, resource) {
            return Err(GateError::Unauthorized { actor, resource });
        }
        Ok(())
    }

    /// Admit `issuer` to the allow-list of the scope derived from
    /// (`resource`, `template`, `variant`) under its current controller.
    ///
    /// Checks, in order: admin permission, non-zero issuer, issuer
    /// validation, policy attachment. The registry write comes last.
    pub fn add_issuer(
        &mut self,
        actor: Address,
        resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
        issuer: IssuerId,
    ) -> GateResult<()> {
        self.require_admin(actor, resource)?;
        if issuer.is_zero() {
            return Err(GateError::invalid_input("issuer must be non-zero"));
        }
        validate_issuer(self.collaborators.introspection.as_ref(), issuer.address())?;
        if !self
            .collaborators
            .attachments
            .is_attached(resource, template, variant)
        {
            return Err(GateError::precondition(format!(
                "{template}/{variant} is not attached to {resource}"
            )));
        }

        let derived = self.derive(resource, template, variant)?;
        self.registry.add(derived.key, issuer)?;

        info!(scope = %derived.key, %issuer, controller = %derived.controller, "issuer admitted");
        self.collaborators.audit.record(MembershipEvent::Added {
            scope: derived.key,
            resource,
            template,
            variant,
            issuer,
            controller: derived.controller,
        });
        Ok(())
    }

    /// Remove `issuer` from the allow-list of the derived scope.
    pub fn remove_issuer(
        &mut self,
        actor: Address,
        resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
        issuer: IssuerId,
    ) -> GateResult<()> {
        self.require_admin(actor, resource)?;
        let derived = self.derive(resource, template, variant)?;
        self.registry.remove(derived.key, issuer)?;

        info!(scope = %derived.key, %issuer, controller = %derived.controller, "issuer removed");
        self.collaborators.audit.record(MembershipEvent::Removed {
            scope: derived.key,
            resource,
            template,
            variant,
            issuer,
            controller: derived.controller,
        });
        Ok(())
    }

    /// Membership test under the currently derived scope.
    pub fn is_member(
        &self,
        resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
        issuer: IssuerId,
    ) -> GateResult<bool> {
        let derived = self.derive(resource, template, variant)?;
        Ok(self.registry.is_member(derived.key, issuer))
    }

    /// Snapshot of the currently derived scope's members in scan order.
    pub fn list_members(
        &self,
        resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
    ) -> GateResult<Vec<IssuerId>> {
        let derived = self.derive(resource, template, variant)?;
        Ok(self.registry.list_members(derived.key))
    }

    /// Gate a protected action: authorize `caller` against the derived
    /// scope, then return the fee for `quantity` units.
    pub fn before_protected_action(
        &self,
        caller: Address,
        resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
        quantity: u64,
    ) -> GateResult<u128> {
        let derived = self.derive(resource, template, variant)?;
        authorize(
            &self.registry,
            self.collaborators.oracle.as_ref(),
            derived.key,
            caller,
        )?;
        compute_fee(self.collaborators.rates.as_ref(), template, variant, quantity)
    }

    /// Gate a derivative registration: identical to
    /// [`Self::before_protected_action`] but scoped to the parent resource
    /// with quantity fixed at 1.
    pub fn before_derivative_action(
        &self,
        caller: Address,
        parent_resource: ResourceId,
        template: TemplateId,
        variant: VariantId,
    ) -> GateResult<u128> {
        self.before_protected_action(caller, parent_resource, template, variant, 1)
    }

    /// Fee preview without authorization.
    pub fn preview_fee(
        &self,
        template: TemplateId,
        variant: VariantId,
        quantity: u64,
    ) -> GateResult<u128> {
        compute_fee(self.collaborators.rates.as_ref(), template, variant, quantity)
    }

    /// Read-only view of the registry, for diagnostics.
    pub fn registry(&self) -> &MembershipRegistry {
        &self.registry
    }
}
