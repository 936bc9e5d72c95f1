//! Audit events for allow-list mutations
//!
//! The two membership events are the only persisted audit trail the gate
//! produces. A scope key alone is opaque, so each event also carries the
//! four scope-defining fields and the controlling identity observed at the
//! moment of the write.

use crate::types::{Address, IssuerId, ResourceId, ScopeKey, TemplateId, VariantId};
use serde::{Deserialize, Serialize};

/// A membership mutation, recorded at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum MembershipEvent {
    /// An issuer was admitted to a scope's allow-list.
    Added {
        /// Derived scope key the write landed under.
        scope: ScopeKey,
        /// Resource component of the scope.
        resource: ResourceId,
        /// Template component of the scope.
        template: TemplateId,
        /// Variant component of the scope.
        variant: VariantId,
        /// The admitted issuer.
        issuer: IssuerId,
        /// Controlling identity at the moment of this write.
        controller: Address,
    },

    /// An issuer was removed from a scope's allow-list.
    Removed {
        /// Derived scope key the write landed under.
        scope: ScopeKey,
        /// Resource component of the scope.
        resource: ResourceId,
        /// Template component of the scope.
        template: TemplateId,
        /// Variant component of the scope.
        variant: VariantId,
        /// The removed issuer.
        issuer: IssuerId,
        /// Controlling identity at the moment of this write.
        controller: Address,
    },
}

impl MembershipEvent {
    /// The issuer the event concerns.
    pub fn issuer(&self) -> IssuerId {
        match self {
            Self::Added { issuer, .. } | Self::Removed { issuer, .. } => *issuer,
        }
    }

    /// The scope key the event was recorded under.
    pub fn scope(&self) -> ScopeKey {
        match self {
            Self::Added { scope, .. } | Self::Removed { scope, .. } => *scope,
        }
    }

    /// The controlling identity observed at write time.
    pub fn controller(&self) -> Address {
        match self {
            Self::Added { controller, .. } | Self::Removed { controller, .. } => *controller,
        }
    }
}

/// Destination for audit events.
pub trait AuditSink: Send + Sync {
    /// Record one event. Recording must not fail the surrounding mutation.
    fn record(&self, event: MembershipEvent);
}

/// Sink that emits events as structured `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: MembershipEvent) {
        match &event {
            MembershipEvent::Added {
                scope,
                issuer,
                controller,
                ..
            } => {
                tracing::info!(%scope, %issuer, %controller, "membership added");
            }
            MembershipEvent::Removed {
                scope,
                issuer,
                controller,
                ..
            } => {
                tracing::info!(%scope, %issuer, %controller, "membership removed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;

    #[test]
    fn event_serde_round_trip() {
        let event = MembershipEvent::Added {
            scope: ScopeKey::from_bytes([1; 32]),
            resource: ResourceId(Address::from_bytes([2; 20])),
            template: TemplateId(Address::from_bytes([3; 20])),
            variant: VariantId(42),
            issuer: IssuerId(Address::from_bytes([4; 20])),
            controller: Address::from_bytes([5; 20]),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MembershipEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
