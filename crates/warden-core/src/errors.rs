//! Unified error type for gate operations
//!
//! One structured enum covers the whole failure taxonomy. Every variant
//! carries the offending identifier so callers can handle failures without
//! parsing messages, and the type serializes so failures can cross a
//! process boundary intact.

use crate::types::{Address, IssuerId, ResourceId, ScopeKey};
use serde::{Deserialize, Serialize};

/// Result alias for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// Failure taxonomy for the authorization gate.
///
/// Every failure aborts the whole call at the point of detection; there is
/// no aggregation and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GateError {
    /// Malformed or null input (zero issuer, unknown rate entry).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was invalid.
        message: String,
    },

    /// An external precondition does not hold (e.g. policy not attached).
    #[error("precondition not met: {message}")]
    PreconditionNotMet {
        /// Which precondition failed.
        message: String,
    },

    /// Candidate issuer has no executable code at its address.
    #[error("issuer {issuer} has no executable code")]
    IssuerNotContract {
        /// The rejected candidate.
        issuer: Address,
    },

    /// Candidate issuer failed the credential-verification capability probe.
    #[error("issuer {issuer} does not declare the credential-verification capability")]
    IssuerNotCapable {
        /// The rejected candidate.
        issuer: Address,
    },

    /// Admission of an issuer already on the scope's allow-list.
    #[error("{issuer} is already a member of {scope}")]
    AlreadyMember {
        /// Scope whose allow-list was targeted.
        scope: ScopeKey,
        /// The duplicate issuer.
        issuer: IssuerId,
    },

    /// Removal of an issuer not on the scope's allow-list.
    #[error("{issuer} is not a member of {scope}")]
    NotMember {
        /// Scope whose allow-list was targeted.
        scope: ScopeKey,
        /// The absent issuer.
        issuer: IssuerId,
    },

    /// The acting identity may not administer the resource's allow-list.
    #[error("{actor} is not permitted to administer {resource}")]
    Unauthorized {
        /// Who attempted the mutation.
        actor: Address,
        /// The resource whose scope was targeted.
        resource: ResourceId,
    },

    /// The authorization scan exhausted the scope without a match.
    #[error("no allow-listed issuer has granted a credential to {caller}")]
    NoEligibleIssuer {
        /// The caller that failed authorization.
        caller: Address,
    },

    /// A consumed collaborator failed outright (e.g. unknown resource in
    /// the controlling-identity lookup).
    #[error("collaborator failure: {message}")]
    Collaborator {
        /// What the collaborator reported.
        message: String,
    },
}

impl GateError {
    /// Invalid-input failure.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Unmet-precondition failure.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionNotMet {
            message: message.into(),
        }
    }

    /// Collaborator failure.
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;

    #[test]
    fn errors_render_offending_ids() {
        let issuer = Address::from_bytes([3; 20]);
        let err = GateError::IssuerNotContract { issuer };
        assert!(err.to_string().contains(&issuer.to_string()));
    }

    #[test]
    fn errors_serde_round_trip() {
        let err = GateError::NoEligibleIssuer {
            caller: Address::from_bytes([9; 20]),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: GateError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
