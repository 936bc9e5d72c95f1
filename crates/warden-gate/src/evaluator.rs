//! Any-of authorization scan
//!
//! The evaluator walks a scope's members in registry order and succeeds on
//! the first member from which the caller holds a positive credential
//! balance. The per-member outcome is kept as an explicit tri-state rather
//! than a bool so the oracle-error policy stays visible at the call site:
//! a failing oracle call marks that member ineligible and the scan
//! continues, so one non-conformant member cannot brick the whole scope.

use crate::registry::MembershipRegistry;
use tracing::debug;
use warden_core::{Address, CredentialBalanceOracle, GateError, GateResult, IssuerId, ScopeKey};

/// Outcome of checking one member for one caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberEligibility {
    /// The caller holds this many credentials (> 0) from the member.
    Eligible(u64),
    /// The member answered with a zero balance.
    Ineligible,
    /// The balance query itself failed; treated as ineligible by the scan.
    OracleError(GateError),
}

/// Query one member's credential balance for `caller`.
pub fn check_member(
    oracle: &dyn CredentialBalanceOracle,
    issuer: IssuerId,
    caller: Address,
) -> MemberEligibility {
    match oracle.balance_of(issuer, caller) {
        Ok(0) => MemberEligibility::Ineligible,
        Ok(balance) => MemberEligibility::Eligible(balance),
        Err(error) => MemberEligibility::OracleError(error),
    }
}

/// Authorize `caller` against `scope`.
///
/// Succeeds on the first eligible member in scan order. An empty scope
/// fails vacuously; it never authorizes.
pub fn authorize(
    registry: &MembershipRegistry,
    oracle: &dyn CredentialBalanceOracle,
    scope: ScopeKey,
    caller: Address,
) -> GateResult<()> {
    for issuer in registry.list_members(scope) {
        match check_member(oracle, issuer, caller) {
            MemberEligibility::Eligible(balance) => {
                debug!(%scope, %issuer, %caller, balance, "caller authorized");
                return Ok(());
            }
            MemberEligibility::Ineligible => {
                debug!(%scope, %issuer, %caller, "member holds no credential for caller");
            }
            MemberEligibility::OracleError(error) => {
                debug!(%scope, %issuer, %caller, %error, "oracle failed for member, continuing scan");
            }
        }
    }
    Err(GateError::NoEligibleIssuer { caller })
}
