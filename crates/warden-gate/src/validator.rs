//! Admission-time issuer validation
//!
//! A candidate issuer is admitted only if it is a live contract that
//! declares the credential-verification capability. The check runs once, at
//! admission; an issuer that stops conforming afterwards surfaces later as
//! an oracle failure during the authorization scan, not here.

use tracing::warn;
use warden_core::{Address, CapabilityId, GateError, GateResult, IssuerIntrospection};

/// Validate `candidate` for admission.
///
/// The capability probe is treated as non-reverting from the gate's side: a
/// negative answer, a probe error, and a malformed response all reject the
/// candidate the same way.
pub fn validate_issuer(
    introspection: &dyn IssuerIntrospection,
    candidate: Address,
) -> GateResult<()> {
    if !introspection.has_code(candidate) {
        warn!(issuer = %candidate, "rejecting issuer with no executable code");
        return Err(GateError::IssuerNotContract { issuer: candidate });
    }
    match introspection.supports_capability(candidate, CapabilityId::CREDENTIAL_VERIFIER) {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!(issuer = %candidate, "rejecting issuer without credential-verification capability");
            Err(GateError::IssuerNotCapable { issuer: candidate })
        }
        Err(probe_error) => {
            warn!(issuer = %candidate, %probe_error, "capability probe failed, rejecting issuer");
            Err(GateError::IssuerNotCapable { issuer: candidate })
        }
    }
}
