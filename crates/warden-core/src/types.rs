//! Identifier types used across the Warden gate
//!
//! Every identifier is a thin newtype over a fixed-size value. Scope keys,
//! addresses, and capability selectors render as hex; the `FromStr` impls
//! accept the same rendering with or without a `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error parsing an identifier from its hex rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier literal: {0}")]
pub struct ParseIdError(String);

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], ParseIdError> {
    let raw = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(raw).map_err(|e| ParseIdError(e.to_string()))?;
    let arr: [u8; N] = bytes
        .try_into()
        .map_err(|_| ParseIdError(format!("expected {N} bytes")))?;
    Ok(arr)
}

/// A 20-byte account or contract identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address, used as the "absent" sentinel.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Construct from raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the zero sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<20>(s).map(Self)
    }
}

/// A controlled resource. The resource's controlling identity is looked up
/// live through [`crate::interfaces::ControllingIdentityLookup`], never
/// stored alongside the id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ResourceId(pub Address);

impl ResourceId {
    /// Underlying address.
    pub fn address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource-{}", self.0)
    }
}

impl From<Address> for ResourceId {
    fn from(addr: Address) -> Self {
        Self(addr)
    }
}

/// A policy template identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct TemplateId(pub Address);

impl TemplateId {
    /// Underlying address.
    pub fn address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template-{}", self.0)
    }
}

impl From<Address> for TemplateId {
    fn from(addr: Address) -> Self {
        Self(addr)
    }
}

/// A policy variant under a template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct VariantId(pub u64);

impl VariantId {
    /// Underlying value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "variant-{}", self.0)
    }
}

impl From<u64> for VariantId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A credential issuer admitted (or considered for admission) to a scope's
/// allow-list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct IssuerId(pub Address);

impl IssuerId {
    /// Underlying address.
    pub fn address(&self) -> Address {
        self.0
    }

    /// True for the zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for IssuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "issuer-{}", self.0)
    }
}

impl From<Address> for IssuerId {
    fn from(addr: Address) -> Self {
        Self(addr)
    }
}

/// A 4-byte capability selector used by the issuer introspection probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityId(pub [u8; 4]);

impl CapabilityId {
    /// Selector for the credential-verification interface an issuer must
    /// declare before admission.
    pub const CREDENTIAL_VERIFIER: CapabilityId = CapabilityId([0x8f, 0x4d, 0x26, 0x05]);
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A 32-byte digest identifying an authorization scope.
///
/// Scope keys are derived, never minted: same (controller, resource,
/// template, variant) always yields the same key, and a controller change
/// yields a fresh key that orphans everything recorded under the old one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ScopeKey(pub [u8; 32]);

impl ScopeKey {
    /// Construct from a digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope-{}", hex::encode(self.0))
    }
}

impl FromStr for ScopeKey {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("scope-").unwrap_or(s);
        decode_fixed::<32>(raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_hex_round_trip() {
        let addr = Address::from_bytes([0xab; 20]);
        let rendered = addr.to_string();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.parse::<Address>().unwrap(), addr);
        // Prefix is optional on parse
        assert_eq!(hex::encode([0xab; 20]).parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn address_rejects_wrong_length() {
        assert!("0xabcd".parse::<Address>().is_err());
        assert!("not hex at all".parse::<Address>().is_err());
    }

    #[test]
    fn zero_sentinel() {
        assert!(Address::ZERO.is_zero());
        assert!(IssuerId::from(Address::ZERO).is_zero());
        assert!(!Address::from_bytes([1; 20]).is_zero());
    }

    #[test]
    fn scope_key_display_round_trip() {
        let key = ScopeKey::from_bytes([7; 32]);
        assert_eq!(key.to_string().parse::<ScopeKey>().unwrap(), key);
    }
}
