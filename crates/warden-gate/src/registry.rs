//! Scoped membership registry
//!
//! Per-scope allow-lists with O(1) admission, O(1) removal, and an
//! enumerable view. Each scope co-maintains three structures:
//!
//! - `members` - boolean membership test;
//! - `ordered` - the enumeration and authorization-scan order;
//! - `index` - 1-based position of each member in `ordered`, enabling
//!   swap-and-truncate removal (an absent entry reads as position 0).
//!
//! Removal is compact, not stable: the last element is swapped into the
//! vacated slot, so enumeration order after a removal is not insertion
//! order. Scope entries are created implicitly on first admission and never
//! destroyed; an empty entry is indistinguishable from an absent one.

use std::collections::{HashMap, HashSet};
use warden_core::{GateError, GateResult, IssuerId, ScopeKey};

/// One scope's allow-list.
#[derive(Debug, Default)]
struct ScopeMembers {
    members: HashSet<IssuerId>,
    ordered: Vec<IssuerId>,
    index: HashMap<IssuerId, usize>,
}

impl ScopeMembers {
    fn contains(&self, issuer: IssuerId) -> bool {
        self.members.contains(&issuer)
    }

    fn add(&mut self, issuer: IssuerId) {
        self.members.insert(issuer);
        self.ordered.push(issuer);
        self.index.insert(issuer, self.ordered.len());
    }

    fn remove(&mut self, issuer: IssuerId) {
        // 1-based; presence was checked by the caller.
        let pos = self.index[&issuer];
        let last = self.ordered.len();
        if pos != last {
            let moved = self.ordered[last - 1];
            self.ordered[pos - 1] = moved;
            self.index.insert(moved, pos);
        }
        self.ordered.pop();
        self.index.remove(&issuer);
        self.members.remove(&issuer);
    }
}

/// All scopes' allow-lists, keyed by derived scope key.
///
/// The registry itself knows nothing about how keys are derived; a
/// controller change simply makes callers arrive with a fresh key, leaving
/// the old entry orphaned rather than wiped.
#[derive(Debug, Default)]
pub struct MembershipRegistry {
    scopes: HashMap<ScopeKey, ScopeMembers>,
}

impl MembershipRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `issuer` to `scope`'s allow-list.
    ///
    /// Fails `AlreadyMember` without touching state if the issuer is
    /// already admitted. There is no silent upsert.
    pub fn add(&mut self, scope: ScopeKey, issuer: IssuerId) -> GateResult<()> {
        let entry = self.scopes.entry(scope).or_default();
        if entry.contains(issuer) {
            return Err(GateError::AlreadyMember { scope, issuer });
        }
        entry.add(issuer);
        Ok(())
    }

    /// Remove `issuer` from `scope`'s allow-list via swap-and-truncate.
    ///
    /// Fails `NotMember` without touching state if the issuer is absent.
    pub fn remove(&mut self, scope: ScopeKey, issuer: IssuerId) -> GateResult<()> {
        let entry = self
            .scopes
            .get_mut(&scope)
            .ok_or(GateError::NotMember { scope, issuer })?;
        if !entry.contains(issuer) {
            return Err(GateError::NotMember { scope, issuer });
        }
        entry.remove(issuer);
        Ok(())
    }

    /// O(1) membership test. Unknown scopes hold nobody.
    pub fn is_member(&self, scope: ScopeKey, issuer: IssuerId) -> bool {
        self.scopes
            .get(&scope)
            .is_some_and(|entry| entry.contains(issuer))
    }

    /// Snapshot of `scope`'s members in scan order.
    ///
    /// O(n) copy, intended for administrative consumption and the
    /// authorization scan, not for unbounded hot paths.
    pub fn list_members(&self, scope: ScopeKey) -> Vec<IssuerId> {
        self.scopes
            .get(&scope)
            .map(|entry| entry.ordered.clone())
            .unwrap_or_default()
    }

    /// Number of members in `scope`.
    pub fn member_count(&self, scope: ScopeKey) -> usize {
        self.scopes.get(&scope).map_or(0, |entry| entry.ordered.len())
    }
}
