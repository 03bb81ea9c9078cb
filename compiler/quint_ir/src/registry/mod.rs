//! Identifier registry and source map.
//!
//! One [`Registry`] per lowering session. Issuing an identifier and recording
//! its location happen in the same call, so the source map is total over
//! every identifier the registry ever handed out.

use rustc_hash::FxHashMap;

use crate::{Loc, QuintId};

/// Mapping from node identifier to the location of the construct that
/// produced it.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceMap {
    locs: FxHashMap<QuintId, Loc>,
}

impl SourceMap {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Location recorded for `id`.
    pub fn get(&self, id: QuintId) -> Option<&Loc> {
        self.locs.get(&id)
    }

    /// Check whether `id` has an entry.
    pub fn contains(&self, id: QuintId) -> bool {
        self.locs.contains_key(&id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.locs.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    /// All entries, ordered by identifier.
    pub fn entries(&self) -> Vec<(QuintId, &Loc)> {
        let mut entries: Vec<_> = self.locs.iter().map(|(id, loc)| (*id, loc)).collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }

    fn insert(&mut self, id: QuintId, loc: Loc) {
        let previous = self.locs.insert(id, loc);
        debug_assert!(previous.is_none(), "identifier {id} issued twice");
    }
}

/// Per-session identifier generator.
///
/// # Example
///
/// ```
/// use quint_ir::{Loc, Position, Registry};
///
/// let mut registry = Registry::new();
/// let loc = Loc::open("spec.qnt", Position::default());
/// let a = registry.next(&loc);
/// let b = registry.next(&loc);
/// assert!(a < b);
/// assert_eq!(registry.source_map().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    next: u64,
    source_map: SourceMap,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// First identifier issued by [`Registry::new`].
    pub const FIRST_ID: u64 = 1;

    /// Create a registry whose first identifier is [`Registry::FIRST_ID`].
    pub fn new() -> Self {
        Self::starting_at(Self::FIRST_ID)
    }

    /// Create a registry whose first identifier is `first`.
    ///
    /// Used when a session must continue numbering after an earlier one.
    pub fn starting_at(first: u64) -> Self {
        Registry {
            next: first,
            source_map: SourceMap::new(),
        }
    }

    /// Issue a fresh identifier and record `loc` for it.
    ///
    /// Numbering wraps after `u64::MAX`. Identifiers stay unique within the
    /// registry until 2^64 of them have been issued, but a registry started
    /// near the top of the range stops handing them out in increasing order.
    pub fn next(&mut self, loc: &Loc) -> QuintId {
        let id = QuintId::new(self.next);
        self.next = self.next.wrapping_add(1);
        self.source_map.insert(id, loc.clone());
        id
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> usize {
        self.source_map.len()
    }

    /// The source map built so far.
    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Consume the registry, keeping the source map.
    pub fn into_source_map(self) -> SourceMap {
        self.source_map
    }
}

#[cfg(test)]
mod tests;
