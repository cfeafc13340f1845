use std::collections::hash_map::Entry;
use std::collections::HashMap;

use docattach_types::{Fingerprint, ObjectRef};

/// Session-scoped map from content fingerprint to embedded-file object.
///
/// Guarantees that a payload is written into the document at most once per
/// session, however many names it is attached under. The registry is plain
/// owned state: mutation needs `&mut self`, so it cannot be shared across
/// threads without external synchronization.
#[derive(Debug, Default)]
pub struct ContentRegistry {
    entries: HashMap<Fingerprint, ObjectRef>,
    hits: u64,
    misses: u64,
}

impl ContentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the object stored for `fingerprint`, building it on first use.
    ///
    /// On a hit `build` is not called. On a miss `build` runs once; its handle
    /// is recorded only if it succeeds, and its error is returned unchanged.
    pub fn get_or_build<E, F>(&mut self, fingerprint: Fingerprint, build: F) -> Result<ObjectRef, E>
    where
        F: FnOnce() -> Result<ObjectRef, E>,
    {
        match self.entries.entry(fingerprint) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(*entry.get())
            }
            Entry::Vacant(entry) => {
                let reference = build()?;
                entry.insert(reference);
                self.misses += 1;
                Ok(reference)
            }
        }
    }

    /// Look up a fingerprint without building.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<ObjectRef> {
        self.entries.get(fingerprint).copied()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    /// Number of distinct payloads stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the registry.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that built a new object.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// All stored entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &ObjectRef)> {
        self.entries.iter()
    }
}
