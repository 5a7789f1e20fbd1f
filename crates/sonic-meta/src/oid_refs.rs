//! Reference ledger.
//!
//! Tracks, for every live object handle, how many attribute slots (and entry
//! key fields) currently point at it. Like `SyncMap`, the ledger never creates
//! an entry implicitly: a handle must be [`OidRefCounter::insert`]ed before it
//! can be referenced.
//!
//! Touching an unknown handle or decrementing below zero means the mirror no
//! longer matches the device. Both are fatal.

use sonic_sai::SaiObjectId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct OidRefCounter {
    counts: HashMap<SaiObjectId, u32>,
}

impl OidRefCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `oid` with a zero count. An existing count is kept.
    pub fn insert(&mut self, oid: SaiObjectId) {
        self.counts.entry(oid).or_insert(0);
    }

    /// Stops tracking `oid`. Returns the count it had.
    pub fn remove(&mut self, oid: SaiObjectId) -> Option<u32> {
        self.counts.remove(&oid)
    }

    pub fn exists(&self, oid: SaiObjectId) -> bool {
        self.counts.contains_key(&oid)
    }

    pub fn count(&self, oid: SaiObjectId) -> Option<u32> {
        self.counts.get(&oid).copied()
    }

    /// Adds one reference. NULL is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `oid` is not tracked.
    pub fn increment(&mut self, oid: SaiObjectId) -> u32 {
        if oid.is_null() {
            return 0;
        }

        match self.counts.get_mut(&oid) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => panic!("can't increment reference of {}: object is not tracked", oid),
        }
    }

    /// Drops one reference. NULL is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `oid` is not tracked or its count is already zero.
    pub fn decrement(&mut self, oid: SaiObjectId) -> u32 {
        if oid.is_null() {
            return 0;
        }

        match self.counts.get_mut(&oid) {
            Some(0) => panic!("reference count of {} would drop below zero", oid),
            Some(count) => {
                *count -= 1;
                *count
            }
            None => panic!("can't decrement reference of {}: object is not tracked", oid),
        }
    }

    pub fn increment_all(&mut self, oids: &[SaiObjectId]) {
        for oid in oids {
            self.increment(*oid);
        }
    }

    pub fn decrement_all(&mut self, oids: &[SaiObjectId]) {
        for oid in oids {
            self.decrement(*oid);
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn oids(&self) -> impl Iterator<Item = SaiObjectId> + '_ {
        self.counts.keys().copied()
    }
}
