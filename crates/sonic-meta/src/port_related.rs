//! Port-dependent object tracker.
//!
//! Queues, scheduler groups and ingress priority groups are created by the
//! device together with their port. The mirror only learns about them when a
//! client reads the port's list attributes; from then on they are tracked
//! here so that removing the port can check and cascade to them.

use sonic_sai::SaiObjectId;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct PortRelatedSet {
    related: HashMap<SaiObjectId, BTreeSet<SaiObjectId>>,
}

impl PortRelatedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if either handle is NULL.
    pub fn insert(&mut self, port_id: SaiObjectId, related_id: SaiObjectId) {
        if port_id.is_null() || related_id.is_null() {
            panic!(
                "can't track NULL port related object (port {}, related {})",
                port_id, related_id
            );
        }

        self.related.entry(port_id).or_default().insert(related_id);
    }

    /// Objects tracked for `port_id`, in handle order.
    pub fn get_port_related_objects(&self, port_id: SaiObjectId) -> Vec<SaiObjectId> {
        self.related
            .get(&port_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn remove_port(&mut self, port_id: SaiObjectId) {
        self.related.remove(&port_id);
    }

    pub fn ports(&self) -> impl Iterator<Item = SaiObjectId> + '_ {
        self.related.keys().copied()
    }

    pub fn clear(&mut self) {
        self.related.clear();
    }
}
