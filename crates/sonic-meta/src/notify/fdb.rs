//! FDB learn, age, move and flush events.

use crate::engine::MetaContext;
use log::{debug, error, warn};
use sonic_sai::{
    AttrValue, AttrValueType, Attribute, FdbEntry, FdbEventData, FdbEventType, MetaKey,
    SaiEntry, SaiObjectId, SaiObjectType, FDB_ENTRY_ATTR_BRIDGE_PORT_ID, FDB_ENTRY_ATTR_TYPE,
    FDB_ENTRY_TYPE_DYNAMIC,
};

impl MetaContext<'_> {
    pub(crate) fn process_fdb_event(&mut self, data: &FdbEventData) {
        self.snoop_fdb_event(data);

        let meta_key = MetaKey::Entry(SaiEntry::Fdb(data.fdb_entry.clone()));

        match data.event() {
            Some(FdbEventType::Learned) => self.fdb_learned(&meta_key, data),
            Some(FdbEventType::Aged) => {
                if self.state.objects.object_exists(&meta_key) {
                    self.post_remove(&meta_key);
                } else {
                    warn!("aged fdb entry {} does not exist", meta_key);
                }
            }
            Some(FdbEventType::Flushed) => {
                if data.fdb_entry.mac_address.is_zero() {
                    self.fdb_flush_all(data);
                } else if self.state.objects.object_exists(&meta_key) {
                    self.post_remove(&meta_key);
                } else {
                    warn!("flushed fdb entry {} does not exist", meta_key);
                }
            }
            Some(FdbEventType::Moved) => self.fdb_moved(&meta_key, data),
            None => error!("unknown fdb event {} for {}", data.event_type, meta_key),
        }
    }

    /// Inserts the bridge/vlan and any handle attribute of the event into the
    /// mirror if they were never seen.
    fn snoop_fdb_event(&mut self, data: &FdbEventData) {
        if !data.fdb_entry.bv_id.is_null() {
            self.snoop_oid(data.fdb_entry.bv_id);
        }

        for attr in &data.attrs {
            let is_oid = self
                .registry
                .attr_metadata(SaiObjectType::FdbEntry, attr.id)
                .is_some_and(|md| md.value_type == AttrValueType::ObjectId);

            if !is_oid {
                continue;
            }

            if let AttrValue::Oid(oid) = attr.value {
                if !oid.is_null() {
                    self.snoop_oid(oid);
                }
            }
        }
    }

    fn fdb_learned(&mut self, meta_key: &MetaKey, data: &FdbEventData) {
        if self.state.objects.object_exists(meta_key) {
            warn!("learned fdb entry {} already exists", meta_key);
            return;
        }

        let mut attrs = data.attrs.clone();

        if attrs.len() == 1 {
            // device reported the bridge port only
            attrs.push(Attribute::new(
                FDB_ENTRY_ATTR_TYPE,
                AttrValue::S32(FDB_ENTRY_TYPE_DYNAMIC),
            ));
        }

        let switch_id = data.fdb_entry.switch_id;

        match self.validate_create(meta_key, switch_id, &attrs) {
            Ok(()) => {
                debug!("learned fdb entry {}", meta_key);
                self.post_create(meta_key, switch_id, &attrs);
            }
            Err(e) => error!("failed to apply learned fdb entry {}: {}", meta_key, e),
        }
    }

    fn fdb_moved(&mut self, meta_key: &MetaKey, data: &FdbEventData) {
        if !self.state.objects.object_exists(meta_key) {
            warn!("moved fdb entry {} does not exist", meta_key);
            return;
        }

        for attr in &data.attrs {
            match self.validate_set(meta_key, attr) {
                Ok(()) => self.post_set(meta_key, attr),
                Err(e) => error!("failed to apply moved fdb entry {}: {}", meta_key, e),
            }
        }
    }

    /// Removes every tracked entry matching the event's type and, when set,
    /// its bridge port and bridge/vlan.
    fn fdb_flush_all(&mut self, data: &FdbEventData) {
        let entry_type = match data
            .attrs
            .iter()
            .find(|attr| attr.id == FDB_ENTRY_ATTR_TYPE)
            .map(|attr| &attr.value)
        {
            Some(AttrValue::S32(entry_type)) => *entry_type,
            _ => {
                error!("consolidated fdb flush without entry type, ignored");
                return;
            }
        };

        let bridge_port_id = data
            .attrs
            .iter()
            .find(|attr| attr.id == FDB_ENTRY_ATTR_BRIDGE_PORT_ID)
            .and_then(|attr| match attr.value {
                AttrValue::Oid(oid) => Some(oid),
                _ => None,
            })
            .unwrap_or(SaiObjectId::NULL);

        let bv_id = data.fdb_entry.bv_id;

        let mut flushed = Vec::new();

        for object in self.state.objects.objects_by_type(SaiObjectType::FdbEntry) {
            let stored_type = match object.attr(FDB_ENTRY_ATTR_TYPE).map(|a| a.value()) {
                Some(AttrValue::S32(stored_type)) => *stored_type,
                _ => {
                    error!("fdb entry {} has no type", object.meta_key());
                    continue;
                }
            };

            if stored_type != entry_type {
                continue;
            }

            if !bridge_port_id.is_null() {
                let stored_port = match object.attr(FDB_ENTRY_ATTR_BRIDGE_PORT_ID).map(|a| a.value()) {
                    Some(AttrValue::Oid(oid)) => *oid,
                    _ => SaiObjectId::NULL,
                };

                if stored_port != bridge_port_id {
                    continue;
                }
            }

            if !bv_id.is_null() {
                match object.meta_key().entry() {
                    Some(SaiEntry::Fdb(FdbEntry { bv_id: entry_bv_id, .. }))
                        if *entry_bv_id == bv_id => {}
                    _ => continue,
                }
            }

            flushed.push(object.meta_key().clone());
        }

        debug!(
            "consolidated fdb flush of type {} removes {} entries",
            entry_type,
            flushed.len()
        );

        for meta_key in flushed {
            self.post_remove(&meta_key);
        }
    }
}
