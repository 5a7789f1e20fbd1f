//! Remove pre-check and post-check, including the port cascade.

use super::MetaContext;
use log::{debug, error, info, warn};
use sonic_sai::{MetaKey, SaiError, SaiObjectId, SaiObjectType, SaiResult};

impl MetaContext<'_> {
    pub(crate) fn validate_remove(&self, meta_key: &MetaKey) -> SaiResult<()> {
        if !self.state.objects.object_exists(meta_key) {
            error!("remove: object {} does not exist", meta_key);
            return Err(SaiError::invalid_parameter(format!(
                "object {} does not exist",
                meta_key
            )));
        }

        let oid = match meta_key {
            MetaKey::Entry(_) => return Ok(()),
            MetaKey::Oid { oid, .. } => *oid,
        };

        let count = match self.state.oids.count(oid) {
            Some(count) => count,
            None => {
                error!("remove: {} is not tracked", meta_key);
                return Err(SaiError::invalid_parameter(format!(
                    "{} is not tracked",
                    meta_key
                )));
            }
        };

        if count != 0 {
            if meta_key.object_type() == SaiObjectType::Switch {
                warn!("removing switch {} with reference count {}", oid, count);
            } else {
                error!("remove: {} is still referenced {} times", meta_key, count);
                return Err(SaiError::object_in_use(meta_key.to_string()));
            }
        }

        if meta_key.object_type() == SaiObjectType::Port {
            self.validate_port_remove(oid)?;
        }

        Ok(())
    }

    /// A port takes its queues, scheduler groups and priority groups with it,
    /// so all of them must be unused and untouched.
    fn validate_port_remove(&self, port_id: SaiObjectId) -> SaiResult<()> {
        let related = self.state.port_related.get_port_related_objects(port_id);

        if related.is_empty() {
            return Ok(());
        }

        let port_key = MetaKey::oid(SaiObjectType::Port, port_id);

        if !self.is_default_state(&port_key) {
            error!("remove: port {} is not in default state", port_id);
            return Err(SaiError::object_in_use(port_key.to_string()));
        }

        for oid in related {
            let key = MetaKey::oid(self.query.object_type_query(oid), oid);
            let count = match self.state.oids.count(oid) {
                Some(count) => count,
                None => {
                    debug!("port {} related {} already removed", port_id, key);
                    continue;
                }
            };

            if count != 0 {
                error!(
                    "remove: port {} related {} is still referenced {} times",
                    port_id, key, count
                );
                return Err(SaiError::object_in_use(key.to_string()));
            }

            if !self.is_default_state(&key) {
                error!(
                    "remove: port {} related {} is not in default state",
                    port_id, key
                );
                return Err(SaiError::object_in_use(key.to_string()));
            }
        }

        Ok(())
    }

    /// Returns true if no settable handle attribute of the object points
    /// anywhere.
    pub(crate) fn is_default_state(&self, meta_key: &MetaKey) -> bool {
        let object = match self.state.objects.get_object(meta_key) {
            Some(object) => object,
            None => {
                error!("object {} does not exist", meta_key);
                return false;
            }
        };

        object.attrs().all(|attr| {
            let md = attr.metadata();

            if md.is_read_only() || !md.is_oid_attribute() {
                return true;
            }

            let clean = attr.value().oids().iter().all(SaiObjectId::is_null);

            if !clean {
                debug!("{}: {} holds references", meta_key, md.name);
            }
            clean
        })
    }

    pub(crate) fn post_remove(&mut self, meta_key: &MetaKey) {
        if meta_key.object_type() == SaiObjectType::Switch {
            info!("switch {} removed, dropping local state", meta_key);
            self.state.clear();
            return;
        }

        let held: Vec<SaiObjectId> = match self.state.objects.get_object(meta_key) {
            Some(object) => object
                .attrs()
                .flat_map(|attr| attr.value().oids().iter().copied())
                .collect(),
            None => {
                error!("post remove: object {} does not exist", meta_key);
                Vec::new()
            }
        };

        self.state.oids.decrement_all(&held);

        match meta_key {
            MetaKey::Entry(entry) => {
                for member in entry.oid_members() {
                    self.state.oids.decrement(member.oid);
                }
            }
            MetaKey::Oid { oid, .. } => {
                if self.state.oids.remove(*oid).is_none() {
                    error!("post remove: {} was not tracked", meta_key);
                }
            }
        }

        self.state.objects.remove_object(meta_key);
        self.state.attr_keys.erase_meta_key(&meta_key.to_string());

        if let MetaKey::Oid {
            object_type: SaiObjectType::Port,
            oid,
        } = meta_key
        {
            for related in self.state.port_related.get_port_related_objects(*oid) {
                if !self.state.oids.exists(related) {
                    continue;
                }
                let key = MetaKey::oid(self.query.object_type_query(related), related);
                debug!("port {} removed, removing related {}", oid, key);
                self.post_remove(&key);
            }
            self.state.port_related.remove_port(*oid);
        }
    }
}
