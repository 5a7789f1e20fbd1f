//! Set pre-check and post-check: access flags and reference moves.

use super::MetaContext;
use log::{error, info, warn};
use sonic_sai::{Attribute, MetaKey, SaiError, SaiResult};

impl MetaContext<'_> {
    /// Checks a single-attribute set. Consumes a pending read-only override
    /// for the attribute, if there is one.
    pub(crate) fn validate_set(&mut self, meta_key: &MetaKey, attr: &Attribute) -> SaiResult<()> {
        let object_type = meta_key.object_type();

        let md = match self.registry.attr_metadata(object_type, attr.id) {
            Some(md) => md,
            None => {
                error!("set {}: unknown attribute id {}", meta_key, attr.id);
                return Err(SaiError::invalid_parameter(format!(
                    "{}: unknown attribute id {}",
                    object_type, attr.id
                )));
            }
        };

        if md.is_read_only() {
            if self.state.unittests && self.state.readonly_set_once.remove(&(object_type, attr.id)) {
                info!("set {}: allowing read only {} once", meta_key, md.name);
            } else {
                error!("set {}: {} is read only", meta_key, md.name);
                return Err(SaiError::invalid_parameter(format!(
                    "{} is read only",
                    md.name
                )));
            }
        }

        if md.is_create_only() {
            error!("set {}: {} is create only", meta_key, md.name);
            return Err(SaiError::invalid_parameter(format!(
                "{} is create only",
                md.name
            )));
        }

        if md.is_key() {
            error!("set {}: {} is a key attribute", meta_key, md.name);
            return Err(SaiError::invalid_parameter(format!(
                "{} is a key attribute",
                md.name
            )));
        }

        let switch_id = match meta_key {
            MetaKey::Oid { oid, .. } => {
                let switch_id = self.query.switch_id_query(*oid);

                if !self.state.oids.exists(switch_id) {
                    error!("set {}: switch {} does not exist", meta_key, switch_id);
                    return Err(SaiError::invalid_parameter(format!(
                        "switch {} does not exist",
                        switch_id
                    )));
                }
                switch_id
            }
            MetaKey::Entry(entry) => entry.switch_id(),
        };

        self.validate_attr_value(md, &attr.value, switch_id)?;

        for condition in &md.conditions {
            if self
                .state
                .objects
                .get_object_attr(meta_key, condition.attr_id)
                .is_none()
            {
                warn!(
                    "set {}: {} is conditional on attribute {} which has no stored value",
                    meta_key, md.name, condition.attr_id
                );
            }
        }

        if !self.state.objects.object_exists(meta_key) {
            error!("set: object {} does not exist", meta_key);
            return Err(SaiError::invalid_parameter(format!(
                "object {} does not exist",
                meta_key
            )));
        }

        Ok(())
    }

    /// Moves references from the previous value to the new one and stores it.
    pub(crate) fn post_set(&mut self, meta_key: &MetaKey, attr: &Attribute) {
        let md = match self.registry.attr_metadata(meta_key.object_type(), attr.id) {
            Some(md) => md.clone(),
            None => panic!("post set {}: no metadata for attribute id {}", meta_key, attr.id),
        };

        if let Some(previous) = self.state.objects.get_object_attr(meta_key, attr.id) {
            let held = previous.value().oids().to_vec();
            self.state.oids.decrement_all(&held);
        }

        self.state.oids.increment_all(attr.value.oids());

        if !self.state.objects.set_object_attr(meta_key, md, attr.value.clone()) {
            error!("post set: object {} does not exist", meta_key);
        }
    }
}
