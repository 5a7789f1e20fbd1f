//! Create pre-check and post-check.

use super::MetaContext;
use crate::attr_keys::AttrKeyMap;
use log::{error, warn};
use sonic_sai::{
    Attribute, MetaKey, SaiAttrId, SaiEntry, SaiError, SaiObjectId, SaiObjectType, SaiResult,
};
use std::collections::HashMap;

impl MetaContext<'_> {
    /// Checks a create before it reaches the driver.
    ///
    /// For object-id types `meta_key` carries a NULL handle: only its type is
    /// known at this point.
    pub(crate) fn validate_create(
        &self,
        meta_key: &MetaKey,
        switch_id: SaiObjectId,
        attrs: &[Attribute],
    ) -> SaiResult<()> {
        let object_type = meta_key.object_type();

        if attrs.len() > self.config.max_list_count {
            error!(
                "create {}: attribute count {} exceeds maximum {}",
                object_type,
                attrs.len(),
                self.config.max_list_count
            );
            return Err(SaiError::invalid_parameter(format!(
                "attribute count {} exceeds maximum",
                attrs.len()
            )));
        }

        let info = match self.registry.object_type_info(object_type) {
            Some(info) => info,
            None => {
                error!("create: object type {} has no metadata", object_type);
                return Err(SaiError::invalid_parameter(format!(
                    "unknown object type {}",
                    object_type
                )));
            }
        };

        let switch_id = if object_type == SaiObjectType::Switch {
            SaiObjectId::NULL
        } else {
            let switch_id = meta_key.entry().map_or(switch_id, SaiEntry::switch_id);
            self.validate_switch(switch_id)?;
            switch_id
        };

        if let Some(entry) = meta_key.entry() {
            self.validate_entry_members(entry, switch_id)?;
        }

        let mut passed: HashMap<SaiAttrId, &Attribute> = HashMap::new();

        for attr in attrs {
            let md = match info.attr(attr.id) {
                Some(md) => md,
                None => {
                    error!("create {}: unknown attribute id {}", object_type, attr.id);
                    return Err(SaiError::invalid_parameter(format!(
                        "{}: unknown attribute id {}",
                        object_type, attr.id
                    )));
                }
            };

            if passed.insert(attr.id, attr).is_some() {
                error!("create {}: {} passed more than once", object_type, md.name);
                return Err(SaiError::invalid_parameter(format!(
                    "{} passed more than once",
                    md.name
                )));
            }

            if md.is_read_only() {
                error!("create {}: {} is read only", object_type, md.name);
                return Err(SaiError::invalid_parameter(format!(
                    "{} is read only",
                    md.name
                )));
            }

            self.validate_attr_value(md, &attr.value, switch_id)?;
        }

        if meta_key.entry().is_some() && self.state.objects.object_exists(meta_key) {
            error!("create: object {} already exists", meta_key);
            return Err(SaiError::already_exists(meta_key.to_string()));
        }

        for md in info.attrs() {
            if md.is_conditional() || !md.is_mandatory_on_create() {
                continue;
            }

            if !passed.contains_key(&md.attr_id) {
                error!("create {}: mandatory {} not passed", object_type, md.name);
                return Err(SaiError::mandatory_attribute_missing(md.name.clone()));
            }
        }

        for md in info.attrs().iter().filter(|md| md.is_conditional()) {
            let required = self.is_condition_met(md, &passed);
            let present = passed.contains_key(&md.attr_id);

            if required && !present {
                error!(
                    "create {}: {} is required by its condition but not passed",
                    object_type, md.name
                );
                return Err(SaiError::mandatory_attribute_missing(md.name.clone()));
            }

            if !required && present {
                error!(
                    "create {}: {} passed but its condition is not met",
                    object_type, md.name
                );
                return Err(SaiError::invalid_parameter(format!(
                    "{} passed but its condition is not met",
                    md.name
                )));
            }
        }

        if let Some(key) = AttrKeyMap::construct_key(info, attrs) {
            if self.state.attr_keys.attr_key_exists(&key) {
                error!("create {}: attribute key {} already exists", object_type, key);
                return Err(SaiError::invalid_parameter(format!(
                    "attribute key {} already exists",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Checks the handle fields embedded in an entry key.
    fn validate_entry_members(&self, entry: &SaiEntry, switch_id: SaiObjectId) -> SaiResult<()> {
        for member in entry.oid_members() {
            if member.oid.is_null() {
                if member.allow_null {
                    warn!("{}: {} is NULL", entry.object_type(), member.name);
                    continue;
                }
                error!("{}: {} is NULL", entry.object_type(), member.name);
                return Err(SaiError::invalid_parameter(format!(
                    "{} is NULL",
                    member.name
                )));
            }

            if !self.state.oids.exists(member.oid) {
                error!("{}: {} {} does not exist", entry.object_type(), member.name, member.oid);
                return Err(SaiError::invalid_parameter(format!(
                    "{} {} does not exist",
                    member.name, member.oid
                )));
            }

            let object_type = self.query.object_type_query(member.oid);

            if !member.allowed_object_types.contains(&object_type) {
                error!(
                    "{}: {} {} has type {} which is not allowed",
                    entry.object_type(),
                    member.name,
                    member.oid,
                    object_type
                );
                return Err(SaiError::invalid_parameter(format!(
                    "{} {} has type {} which is not allowed",
                    member.name, member.oid, object_type
                )));
            }

            let member_switch_id = self.query.switch_id_query(member.oid);

            if !self.state.oids.exists(member_switch_id) {
                error!(
                    "{}: switch {} of {} does not exist",
                    entry.object_type(),
                    member_switch_id,
                    member.name
                );
                return Err(SaiError::invalid_parameter(format!(
                    "switch {} of {} does not exist",
                    member_switch_id, member.name
                )));
            }

            if member_switch_id != switch_id {
                error!(
                    "{}: {} belongs to switch {}, entry to {}",
                    entry.object_type(),
                    member.name,
                    member_switch_id,
                    switch_id
                );
                return Err(SaiError::invalid_parameter(format!(
                    "{} belongs to switch {}, expected {}",
                    member.name, member_switch_id, switch_id
                )));
            }
        }

        Ok(())
    }

    /// Records a created object after the driver succeeded.
    pub(crate) fn post_create(
        &mut self,
        meta_key: &MetaKey,
        switch_id: SaiObjectId,
        attrs: &[Attribute],
    ) {
        let object_type = meta_key.object_type();
        let warm_switch = self.state.warm_boot && object_type == SaiObjectType::Switch;

        if self.state.objects.object_exists(meta_key) {
            if warm_switch {
                warn!("post create: switch {} re-attached after warm boot", meta_key);
            } else {
                error!("post create: object {} already exists", meta_key);
            }
        }

        if !warm_switch {
            self.state.objects.create_object(meta_key);
        }

        match meta_key {
            MetaKey::Entry(entry) => {
                for member in entry.oid_members() {
                    self.state.oids.increment(member.oid);
                }
            }
            MetaKey::Oid { oid, .. } => {
                if self.check_created_oid(object_type, *oid, switch_id) && !warm_switch {
                    self.state.oids.insert(*oid);
                }
            }
        }

        self.state.warm_boot = false;

        for attr in attrs {
            let md = match self.registry.attr_metadata(object_type, attr.id) {
                Some(md) => md.clone(),
                None => panic!(
                    "post create {}: no metadata for attribute id {}",
                    meta_key, attr.id
                ),
            };

            self.state.oids.increment_all(attr.value.oids());

            if !self.state.objects.set_object_attr(meta_key, md, attr.value.clone()) {
                error!("post create: object {} missing, {} not stored", meta_key, attr.id);
            }
        }

        if let Some(attr_key) = self
            .registry
            .object_type_info(object_type)
            .and_then(|info| AttrKeyMap::construct_key(info, attrs))
        {
            self.state.attr_keys.insert(&meta_key.to_string(), attr_key);
        }
    }

    /// Checks the handle a driver returned for a create.
    fn check_created_oid(
        &self,
        object_type: SaiObjectType,
        oid: SaiObjectId,
        switch_id: SaiObjectId,
    ) -> bool {
        if oid.is_null() {
            error!("post create {}: driver returned NULL object id", object_type);
            return false;
        }

        let actual = self.query.object_type_query(oid);

        if actual != object_type {
            error!(
                "post create {}: driver returned {} of type {}",
                object_type, oid, actual
            );
            return false;
        }

        let oid_switch_id = self.query.switch_id_query(oid);

        if oid_switch_id != switch_id {
            error!(
                "post create {}: {} belongs to switch {}, expected {}",
                object_type, oid, oid_switch_id, switch_id
            );
            return false;
        }

        true
    }
}
