//! Get pre-check and post-check.
//!
//! The post-check never fails the call: the device already answered, so
//! anything odd in its answer is logged. Handles the mirror has not seen yet
//! are snooped into it.

use super::attr::{is_enabled, MAX_VLAN_LIST_LEN};
use super::MetaContext;
use log::{error, warn};
use sonic_sai::{
    AttrMetadata, AttrValue, AttrValueType, Attribute, MetaKey, SaiError, SaiObjectId,
    SaiObjectType, SaiResult,
};
use sonic_types::is_valid_vlan_id;
use std::collections::HashSet;

/// Object types a port owns for its whole life.
const PORT_RELATED_TYPES: &[SaiObjectType] = &[
    SaiObjectType::Queue,
    SaiObjectType::SchedulerGroup,
    SaiObjectType::IngressPriorityGroup,
];

fn is_port_related_list(md: &AttrMetadata) -> bool {
    md.value_type == AttrValueType::ObjectList
        && !md.allowed_object_types.is_empty()
        && md
            .allowed_object_types
            .iter()
            .all(|ot| PORT_RELATED_TYPES.contains(ot))
}

impl MetaContext<'_> {
    /// Checks the output buffers of a get. Scalar enum buffers are zeroed.
    pub(crate) fn validate_get(&self, meta_key: &MetaKey, attrs: &mut [Attribute]) -> SaiResult<()> {
        let object_type = meta_key.object_type();

        if attrs.is_empty() {
            error!("get {}: no attributes requested", meta_key);
            return Err(SaiError::invalid_parameter("no attributes requested"));
        }

        if attrs.len() > self.config.max_list_count {
            error!(
                "get {}: attribute count {} exceeds maximum {}",
                meta_key,
                attrs.len(),
                self.config.max_list_count
            );
            return Err(SaiError::invalid_parameter(format!(
                "attribute count {} exceeds maximum",
                attrs.len()
            )));
        }

        for attr in attrs.iter_mut() {
            let md = match self.registry.attr_metadata(object_type, attr.id) {
                Some(md) => md,
                None => {
                    error!("get {}: unknown attribute id {}", meta_key, attr.id);
                    return Err(SaiError::invalid_parameter(format!(
                        "{}: unknown attribute id {}",
                        object_type, attr.id
                    )));
                }
            };

            if md.is_enum() {
                attr.value.clear_enum_value();
            }

            let value_type = attr.value.value_type();

            if value_type != md.value_type {
                error!(
                    "get {}: {} buffer is {:?}, expected {:?}",
                    meta_key, md.name, value_type, md.value_type
                );
                return Err(SaiError::invalid_parameter(format!(
                    "{}: buffer is {:?}, expected {:?}",
                    md.name, value_type, md.value_type
                )));
            }

            if let Some(len) = attr.value.list_len() {
                if len > self.config.max_list_count {
                    error!(
                        "get {}: {} buffer count {} exceeds maximum {}",
                        meta_key, md.name, len, self.config.max_list_count
                    );
                    return Err(SaiError::invalid_parameter(format!(
                        "{}: buffer count {} exceeds maximum",
                        md.name, len
                    )));
                }
            }

            if let AttrValue::VlanList(vlans) = &attr.value {
                if vlans.len() > MAX_VLAN_LIST_LEN {
                    error!("get {}: {} vlan buffer count {} too big", meta_key, md.name, vlans.len());
                    return Err(SaiError::invalid_parameter(format!(
                        "{}: vlan buffer count {} too big",
                        md.name,
                        vlans.len()
                    )));
                }
            }
        }

        Ok(())
    }

    pub(crate) fn post_get(&mut self, meta_key: &MetaKey, attrs: &[Attribute]) {
        let object_type = meta_key.object_type();

        let switch_id = match meta_key {
            MetaKey::Oid { oid, .. } => {
                let switch_id = self.query.switch_id_query(*oid);
                if !self.state.oids.exists(switch_id) {
                    error!("get {}: switch {} does not exist", meta_key, switch_id);
                }
                switch_id
            }
            MetaKey::Entry(entry) => entry.switch_id(),
        };

        for attr in attrs {
            let md = match self.registry.attr_metadata(object_type, attr.id) {
                Some(md) => md.clone(),
                None => {
                    error!("get {}: unknown attribute id {}", meta_key, attr.id);
                    continue;
                }
            };

            if md.is_oid_attribute() && is_enabled(&attr.value) {
                self.post_get_oids(&md, attr.value.oids(), switch_id);
            }

            self.post_get_value(&md, &attr.value);

            if let MetaKey::Oid {
                object_type: SaiObjectType::Port,
                oid: port_id,
            } = meta_key
            {
                if is_port_related_list(&md) {
                    for &related in attr.value.oids() {
                        self.state.port_related.insert(*port_id, related);
                    }
                }
            }
        }
    }

    fn post_get_oids(&mut self, md: &AttrMetadata, oids: &[SaiObjectId], switch_id: SaiObjectId) {
        let mut seen = HashSet::new();

        for &oid in oids {
            if !seen.insert(oid) {
                error!("{}: device returned duplicated {}", md.name, oid);
                continue;
            }

            if oid.is_null() {
                if !md.allow_null {
                    error!("{}: device returned NULL which is not allowed", md.name);
                }
                continue;
            }

            let object_type = self.query.object_type_query(oid);

            if object_type == SaiObjectType::Null {
                error!("{}: device returned invalid object id {}", md.name, oid);
                continue;
            }

            if !md.is_allowed_object_type(object_type) {
                error!(
                    "{}: device returned {} of type {} which is not allowed",
                    md.name, oid, object_type
                );
                continue;
            }

            if !self.state.oids.exists(oid) {
                self.snoop_oid(oid);
            }

            let oid_switch_id = self.query.switch_id_query(oid);

            if !self.state.oids.exists(oid_switch_id) {
                error!(
                    "{}: switch {} of returned {} does not exist",
                    md.name, oid_switch_id, oid
                );
                continue;
            }

            if oid_switch_id != switch_id {
                error!(
                    "{}: returned {} belongs to switch {}, expected {}",
                    md.name, oid, oid_switch_id, switch_id
                );
            }
        }
    }

    fn post_get_value(&self, md: &AttrMetadata, value: &AttrValue) {
        match value {
            AttrValue::VlanList(vlans) => {
                if vlans.len() > MAX_VLAN_LIST_LEN {
                    error!("{}: device returned {} vlans", md.name, vlans.len());
                }
                for vlan in vlans.iter().filter(|v| !is_valid_vlan_id(**v)) {
                    error!("{}: device returned invalid vlan {}", md.name, vlan);
                }
            }
            AttrValue::U32Range { min, max } if min > max => {
                error!("{}: device returned invalid range {} .. {}", md.name, min, max);
            }
            AttrValue::S32Range { min, max } if min > max => {
                error!("{}: device returned invalid range {} .. {}", md.name, min, max);
            }
            _ => {}
        }

        if md.is_enum() {
            if let Some(v) = value.enum_value() {
                if !md.is_allowed_enum_value(v) {
                    error!("{}: device returned enum value {} outside of schema", md.name, v);
                }
            }
        }

        if md.is_enum_list {
            if let AttrValue::S32List(list) = value {
                for v in list.iter().filter(|v| !md.is_allowed_enum_value(**v)) {
                    warn!("{}: device returned enum list value {} outside of schema", md.name, v);
                }
            }
        }
    }
}
