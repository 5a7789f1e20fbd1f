//! Attribute value checks shared by create, set and FDB flush.

use super::MetaContext;
use log::{error, warn};
use sonic_sai::{
    AclActionData, AclFieldData, AttrMetadata, AttrValue, Attribute, SaiAttrId, SaiError,
    SaiObjectId, SaiObjectType, SaiResult,
};
use sonic_types::{is_valid_vlan_id, VLAN_ID_MAX};
use std::collections::{HashMap, HashSet};

/// Highest VLAN count a VLAN list may carry.
pub(crate) const MAX_VLAN_LIST_LEN: usize = VLAN_ID_MAX as usize;

fn invalid(md: &AttrMetadata, message: impl std::fmt::Display) -> SaiError {
    error!("{}: {}", md.name, message);
    SaiError::invalid_parameter(format!("{}: {}", md.name, message))
}

/// Returns false for ACL fields and actions that are switched off; their
/// payload is not looked at.
pub(crate) fn is_enabled(value: &AttrValue) -> bool {
    match value {
        AttrValue::AclField(AclFieldData { enable, .. }) => *enable,
        AttrValue::AclAction(AclActionData { enable, .. }) => *enable,
        _ => true,
    }
}

impl MetaContext<'_> {
    /// Checks a list of handles against the attribute's allowed types and
    /// against the live objects of `switch_id`.
    pub(crate) fn validate_objlist(
        &self,
        md: &AttrMetadata,
        oids: &[SaiObjectId],
        switch_id: SaiObjectId,
    ) -> SaiResult<()> {
        if oids.len() > self.config.max_list_count {
            return Err(invalid(
                md,
                format_args!(
                    "object list count {} exceeds maximum {}",
                    oids.len(),
                    self.config.max_list_count
                ),
            ));
        }

        let mut seen = HashSet::new();
        let mut list_type: Option<SaiObjectType> = None;

        for &oid in oids {
            if !seen.insert(oid) {
                return Err(invalid(md, format_args!("object {} is duplicated on list", oid)));
            }

            if oid.is_null() {
                if md.allow_null {
                    continue;
                }
                return Err(invalid(md, "NULL object id is not allowed"));
            }

            let object_type = self.query.object_type_query(oid);

            if object_type == SaiObjectType::Null {
                return Err(invalid(md, format_args!("{} is not a valid object id", oid)));
            }

            if !md.is_allowed_object_type(object_type) {
                return Err(invalid(
                    md,
                    format_args!("object {} type {} is not allowed", oid, object_type),
                ));
            }

            if !self.state.oids.exists(oid) {
                return Err(invalid(md, format_args!("object {} does not exist", oid)));
            }

            match list_type {
                Some(first) if first != object_type => {
                    return Err(invalid(
                        md,
                        format_args!(
                            "list mixes object types {} and {}",
                            first, object_type
                        ),
                    ));
                }
                _ => list_type = Some(object_type),
            }

            let oid_switch_id = self.query.switch_id_query(oid);

            if !self.state.oids.exists(oid_switch_id) {
                return Err(invalid(
                    md,
                    format_args!("switch {} of object {} does not exist", oid_switch_id, oid),
                ));
            }

            if oid_switch_id != switch_id {
                return Err(invalid(
                    md,
                    format_args!(
                        "object {} belongs to switch {}, expected {}",
                        oid, oid_switch_id, switch_id
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Type checks one attribute value against its schema entry.
    pub(crate) fn validate_attr_value(
        &self,
        md: &AttrMetadata,
        value: &AttrValue,
        switch_id: SaiObjectId,
    ) -> SaiResult<()> {
        let value_type = value.value_type();

        if value_type != md.value_type {
            return Err(invalid(
                md,
                format_args!("expected value of type {:?}, got {:?}", md.value_type, value_type),
            ));
        }

        if let Some(len) = value.list_len() {
            if len > self.config.max_list_count {
                return Err(invalid(
                    md,
                    format_args!(
                        "list count {} exceeds maximum {}",
                        len, self.config.max_list_count
                    ),
                ));
            }
        }

        match value {
            AttrValue::Chardata(text) => self.validate_chardata(md, text)?,
            AttrValue::U16(vlan) if md.is_vlan && !is_valid_vlan_id(*vlan) => {
                return Err(invalid(md, format_args!("invalid vlan id {}", vlan)));
            }
            AttrValue::U32Range { min, max } if min > max => {
                return Err(invalid(md, format_args!("invalid range {} .. {}", min, max)));
            }
            AttrValue::S32Range { min, max } if min > max => {
                return Err(invalid(md, format_args!("invalid range {} .. {}", min, max)));
            }
            AttrValue::VlanList(vlans) => {
                if vlans.len() > MAX_VLAN_LIST_LEN {
                    return Err(invalid(
                        md,
                        format_args!("vlan list count {} is too big", vlans.len()),
                    ));
                }
                if let Some(vlan) = vlans.iter().find(|v| !is_valid_vlan_id(**v)) {
                    return Err(invalid(md, format_args!("invalid vlan id {} on list", vlan)));
                }
            }
            _ => {}
        }

        if !is_enabled(value) {
            return Ok(());
        }

        if md.is_oid_attribute() {
            self.validate_objlist(md, value.oids(), switch_id)?;
        }

        if md.is_enum() {
            if let Some(v) = value.enum_value() {
                if !md.is_allowed_enum_value(v) {
                    return Err(invalid(md, format_args!("enum value {} is not allowed", v)));
                }
            }
        }

        if md.is_enum_list {
            if let AttrValue::S32List(list) = value {
                if let Some(v) = list.iter().find(|v| !md.is_allowed_enum_value(**v)) {
                    return Err(invalid(
                        md,
                        format_args!("enum list value {} is not allowed", v),
                    ));
                }
            }
        }

        Ok(())
    }

    fn validate_chardata(&self, md: &AttrMetadata, text: &str) -> SaiResult<()> {
        if text.is_empty() {
            return Err(invalid(md, "character data is empty"));
        }

        if text.len() >= self.config.max_chardata_len {
            return Err(invalid(
                md,
                format_args!(
                    "character data length {} must be less than {}",
                    text.len(),
                    self.config.max_chardata_len
                ),
            ));
        }

        if let Some(c) = text.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(invalid(
                md,
                format_args!("character data contains non printable {:?}", c),
            ));
        }

        Ok(())
    }

    /// Returns true if at least one condition of `md` holds, using the passed
    /// value of each governing attribute or, when absent, its default.
    pub(crate) fn is_condition_met(
        &self,
        md: &AttrMetadata,
        passed: &HashMap<SaiAttrId, &Attribute>,
    ) -> bool {
        md.conditions.iter().any(|condition| {
            let governing = match passed.get(&condition.attr_id) {
                Some(attr) => Some(&attr.value),
                None => self
                    .registry
                    .attr_metadata(md.object_type, condition.attr_id)
                    .and_then(|cmd| cmd.default.as_ref()),
            };

            match governing {
                Some(value) => condition.is_met_by(value),
                None => {
                    warn!(
                        "{}: condition attribute {} has no value and no default",
                        md.name, condition.attr_id
                    );
                    false
                }
            }
        })
    }
}
