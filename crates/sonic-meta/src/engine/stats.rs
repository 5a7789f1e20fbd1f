//! Pre-checks of the switch-level calls: counters, FDB flush, enum
//! capability and object availability.

use super::MetaContext;
use log::error;
use sonic_sai::{
    AttrFlags, AttrMetadata, AttrValue, Attribute, MetaKey, SaiAttrId, SaiError, SaiObjectId,
    SaiObjectType, SaiResult,
};
use std::collections::HashSet;
use std::sync::Arc;

/// In test mode the top bit of a stats count marks a counter injection (the
/// caller sets counter values instead of reading them) and is not part of
/// the count.
const STATS_INJECT_BIT: u32 = 1 << 31;

/// Highest VLAN number accepted in a flush filter (exclusive).
const FLUSH_VLAN_LIMIT: u16 = 0xFFF;

fn invalid(message: String) -> SaiError {
    error!("{}", message);
    SaiError::invalid_parameter(message)
}

impl MetaContext<'_> {
    /// Checks a get/clear stats call and returns the number of counters
    /// requested.
    pub(crate) fn validate_stats(
        &self,
        object_type: SaiObjectType,
        oid: SaiObjectId,
        count: u32,
        counter_ids: &[i32],
    ) -> SaiResult<usize> {
        self.validate_oid(object_type, oid, false)?;

        let stat_enum = match self
            .registry
            .object_type_info(object_type)
            .and_then(|info| info.stat_enum.as_ref())
        {
            Some(stat_enum) => stat_enum,
            None => {
                error!("{} has no counters", object_type);
                return Err(SaiError::failure(format!("{} has no counters", object_type)));
            }
        };

        let masked = if self.state.unittests {
            count & !STATS_INJECT_BIT
        } else {
            count
        };

        let masked = match usize::try_from(masked) {
            Ok(masked) => masked,
            Err(_) => return Err(invalid(format!("stats count {} out of range", masked))),
        };

        if masked < 1 || masked > self.config.max_list_count {
            return Err(invalid(format!(
                "stats count {} must be between 1 and {}",
                masked, self.config.max_list_count
            )));
        }

        if counter_ids.len() != masked {
            return Err(invalid(format!(
                "stats count {} does not match {} counter ids",
                masked,
                counter_ids.len()
            )));
        }

        if let Some(id) = counter_ids.iter().find(|id| !stat_enum.is_allowed(**id)) {
            return Err(invalid(format!(
                "counter id {} is not a member of {}",
                id, stat_enum.name
            )));
        }

        Ok(masked)
    }

    /// Checks an FDB flush request.
    pub(crate) fn validate_flush_fdb(
        &self,
        switch_id: SaiObjectId,
        attrs: &[Attribute],
    ) -> SaiResult<()> {
        if attrs.len() > self.config.max_list_count {
            return Err(invalid(format!(
                "flush fdb: attribute count {} exceeds maximum {}",
                attrs.len(),
                self.config.max_list_count
            )));
        }

        self.validate_switch(switch_id)?;

        let mut seen: HashSet<SaiAttrId> = HashSet::new();

        for attr in attrs {
            let md = match self.registry.attr_metadata(SaiObjectType::FdbFlush, attr.id) {
                Some(md) => md,
                None => {
                    return Err(invalid(format!(
                        "flush fdb: unknown attribute id {}",
                        attr.id
                    )))
                }
            };

            if !seen.insert(attr.id) {
                return Err(invalid(format!("flush fdb: {} passed more than once", md.name)));
            }

            if md.flags != AttrFlags::CREATE_ONLY {
                return Err(invalid(format!(
                    "flush fdb: {} has unexpected flags {:?}",
                    md.name, md.flags
                )));
            }

            if md.is_conditional() {
                return Err(invalid(format!("flush fdb: {} is conditional", md.name)));
            }

            if attr.value.value_type() != md.value_type {
                return Err(invalid(format!(
                    "flush fdb: {} expects {:?}, got {:?}",
                    md.name,
                    md.value_type,
                    attr.value.value_type()
                )));
            }

            self.validate_flush_value(md, &attr.value, switch_id)?;
        }

        Ok(())
    }

    fn validate_flush_value(
        &self,
        md: &AttrMetadata,
        value: &AttrValue,
        switch_id: SaiObjectId,
    ) -> SaiResult<()> {
        match value {
            AttrValue::U16(vlan) if md.is_vlan => {
                if *vlan == 0 || *vlan >= FLUSH_VLAN_LIMIT {
                    return Err(invalid(format!("flush fdb: {} invalid vlan {}", md.name, vlan)));
                }
                Ok(())
            }
            AttrValue::S32(v) if md.is_enum() => {
                if !md.is_allowed_enum_value(*v) {
                    return Err(invalid(format!(
                        "flush fdb: {} enum value {} is not allowed",
                        md.name, v
                    )));
                }
                Ok(())
            }
            AttrValue::Oid(_) => self.validate_objlist(md, value.oids(), switch_id),
            _ => Err(invalid(format!(
                "flush fdb: {} has unsupported value type {:?}",
                md.name, md.value_type
            ))),
        }
    }

    /// Checks the addressed switch of a switch-level query: it must be a
    /// switch and live in the mirror.
    fn validate_query_switch(&self, switch_id: SaiObjectId) -> SaiResult<()> {
        let object_type = self.query.object_type_query(switch_id);

        if object_type != SaiObjectType::Switch {
            return Err(invalid(format!(
                "{} is {}, expected switch",
                switch_id, object_type
            )));
        }

        if !self
            .state
            .objects
            .object_exists(&MetaKey::oid(SaiObjectType::Switch, switch_id))
        {
            return Err(invalid(format!("switch {} does not exist", switch_id)));
        }

        Ok(())
    }

    /// Checks an enum capability query and returns the attribute queried.
    pub(crate) fn validate_enum_capability(
        &self,
        switch_id: SaiObjectId,
        object_type: SaiObjectType,
        attr_id: SaiAttrId,
        values: &[i32],
    ) -> SaiResult<Arc<AttrMetadata>> {
        self.validate_query_switch(switch_id)?;

        let md = match self.registry.attr_metadata(object_type, attr_id) {
            Some(md) => md,
            None => {
                return Err(invalid(format!(
                    "{}: unknown attribute id {}",
                    object_type, attr_id
                )))
            }
        };

        if md.enum_metadata.is_none() {
            return Err(invalid(format!("{} is not an enum", md.name)));
        }

        if values.len() > self.config.max_list_count {
            return Err(invalid(format!(
                "{}: value buffer count {} exceeds maximum {}",
                md.name,
                values.len(),
                self.config.max_list_count
            )));
        }

        Ok(md.clone())
    }

    pub(crate) fn validate_availability(
        &self,
        switch_id: SaiObjectId,
        object_type: SaiObjectType,
        attrs: &[Attribute],
    ) -> SaiResult<()> {
        self.validate_query_switch(switch_id)?;

        if attrs.is_empty() || attrs.len() > self.config.max_list_count {
            return Err(invalid(format!(
                "availability of {}: attribute count {} must be between 1 and {}",
                object_type,
                attrs.len(),
                self.config.max_list_count
            )));
        }

        if let Some(attr) = attrs
            .iter()
            .find(|attr| self.registry.attr_metadata(object_type, attr.id).is_none())
        {
            return Err(invalid(format!(
                "availability of {}: unknown attribute id {}",
                object_type, attr.id
            )));
        }

        Ok(())
    }
}
