//! Entry key checks shared by every operation on a non-object-id object.

use super::MetaContext;
use log::error;
use sonic_sai::{MetaKey, SaiEntry, SaiError, SaiObjectType, SaiResult};

impl MetaContext<'_> {
    /// Checks an entry key before create, remove, set or get.
    ///
    /// With `create` set the entry must not exist yet, otherwise it must.
    pub(crate) fn validate_entry(&self, entry: &SaiEntry, create: bool) -> SaiResult<()> {
        if let Some(anchor) = entry.anchor() {
            if anchor.oid.is_null() {
                error!("{}: {} is NULL", entry.object_type(), anchor.name);
                return Err(SaiError::invalid_parameter(format!("{} is NULL", anchor.name)));
            }

            let object_type = self.query.object_type_query(anchor.oid);

            if object_type == SaiObjectType::Null {
                error!(
                    "{}: {} {} is not a valid object id",
                    entry.object_type(),
                    anchor.name,
                    anchor.oid
                );
                return Err(SaiError::invalid_parameter(format!(
                    "{} {} is not a valid object id",
                    anchor.name, anchor.oid
                )));
            }

            if !anchor.allowed_object_types.contains(&object_type) {
                error!(
                    "{}: {} {} has type {} which is not allowed",
                    entry.object_type(),
                    anchor.name,
                    anchor.oid,
                    object_type
                );
                return Err(SaiError::invalid_parameter(format!(
                    "{} {} has type {} which is not allowed",
                    anchor.name, anchor.oid, object_type
                )));
            }

            let anchor_key = MetaKey::oid(object_type, anchor.oid);

            if !self.state.objects.object_exists(&anchor_key) {
                error!("{}: {} does not exist", entry.object_type(), anchor_key);
                return Err(SaiError::invalid_parameter(format!(
                    "{} does not exist",
                    anchor_key
                )));
            }
        }

        if let SaiEntry::Route(route) = entry {
            let destination = &route.destination;

            if destination.address().is_ipv6() && !destination.has_contiguous_mask() {
                error!("route {}: ipv6 mask is not contiguous", destination);
                return Err(SaiError::invalid_parameter(format!(
                    "route {}: ipv6 mask is not contiguous",
                    destination
                )));
            }
        }

        let meta_key = MetaKey::Entry(entry.clone());
        let exists = self.state.objects.object_exists(&meta_key);

        if create && exists {
            error!("object {} already exists", meta_key);
            return Err(SaiError::already_exists(meta_key.to_string()));
        }

        if !create && !exists {
            error!("object {} does not exist", meta_key);
            return Err(SaiError::invalid_parameter(format!(
                "object {} does not exist",
                meta_key
            )));
        }

        Ok(())
    }
}
