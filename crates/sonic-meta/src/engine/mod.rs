//! Validation engine.
//!
//! Every operation follows the same protocol: a pre-check against the
//! schema and the mirror, the caller's driver call, and on driver success a
//! post-check that folds the result back into the mirror. All three run
//! under one lock so a notification can never observe a half-applied object.

mod attr;
mod create;
mod entry;
mod get;
mod remove;
mod set;
mod stats;

use crate::attr_keys::AttrKeyMap;
use crate::collection::SaiObjectCollection;
use crate::config::MetaConfig;
use crate::oid_refs::OidRefCounter;
use crate::port_related::PortRelatedSet;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use sonic_sai::{
    AttrValue, Attribute, MetaKey, MetadataRegistry, ObjectIdQuery, SaiAttrId, SaiEntry, SaiError,
    SaiObjectId, SaiObjectType, SaiResult, SaiStatus,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Mutable state of the mirror. Only reachable through the [`Meta`] lock.
#[derive(Debug, Default)]
pub(crate) struct MetaState {
    pub(crate) oids: OidRefCounter,
    pub(crate) objects: SaiObjectCollection,
    pub(crate) attr_keys: AttrKeyMap,
    pub(crate) port_related: PortRelatedSet,
    pub(crate) warm_boot: bool,
    pub(crate) unittests: bool,
    pub(crate) readonly_set_once: HashSet<(SaiObjectType, SaiAttrId)>,
}

impl MetaState {
    fn clear(&mut self) {
        self.oids.clear();
        self.objects.clear();
        self.attr_keys.clear();
        self.port_related.clear();
    }
}

/// Borrowed view of everything one locked operation needs.
pub(crate) struct MetaContext<'a> {
    pub(crate) registry: &'a MetadataRegistry,
    pub(crate) query: &'a dyn ObjectIdQuery,
    pub(crate) config: &'a MetaConfig,
    pub(crate) state: &'a mut MetaState,
}

impl MetaContext<'_> {
    /// Checks an object handle addressed by remove, set, get or stats.
    ///
    /// With `create` set, only the object type is checked: the handle does
    /// not exist yet.
    pub(crate) fn validate_oid(
        &self,
        object_type: SaiObjectType,
        oid: SaiObjectId,
        create: bool,
    ) -> SaiResult<()> {
        if object_type.is_non_object_id() {
            error!("{} is a non object id type, expected entry", object_type);
            return Err(SaiError::invalid_parameter(format!(
                "{} is not an object id type",
                object_type
            )));
        }

        if !self.registry.is_known_object_type(object_type) {
            error!("object type {} has no metadata", object_type);
            return Err(SaiError::invalid_parameter(format!(
                "unknown object type {}",
                object_type
            )));
        }

        if create {
            return Ok(());
        }

        if oid.is_null() {
            error!("object id is NULL for {}", object_type);
            return Err(SaiError::invalid_parameter("object id is NULL"));
        }

        let actual = self.query.object_type_query(oid);

        if actual == SaiObjectType::Null {
            error!("{} is not a valid object id", oid);
            return Err(SaiError::invalid_parameter(format!(
                "{} is not a valid object id",
                oid
            )));
        }

        if actual != object_type {
            error!("{} type {} does not match expected {}", oid, actual, object_type);
            return Err(SaiError::invalid_parameter(format!(
                "{} is {}, expected {}",
                oid, actual, object_type
            )));
        }

        let key = MetaKey::oid(object_type, oid);

        if !self.state.objects.object_exists(&key) {
            error!("object {} does not exist", key);
            return Err(SaiError::invalid_parameter(format!(
                "object {} does not exist",
                key
            )));
        }

        Ok(())
    }

    /// Checks that `switch_id` names a live switch.
    pub(crate) fn validate_switch(&self, switch_id: SaiObjectId) -> SaiResult<()> {
        if switch_id.is_null() {
            error!("switch id is NULL");
            return Err(SaiError::invalid_parameter("switch id is NULL"));
        }

        let object_type = self.query.object_type_query(switch_id);

        if object_type != SaiObjectType::Switch {
            error!("{} is {}, expected switch", switch_id, object_type);
            return Err(SaiError::invalid_parameter(format!(
                "{} is not a switch",
                switch_id
            )));
        }

        if !self.state.oids.exists(switch_id) {
            error!("switch {} does not exist", switch_id);
            return Err(SaiError::invalid_parameter(format!(
                "switch {} does not exist",
                switch_id
            )));
        }

        Ok(())
    }

    /// Checks the key of any operation other than an OID create.
    pub(crate) fn validate_key(&self, meta_key: &MetaKey, create: bool) -> SaiResult<()> {
        match meta_key {
            MetaKey::Oid { object_type, oid } => self.validate_oid(*object_type, *oid, create),
            MetaKey::Entry(entry) => self.validate_entry(entry, create),
        }
    }

    /// Inserts a handle seen in driver output or a notification into the
    /// mirror. Returns false if the handle could not be decoded.
    pub(crate) fn snoop_oid(&mut self, oid: SaiObjectId) -> bool {
        if oid.is_null() || self.state.oids.exists(oid) {
            return true;
        }

        let object_type = self.query.object_type_query(oid);

        if object_type == SaiObjectType::Null {
            error!("can't snoop {}: object type is not recognized", oid);
            return false;
        }

        let key = MetaKey::oid(object_type, oid);

        self.state.oids.insert(oid);
        self.state.objects.create_object(&key);

        info!("snooped object {}", key);
        true
    }
}

fn driver_result(op: &str, meta_key: &dyn std::fmt::Display, status: SaiStatus) -> SaiResult<()> {
    if status.is_success() {
        debug!("{} {}: {}", op, meta_key, status);
        Ok(())
    } else {
        error!("{} {} failed: {}", op, meta_key, status);
        Err(SaiError::from_status(status))
    }
}

/// The metadata layer of one process.
///
/// Owns the reference ledger, the object mirror, the attribute-key index and
/// the port tracker behind a single lock. Driver closures passed to its
/// operations run while that lock is held and must not call back into the
/// same `Meta`.
pub struct Meta {
    state: Mutex<MetaState>,
    registry: Arc<MetadataRegistry>,
    oid_query: Arc<dyn ObjectIdQuery>,
    config: MetaConfig,
}

impl Meta {
    pub fn new(
        registry: Arc<MetadataRegistry>,
        oid_query: Arc<dyn ObjectIdQuery>,
        config: MetaConfig,
    ) -> Self {
        let state = MetaState {
            unittests: config.unittests_enabled,
            ..MetaState::default()
        };

        Self {
            state: Mutex::new(state),
            registry,
            oid_query,
            config,
        }
    }

    pub fn config(&self) -> &MetaConfig {
        &self.config
    }

    pub fn registry(&self) -> &MetadataRegistry {
        &self.registry
    }

    /// Runs `f` with the lock held.
    pub(crate) fn with_context<R>(&self, f: impl FnOnce(&mut MetaContext<'_>) -> R) -> R {
        let mut state = self.state.lock();
        let mut ctx = MetaContext {
            registry: self.registry.as_ref(),
            query: self.oid_query.as_ref(),
            config: &self.config,
            state: &mut *state,
        };
        f(&mut ctx)
    }

    /// Creates an object-id object.
    ///
    /// `driver` receives the switch and the attributes and returns the new
    /// handle. For a switch create `switch_id` is ignored.
    pub fn create<F>(
        &self,
        object_type: SaiObjectType,
        switch_id: SaiObjectId,
        attrs: &[Attribute],
        driver: F,
    ) -> SaiResult<SaiObjectId>
    where
        F: FnOnce(SaiObjectId, &[Attribute]) -> Result<SaiObjectId, SaiStatus>,
    {
        self.with_context(|ctx| {
            ctx.validate_oid(object_type, SaiObjectId::NULL, true)?;

            let pending = MetaKey::oid(object_type, SaiObjectId::NULL);
            ctx.validate_create(&pending, switch_id, attrs)?;

            let oid = match driver(switch_id, attrs) {
                Ok(oid) => {
                    debug!("create {}: {}", object_type, oid);
                    oid
                }
                Err(status) => {
                    error!("create {} failed: {}", object_type, status);
                    return Err(SaiError::from_status(status));
                }
            };

            let switch_id = if object_type == SaiObjectType::Switch {
                oid
            } else {
                switch_id
            };

            ctx.post_create(&MetaKey::oid(object_type, oid), switch_id, attrs);
            Ok(oid)
        })
    }

    /// Creates a non-object-id entry (route, neighbor, FDB, ...).
    pub fn create_entry<F>(&self, entry: &SaiEntry, attrs: &[Attribute], driver: F) -> SaiResult<()>
    where
        F: FnOnce(&[Attribute]) -> SaiStatus,
    {
        self.with_context(|ctx| {
            ctx.validate_entry(entry, true)?;

            let meta_key = MetaKey::Entry(entry.clone());
            ctx.validate_create(&meta_key, entry.switch_id(), attrs)?;

            driver_result("create", &meta_key, driver(attrs))?;

            ctx.post_create(&meta_key, entry.switch_id(), attrs);
            Ok(())
        })
    }

    pub fn remove<F>(&self, meta_key: &MetaKey, driver: F) -> SaiResult<()>
    where
        F: FnOnce() -> SaiStatus,
    {
        self.with_context(|ctx| {
            ctx.validate_key(meta_key, false)?;
            ctx.validate_remove(meta_key)?;

            driver_result("remove", meta_key, driver())?;

            ctx.post_remove(meta_key);
            Ok(())
        })
    }

    pub fn set<F>(&self, meta_key: &MetaKey, attr: &Attribute, driver: F) -> SaiResult<()>
    where
        F: FnOnce(&Attribute) -> SaiStatus,
    {
        self.with_context(|ctx| {
            ctx.validate_key(meta_key, false)?;
            ctx.validate_set(meta_key, attr)?;

            driver_result("set", meta_key, driver(attr))?;

            ctx.post_set(meta_key, attr);
            Ok(())
        })
    }

    /// Reads attributes into `attrs`, whose values double as typed output
    /// buffers: each must have the shape the schema declares.
    pub fn get<F>(&self, meta_key: &MetaKey, attrs: &mut [Attribute], driver: F) -> SaiResult<()>
    where
        F: FnOnce(&mut [Attribute]) -> SaiStatus,
    {
        self.with_context(|ctx| {
            ctx.validate_key(meta_key, false)?;
            ctx.validate_get(meta_key, attrs)?;

            driver_result("get", meta_key, driver(attrs))?;

            ctx.post_get(meta_key, attrs);
            Ok(())
        })
    }

    /// Reads counters. `count` is passed to the driver unchanged.
    pub fn get_stats<F>(
        &self,
        object_type: SaiObjectType,
        oid: SaiObjectId,
        count: u32,
        counter_ids: &[i32],
        counters: &mut [u64],
        driver: F,
    ) -> SaiResult<()>
    where
        F: FnOnce(u32, &[i32], &mut [u64]) -> SaiStatus,
    {
        self.with_context(|ctx| {
            let masked = ctx.validate_stats(object_type, oid, count, counter_ids)?;

            if counters.len() != masked {
                error!(
                    "counter buffer length {} does not match count {}",
                    counters.len(),
                    masked
                );
                return Err(SaiError::invalid_parameter(format!(
                    "counter buffer length {} does not match count {}",
                    counters.len(),
                    masked
                )));
            }

            let meta_key = MetaKey::oid(object_type, oid);
            driver_result("get_stats", &meta_key, driver(count, counter_ids, counters))
        })
    }

    pub fn clear_stats<F>(
        &self,
        object_type: SaiObjectType,
        oid: SaiObjectId,
        count: u32,
        counter_ids: &[i32],
        driver: F,
    ) -> SaiResult<()>
    where
        F: FnOnce(u32, &[i32]) -> SaiStatus,
    {
        self.with_context(|ctx| {
            ctx.validate_stats(object_type, oid, count, counter_ids)?;

            let meta_key = MetaKey::oid(object_type, oid);
            driver_result("clear_stats", &meta_key, driver(count, counter_ids))
        })
    }

    /// Flushes FDB entries on the device.
    ///
    /// The mirror is not touched: the device reports what it flushed through
    /// an FDB flush notification.
    pub fn flush_fdb_entries<F>(
        &self,
        switch_id: SaiObjectId,
        attrs: &[Attribute],
        driver: F,
    ) -> SaiResult<()>
    where
        F: FnOnce(SaiObjectId, &[Attribute]) -> SaiStatus,
    {
        self.with_context(|ctx| {
            ctx.validate_flush_fdb(switch_id, attrs)?;
            driver_result("flush_fdb_entries", &switch_id, driver(switch_id, attrs))
        })
    }

    /// Asks the device which values of an enum attribute it supports.
    ///
    /// The length of `values` on entry is the room offered to the driver,
    /// which shrinks it to the values it returns.
    pub fn query_attribute_enum_values_capability<F>(
        &self,
        switch_id: SaiObjectId,
        object_type: SaiObjectType,
        attr_id: SaiAttrId,
        values: &mut Vec<i32>,
        driver: F,
    ) -> SaiResult<()>
    where
        F: FnOnce(SaiObjectId, SaiObjectType, SaiAttrId, &mut Vec<i32>) -> SaiStatus,
    {
        self.with_context(|ctx| {
            let md =
                ctx.validate_enum_capability(switch_id, object_type, attr_id, values.as_slice())?;

            driver_result(
                "query_attribute_enum_values_capability",
                &md.name,
                driver(switch_id, object_type, attr_id, values),
            )?;

            for value in values.iter() {
                if !md.is_allowed_enum_value(*value) {
                    error!("{}: device reported enum value {} outside of schema", md.name, value);
                }
            }

            Ok(())
        })
    }

    /// Asks the device how many more objects of a type it can create.
    pub fn object_type_get_availability<F>(
        &self,
        switch_id: SaiObjectId,
        object_type: SaiObjectType,
        attrs: &[Attribute],
        driver: F,
    ) -> SaiResult<u64>
    where
        F: FnOnce(SaiObjectId, SaiObjectType, &[Attribute]) -> Result<u64, SaiStatus>,
    {
        self.with_context(|ctx| {
            ctx.validate_availability(switch_id, object_type, attrs)?;

            match driver(switch_id, object_type, attrs) {
                Ok(count) => {
                    debug!("availability of {}: {}", object_type, count);
                    Ok(count)
                }
                Err(status) => {
                    error!("availability of {} failed: {}", object_type, status);
                    Err(SaiError::from_status(status))
                }
            }
        })
    }

    /// Arms one-shot suppression of the checks that would reject re-creating
    /// an existing switch after a warm restart.
    pub fn warm_boot_notify(&self) {
        info!("warm boot: next switch create re-attaches to existing state");
        self.state.lock().warm_boot = true;
    }

    pub fn enable_unittests(&self, enable: bool) {
        info!("unittests {}", if enable { "enabled" } else { "disabled" });
        self.state.lock().unittests = enable;
    }

    pub fn is_unittests_enabled(&self) -> bool {
        self.state.lock().unittests
    }

    /// Lets the next set of one read-only attribute through. Test mode only.
    pub fn allow_readonly_set_once(
        &self,
        object_type: SaiObjectType,
        attr_id: SaiAttrId,
    ) -> SaiResult<()> {
        let mut state = self.state.lock();

        if !state.unittests {
            warn!("allow_readonly_set_once called while unittests are disabled");
            return Err(SaiError::failure("unittests are not enabled"));
        }

        let md = match self.registry.attr_metadata(object_type, attr_id) {
            Some(md) => md,
            None => {
                error!("{}: unknown attribute id {}", object_type, attr_id);
                return Err(SaiError::invalid_parameter(format!(
                    "{}: unknown attribute id {}",
                    object_type, attr_id
                )));
            }
        };

        if !md.is_read_only() {
            error!("{} is not read only", md.name);
            return Err(SaiError::invalid_parameter(format!(
                "{} is not read only",
                md.name
            )));
        }

        info!("{} may be set once", md.name);
        state.readonly_set_once.insert((object_type, attr_id));
        Ok(())
    }

    /// Drops the whole mirror.
    pub fn clear(&self) {
        warn!("clearing local object mirror");
        self.state.lock().clear();
    }

    pub fn object_exists(&self, meta_key: &MetaKey) -> bool {
        self.state.lock().objects.object_exists(meta_key)
    }

    /// Reference count of a tracked handle.
    pub fn reference_count(&self, oid: SaiObjectId) -> Option<u32> {
        self.state.lock().oids.count(oid)
    }

    pub fn object_attr(&self, meta_key: &MetaKey, attr_id: SaiAttrId) -> Option<AttrValue> {
        self.state
            .lock()
            .objects
            .get_object_attr(meta_key, attr_id)
            .map(|attr| attr.value().clone())
    }

    pub fn objects_by_type(&self, object_type: SaiObjectType) -> Vec<MetaKey> {
        self.state
            .lock()
            .objects
            .objects_by_type(object_type)
            .into_iter()
            .map(|object| object.meta_key().clone())
            .collect()
    }

    pub fn port_related_objects(&self, port_id: SaiObjectId) -> Vec<SaiObjectId> {
        self.state.lock().port_related.get_port_related_objects(port_id)
    }

    /// Returns true if a live object of `object_type` already holds the key
    /// attribute values found in `attrs`.
    pub fn attr_key_exists(&self, object_type: SaiObjectType, attrs: &[Attribute]) -> bool {
        match self
            .registry
            .object_type_info(object_type)
            .and_then(|info| AttrKeyMap::construct_key(info, attrs))
        {
            Some(key) => self.state.lock().attr_keys.attr_key_exists(&key),
            None => false,
        }
    }
}
