//! SAI metadata validation layer.
//!
//! Every SAI call a control-plane process makes passes through [`Meta`]
//! twice: once before the driver sees it, to reject calls the schema forbids
//! or that would break referential integrity, and once after the driver
//! succeeded, to fold the result into a local mirror of the device:
//!
//! - [`OidRefCounter`]: reference count per live object handle
//! - [`SaiObjectCollection`]: every live object with its stored attributes
//! - [`AttrKeyMap`]: uniqueness index over key attributes
//! - [`PortRelatedSet`]: queues, scheduler groups and priority groups owned
//!   by each port
//!
//! Device notifications (FDB learning and aging, port and queue state) are
//! reconciled into the same mirror.
//!
//! # Example
//!
//! ```
//! use sonic_meta::{Meta, MetaConfig};
//! use sonic_sai::{MetadataRegistry, ObjectIdQuery, SaiObjectId, SaiObjectType};
//! use std::sync::Arc;
//!
//! struct SwitchOnly;
//!
//! impl ObjectIdQuery for SwitchOnly {
//!     fn object_type_query(&self, oid: SaiObjectId) -> SaiObjectType {
//!         if oid.is_null() { SaiObjectType::Null } else { SaiObjectType::Switch }
//!     }
//!
//!     fn switch_id_query(&self, oid: SaiObjectId) -> SaiObjectId {
//!         oid
//!     }
//! }
//!
//! let registry = MetadataRegistry::builder()
//!     .object_type(SaiObjectType::Switch)
//!     .build()
//!     .unwrap();
//! let meta = Meta::new(Arc::new(registry), Arc::new(SwitchOnly), MetaConfig::default());
//!
//! let switch_id = meta
//!     .create(SaiObjectType::Switch, SaiObjectId::NULL, &[], |_, _| {
//!         Ok(SaiObjectId::from_raw(0x21))
//!     })
//!     .unwrap();
//! assert_eq!(meta.reference_count(switch_id), Some(0));
//! ```

mod attr_keys;
mod collection;
mod config;
mod engine;
mod notify;
mod oid_refs;
mod port_related;

#[cfg(test)]
mod test_support;

pub use attr_keys::AttrKeyMap;
pub use collection::{SaiAttr, SaiObject, SaiObjectCollection};
pub use config::{ConfigError, MetaConfig};
pub use engine::Meta;
pub use oid_refs::OidRefCounter;
pub use port_related::PortRelatedSet;
