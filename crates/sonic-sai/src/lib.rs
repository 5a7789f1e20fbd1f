//! SAI (Switch Abstraction Interface) vocabulary for the metadata layer.
//!
//! This crate holds the types every SAI operation is expressed in, without
//! any of the validation logic:
//!
//! - [`types`]: opaque object handles, object types and the handle decoder seam
//! - [`error`]: SAI status codes and the error type mapped onto them
//! - [`attr`]: attribute values, one variant per `sai_attribute_value_t` shape
//! - [`metadata`]: the attribute schema registry
//! - [`entry`]: non-object-id entry keys and the meta-key
//! - [`notification`]: switch notification payloads
//!
//! # Example
//!
//! ```
//! use sonic_sai::{MetaKey, SaiObjectId, SaiObjectType};
//!
//! let key = MetaKey::oid(SaiObjectType::Port, SaiObjectId::from_raw(0x10));
//! assert_eq!(key.to_string(), "SAI_OBJECT_TYPE_PORT:oid:0x10");
//! ```

pub mod attr;
pub mod entry;
pub mod error;
pub mod metadata;
pub mod notification;
pub mod types;

pub use attr::{
    find_attr, AclActionData, AclCapability, AclData, AclDataType, AclFieldData, AttrValue,
    AttrValueType, Attribute, CallbackId, SaiAttrId,
};
pub use entry::{
    EntryOidMember, FdbEntry, InsegEntry, IpmcEntry, L2mcEntry, McastEntryType, McastFdbEntry,
    MetaKey, NatEntry, NatKey, NatType, NeighborEntry, RouteEntry, SaiEntry,
};
pub use error::{SaiError, SaiResult, SaiStatus};
pub use metadata::{
    AttrCondition, AttrFlags, AttrMetadata, ConditionValue, EnumMetadata, MetadataRegistry,
    MetadataRegistryBuilder, ObjectTypeInfo,
};
pub use notification::{
    FdbEventData, FDB_ENTRY_ATTR_BRIDGE_PORT_ID, FDB_ENTRY_ATTR_TYPE, FDB_ENTRY_TYPE_DYNAMIC,
    FDB_ENTRY_TYPE_STATIC, FdbEventType, PortOperStatus, PortOperStatusNotification,
    QueueDeadlockNotification, QueuePfcDeadlockEvent, SwitchOperStatus,
};
pub use types::{ObjectIdQuery, RawSaiObjectId, SaiObjectId, SaiObjectType};
