//! SAI object handles and object types.
//!
//! An object handle is opaque to this crate: its object type and owning switch
//! are recovered through an [`ObjectIdQuery`] supplied by whoever allocates the
//! handles (the virtual-id translator in syncd, or a mock in tests).

use serde::Serialize;
use std::fmt;

/// Raw SAI object ID type (matches sai_object_id_t in C).
pub type RawSaiObjectId = u64;

/// An opaque SAI object handle.
///
/// Unlike the typed handles used by orchagent, the metadata layer is
/// schema-driven and only learns an object's type at runtime, so the handle
/// carries no type parameter.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct SaiObjectId(RawSaiObjectId);

impl SaiObjectId {
    /// The null object ID (SAI_NULL_OBJECT_ID).
    pub const NULL: Self = SaiObjectId(0);

    /// Creates a handle from a raw value, including null.
    pub const fn from_raw(raw: RawSaiObjectId) -> Self {
        SaiObjectId(raw)
    }

    /// Returns the raw object ID value.
    pub const fn as_raw(&self) -> RawSaiObjectId {
        self.0
    }

    /// Returns true if this is the null object ID.
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for SaiObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oid:0x{:x}", self.0)
    }
}

impl fmt::Display for SaiObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oid:0x{:x}", self.0)
    }
}

impl From<SaiObjectId> for String {
    fn from(oid: SaiObjectId) -> String {
        oid.to_string()
    }
}

impl From<RawSaiObjectId> for SaiObjectId {
    fn from(raw: RawSaiObjectId) -> Self {
        SaiObjectId(raw)
    }
}

/// Decodes the information packed into an object handle.
///
/// Implemented outside this workspace by the handle allocator. Both methods
/// must be pure lookups: they are called while the metadata lock is held.
pub trait ObjectIdQuery: Send + Sync {
    /// Returns the object type encoded in `oid`, or [`SaiObjectType::Null`]
    /// if the handle is not recognized.
    fn object_type_query(&self, oid: SaiObjectId) -> SaiObjectType;

    /// Returns the switch that owns `oid`, or [`SaiObjectId::NULL`] if the
    /// handle is not recognized.
    fn switch_id_query(&self, oid: SaiObjectId) -> SaiObjectId;
}

macro_rules! define_object_types {
    ($($variant:ident = $value:literal, $name:literal, $non_object_id:literal;)*) => {
        /// SAI object types known to the metadata layer.
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SaiObjectType {
            $($variant = $value,)*
        }

        impl SaiObjectType {
            /// Every object type, in numeric order.
            pub const ALL: &'static [SaiObjectType] = &[$(SaiObjectType::$variant,)*];

            /// Converts a raw `sai_object_type_t` value.
            pub fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $($value => Some(SaiObjectType::$variant),)*
                    _ => None,
                }
            }

            /// Returns the `SAI_OBJECT_TYPE_*` name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(SaiObjectType::$variant => $name,)*
                }
            }

            /// Returns true for types identified by an inline entry key rather
            /// than by an object handle.
            pub const fn is_non_object_id(&self) -> bool {
                match self {
                    $(SaiObjectType::$variant => $non_object_id,)*
                }
            }
        }
    };
}

define_object_types! {
    Null = 0, "SAI_OBJECT_TYPE_NULL", false;
    Port = 1, "SAI_OBJECT_TYPE_PORT", false;
    Lag = 2, "SAI_OBJECT_TYPE_LAG", false;
    VirtualRouter = 3, "SAI_OBJECT_TYPE_VIRTUAL_ROUTER", false;
    NextHop = 4, "SAI_OBJECT_TYPE_NEXT_HOP", false;
    NextHopGroup = 5, "SAI_OBJECT_TYPE_NEXT_HOP_GROUP", false;
    RouterInterface = 6, "SAI_OBJECT_TYPE_ROUTER_INTERFACE", false;
    AclTable = 7, "SAI_OBJECT_TYPE_ACL_TABLE", false;
    AclEntry = 8, "SAI_OBJECT_TYPE_ACL_ENTRY", false;
    AclCounter = 9, "SAI_OBJECT_TYPE_ACL_COUNTER", false;
    AclRange = 10, "SAI_OBJECT_TYPE_ACL_RANGE", false;
    AclTableGroup = 11, "SAI_OBJECT_TYPE_ACL_TABLE_GROUP", false;
    AclTableGroupMember = 12, "SAI_OBJECT_TYPE_ACL_TABLE_GROUP_MEMBER", false;
    Hostif = 13, "SAI_OBJECT_TYPE_HOSTIF", false;
    MirrorSession = 14, "SAI_OBJECT_TYPE_MIRROR_SESSION", false;
    Samplepacket = 15, "SAI_OBJECT_TYPE_SAMPLEPACKET", false;
    Stp = 16, "SAI_OBJECT_TYPE_STP", false;
    HostifTrapGroup = 17, "SAI_OBJECT_TYPE_HOSTIF_TRAP_GROUP", false;
    Policer = 18, "SAI_OBJECT_TYPE_POLICER", false;
    Wred = 19, "SAI_OBJECT_TYPE_WRED", false;
    QosMap = 20, "SAI_OBJECT_TYPE_QOS_MAP", false;
    Queue = 21, "SAI_OBJECT_TYPE_QUEUE", false;
    Scheduler = 22, "SAI_OBJECT_TYPE_SCHEDULER", false;
    SchedulerGroup = 23, "SAI_OBJECT_TYPE_SCHEDULER_GROUP", false;
    BufferPool = 24, "SAI_OBJECT_TYPE_BUFFER_POOL", false;
    BufferProfile = 25, "SAI_OBJECT_TYPE_BUFFER_PROFILE", false;
    IngressPriorityGroup = 26, "SAI_OBJECT_TYPE_INGRESS_PRIORITY_GROUP", false;
    LagMember = 27, "SAI_OBJECT_TYPE_LAG_MEMBER", false;
    Hash = 28, "SAI_OBJECT_TYPE_HASH", false;
    FdbEntry = 32, "SAI_OBJECT_TYPE_FDB_ENTRY", true;
    Switch = 33, "SAI_OBJECT_TYPE_SWITCH", false;
    HostifTrap = 34, "SAI_OBJECT_TYPE_HOSTIF_TRAP", false;
    NeighborEntry = 36, "SAI_OBJECT_TYPE_NEIGHBOR_ENTRY", true;
    RouteEntry = 37, "SAI_OBJECT_TYPE_ROUTE_ENTRY", true;
    Vlan = 38, "SAI_OBJECT_TYPE_VLAN", false;
    VlanMember = 39, "SAI_OBJECT_TYPE_VLAN_MEMBER", false;
    TunnelMap = 41, "SAI_OBJECT_TYPE_TUNNEL_MAP", false;
    Tunnel = 42, "SAI_OBJECT_TYPE_TUNNEL", false;
    FdbFlush = 44, "SAI_OBJECT_TYPE_FDB_FLUSH", false;
    NextHopGroupMember = 45, "SAI_OBJECT_TYPE_NEXT_HOP_GROUP_MEMBER", false;
    L2mcGroup = 49, "SAI_OBJECT_TYPE_L2MC_GROUP", false;
    IpmcGroup = 51, "SAI_OBJECT_TYPE_IPMC_GROUP", false;
    L2mcEntry = 53, "SAI_OBJECT_TYPE_L2MC_ENTRY", true;
    IpmcEntry = 54, "SAI_OBJECT_TYPE_IPMC_ENTRY", true;
    McastFdbEntry = 55, "SAI_OBJECT_TYPE_MCAST_FDB_ENTRY", true;
    Bridge = 57, "SAI_OBJECT_TYPE_BRIDGE", false;
    BridgePort = 58, "SAI_OBJECT_TYPE_BRIDGE_PORT", false;
    TunnelMapEntry = 59, "SAI_OBJECT_TYPE_TUNNEL_MAP_ENTRY", false;
    InsegEntry = 67, "SAI_OBJECT_TYPE_INSEG_ENTRY", true;
    NatEntry = 85, "SAI_OBJECT_TYPE_NAT_ENTRY", true;
}

impl fmt::Display for SaiObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
