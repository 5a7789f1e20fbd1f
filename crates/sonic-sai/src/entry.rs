//! Non-object-id entry keys and the meta-key.
//!
//! Route, neighbor, FDB and the other entry types are identified by a
//! composite key instead of a handle. [`SaiEntry`] is the tagged union over
//! those keys; it knows its object type, its owning switch and which of its
//! fields are handles, which is all the metadata layer needs to treat every
//! entry kind through one generic path.

use crate::types::{SaiObjectId, SaiObjectType};
use serde::Serialize;
use sonic_types::{IpAddress, IpPrefix, Ipv4Address, MacAddress};
use std::fmt;

const BRIDGE_OR_VLAN: &[SaiObjectType] = &[SaiObjectType::Bridge, SaiObjectType::Vlan];
const VIRTUAL_ROUTER: &[SaiObjectType] = &[SaiObjectType::VirtualRouter];
const ROUTER_INTERFACE: &[SaiObjectType] = &[SaiObjectType::RouterInterface];
const SWITCH: &[SaiObjectType] = &[SaiObjectType::Switch];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FdbEntry {
    pub switch_id: SaiObjectId,
    #[serde(rename = "mac")]
    pub mac_address: MacAddress,
    #[serde(rename = "bvid")]
    pub bv_id: SaiObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct McastFdbEntry {
    pub switch_id: SaiObjectId,
    #[serde(rename = "mac")]
    pub mac_address: MacAddress,
    #[serde(rename = "bvid")]
    pub bv_id: SaiObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NeighborEntry {
    pub switch_id: SaiObjectId,
    #[serde(rename = "rif")]
    pub rif_id: SaiObjectId,
    #[serde(rename = "ip")]
    pub ip_address: IpAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteEntry {
    pub switch_id: SaiObjectId,
    #[serde(rename = "vr")]
    pub vr_id: SaiObjectId,
    #[serde(rename = "dest")]
    pub destination: IpPrefix,
}

/// Multicast entry type: source-specific or any-source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum McastEntryType {
    #[serde(rename = "SG")]
    Sg,
    #[serde(rename = "XG")]
    Xg,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct L2mcEntry {
    pub switch_id: SaiObjectId,
    pub bv_id: SaiObjectId,
    #[serde(rename = "type")]
    pub entry_type: McastEntryType,
    pub destination: IpAddress,
    pub source: IpAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IpmcEntry {
    pub switch_id: SaiObjectId,
    pub vr_id: SaiObjectId,
    #[serde(rename = "type")]
    pub entry_type: McastEntryType,
    pub destination: IpAddress,
    pub source: IpAddress,
}

/// MPLS in-segment entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InsegEntry {
    pub switch_id: SaiObjectId,
    pub label: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NatType {
    #[serde(rename = "SAI_NAT_TYPE_NONE")]
    None,
    #[serde(rename = "SAI_NAT_TYPE_SOURCE_NAT")]
    Source,
    #[serde(rename = "SAI_NAT_TYPE_DESTINATION_NAT")]
    Destination,
    #[serde(rename = "SAI_NAT_TYPE_HAIRPIN")]
    Hairpin,
    #[serde(rename = "SAI_NAT_TYPE_DOUBLE_NAT")]
    DoubleNat,
    #[serde(rename = "SAI_NAT_TYPE_DESTINATION_NAT_POOL")]
    DestinationPool,
}

/// NAT match key fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NatKey {
    pub src_ip: Ipv4Address,
    pub dst_ip: Ipv4Address,
    pub proto: u8,
    pub l4_src_port: u16,
    pub l4_dst_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NatEntry {
    pub switch_id: SaiObjectId,
    #[serde(rename = "vr")]
    pub vr_id: SaiObjectId,
    pub nat_type: NatType,
    #[serde(flatten)]
    pub key: NatKey,
}

/// A handle-valued field embedded in an entry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOidMember {
    pub name: &'static str,
    pub oid: SaiObjectId,
    pub allowed_object_types: &'static [SaiObjectType],
    pub allow_null: bool,
}

/// Composite key of a non-object-id object.
///
/// Serializes as the bare key fields of the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SaiEntry {
    Fdb(FdbEntry),
    McastFdb(McastFdbEntry),
    Neighbor(NeighborEntry),
    Route(RouteEntry),
    L2mc(L2mcEntry),
    Ipmc(IpmcEntry),
    Inseg(InsegEntry),
    Nat(NatEntry),
}

impl SaiEntry {
    pub fn object_type(&self) -> SaiObjectType {
        match self {
            SaiEntry::Fdb(_) => SaiObjectType::FdbEntry,
            SaiEntry::McastFdb(_) => SaiObjectType::McastFdbEntry,
            SaiEntry::Neighbor(_) => SaiObjectType::NeighborEntry,
            SaiEntry::Route(_) => SaiObjectType::RouteEntry,
            SaiEntry::L2mc(_) => SaiObjectType::L2mcEntry,
            SaiEntry::Ipmc(_) => SaiObjectType::IpmcEntry,
            SaiEntry::Inseg(_) => SaiObjectType::InsegEntry,
            SaiEntry::Nat(_) => SaiObjectType::NatEntry,
        }
    }

    pub fn switch_id(&self) -> SaiObjectId {
        match self {
            SaiEntry::Fdb(e) => e.switch_id,
            SaiEntry::McastFdb(e) => e.switch_id,
            SaiEntry::Neighbor(e) => e.switch_id,
            SaiEntry::Route(e) => e.switch_id,
            SaiEntry::L2mc(e) => e.switch_id,
            SaiEntry::Ipmc(e) => e.switch_id,
            SaiEntry::Inseg(e) => e.switch_id,
            SaiEntry::Nat(e) => e.switch_id,
        }
    }

    /// The handle field a live entry hangs off, other than the switch.
    ///
    /// It must be non-null, of one of the listed types and exist before the
    /// entry can be created or addressed.
    pub fn anchor(&self) -> Option<EntryOidMember> {
        let member = |name, oid, allowed| EntryOidMember {
            name,
            oid,
            allowed_object_types: allowed,
            allow_null: false,
        };

        match self {
            SaiEntry::Fdb(_) | SaiEntry::Inseg(_) => None,
            SaiEntry::McastFdb(e) => Some(member("bv_id", e.bv_id, BRIDGE_OR_VLAN)),
            SaiEntry::Neighbor(e) => Some(member("rif_id", e.rif_id, ROUTER_INTERFACE)),
            SaiEntry::Route(e) => Some(member("vr_id", e.vr_id, VIRTUAL_ROUTER)),
            SaiEntry::L2mc(e) => Some(member("bv_id", e.bv_id, BRIDGE_OR_VLAN)),
            SaiEntry::Ipmc(e) => Some(member("vr_id", e.vr_id, VIRTUAL_ROUTER)),
            SaiEntry::Nat(e) => Some(member("vr_id", e.vr_id, VIRTUAL_ROUTER)),
        }
    }

    /// Every handle-valued field of the key, switch first.
    ///
    /// These are the fields whose referents gain a reference while the entry
    /// lives.
    pub fn oid_members(&self) -> Vec<EntryOidMember> {
        let mut members = vec![EntryOidMember {
            name: "switch_id",
            oid: self.switch_id(),
            allowed_object_types: SWITCH,
            allow_null: false,
        }];

        match self {
            // FDB entries learned before a bridge/vlan is known carry a null bv_id.
            SaiEntry::Fdb(e) => members.push(EntryOidMember {
                name: "bv_id",
                oid: e.bv_id,
                allowed_object_types: BRIDGE_OR_VLAN,
                allow_null: true,
            }),
            _ => members.extend(self.anchor()),
        }

        members
    }
}

/// JSON object of the key fields with names in sorted order.
impl fmt::Display for SaiEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Value's map is ordered, which gives the sorted field names.
        let value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", value)
    }
}

/// Identity of any SAI object: a typed handle or an entry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Oid {
        object_type: SaiObjectType,
        oid: SaiObjectId,
    },
    Entry(SaiEntry),
}

impl MetaKey {
    pub fn oid(object_type: SaiObjectType, oid: SaiObjectId) -> Self {
        MetaKey::Oid { object_type, oid }
    }

    pub fn object_type(&self) -> SaiObjectType {
        match self {
            MetaKey::Oid { object_type, .. } => *object_type,
            MetaKey::Entry(entry) => entry.object_type(),
        }
    }

    pub fn entry(&self) -> Option<&SaiEntry> {
        match self {
            MetaKey::Entry(entry) => Some(entry),
            MetaKey::Oid { .. } => None,
        }
    }
}

impl From<SaiEntry> for MetaKey {
    fn from(entry: SaiEntry) -> Self {
        MetaKey::Entry(entry)
    }
}

/// Canonical string form, used as the primary key of the object collection.
impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaKey::Oid { object_type, oid } => write!(f, "{}:{}", object_type, oid),
            MetaKey::Entry(entry) => write!(f, "{}:{}", entry.object_type(), entry),
        }
    }
}
