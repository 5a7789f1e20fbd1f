//! Schema fixture and handle decoder shared by the unit and integration
//! tests.
//!
//! Only depends on `sonic_sai` so that `tests/` can include it by path.

#![allow(dead_code)]

use sonic_sai::{
    AttrFlags, AttrMetadata, AttrValue, AttrValueType, ConditionValue, EnumMetadata,
    MetadataRegistry, ObjectIdQuery, SaiObjectId, SaiObjectType,
};
use sonic_sai::{AclDataType, SaiAttrId};
use std::sync::Arc;

const MANDATORY_CREATE_ONLY: AttrFlags = AttrFlags::MANDATORY_ON_CREATE.union(AttrFlags::CREATE_ONLY);

/// Packs switch index, object type and a per-type index the way the
/// virtual-id allocator does.
pub fn make_oid(switch_index: u8, object_type: SaiObjectType, index: u64) -> SaiObjectId {
    SaiObjectId::from_raw(
        (u64::from(switch_index) << 56) | ((object_type as u64) << 48) | (index & 0xffff_ffff_ffff),
    )
}

pub fn switch_oid(switch_index: u8) -> SaiObjectId {
    make_oid(switch_index, SaiObjectType::Switch, 0)
}

/// Decodes handles built by [`make_oid`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MockOidQuery;

impl ObjectIdQuery for MockOidQuery {
    fn object_type_query(&self, oid: SaiObjectId) -> SaiObjectType {
        if oid.is_null() {
            return SaiObjectType::Null;
        }
        let raw = (oid.as_raw() >> 48) & 0xff;
        i32::try_from(raw)
            .ok()
            .and_then(SaiObjectType::from_raw)
            .unwrap_or(SaiObjectType::Null)
    }

    fn switch_id_query(&self, oid: SaiObjectId) -> SaiObjectId {
        if self.object_type_query(oid) == SaiObjectType::Null {
            return SaiObjectId::NULL;
        }
        match u8::try_from(oid.as_raw() >> 56) {
            Ok(index) if index > 0 => switch_oid(index),
            _ => SaiObjectId::NULL,
        }
    }
}

pub mod switch {
    use super::SaiAttrId;
    pub const PORT_LIST: SaiAttrId = 0;
    pub const INIT_SWITCH: SaiAttrId = 1;
    pub const SRC_MAC_ADDRESS: SaiAttrId = 2;
    pub const FDB_EVENT_NOTIFY: SaiAttrId = 3;
    pub const DEFAULT_VIRTUAL_ROUTER_ID: SaiAttrId = 4;
    pub const NUMBER_OF_ACTIVE_PORTS: SaiAttrId = 5;
}

pub mod port {
    use super::SaiAttrId;
    pub const HW_LANE_LIST: SaiAttrId = 0;
    pub const SPEED: SaiAttrId = 1;
    pub const ADMIN_STATE: SaiAttrId = 2;
    pub const OPER_STATUS: SaiAttrId = 3;
    pub const QOS_QUEUE_LIST: SaiAttrId = 4;
    pub const QOS_SCHEDULER_GROUP_LIST: SaiAttrId = 5;
    pub const INGRESS_PRIORITY_GROUP_LIST: SaiAttrId = 6;
    pub const FEC_MODE: SaiAttrId = 7;
    pub const INGRESS_ACL: SaiAttrId = 8;
    pub const PORT_VLAN_ID: SaiAttrId = 9;
    pub const SUPPORTED_FEC_MODE: SaiAttrId = 10;
    pub const INGRESS_MIRROR_SESSION: SaiAttrId = 11;

    pub const STAT_IF_IN_OCTETS: i32 = 0;
    pub const STAT_IF_IN_UCAST_PKTS: i32 = 1;
    pub const STAT_IF_OUT_OCTETS: i32 = 2;
}

pub mod queue {
    use super::SaiAttrId;
    pub const TYPE: SaiAttrId = 0;
    pub const PORT: SaiAttrId = 1;
    pub const INDEX: SaiAttrId = 2;
    pub const WRED_PROFILE_ID: SaiAttrId = 3;
}

pub mod scheduler_group {
    use super::SaiAttrId;
    pub const SCHEDULER_PROFILE_ID: SaiAttrId = 0;
}

pub mod ingress_priority_group {
    use super::SaiAttrId;
    pub const BUFFER_PROFILE: SaiAttrId = 0;
}

pub mod bridge {
    use super::SaiAttrId;
    pub const TYPE: SaiAttrId = 0;

    pub const TYPE_1Q: i32 = 0;
    pub const TYPE_1D: i32 = 1;
}

pub mod bridge_port {
    use super::SaiAttrId;
    pub const TYPE: SaiAttrId = 0;
    pub const PORT_ID: SaiAttrId = 1;
    pub const VLAN_ID: SaiAttrId = 2;
    pub const BRIDGE_ID: SaiAttrId = 3;
    pub const ADMIN_STATE: SaiAttrId = 4;

    pub const TYPE_PORT: i32 = 0;
    pub const TYPE_SUB_PORT: i32 = 1;
    pub const TYPE_1Q_ROUTER: i32 = 2;
}

pub mod vlan {
    use super::SaiAttrId;
    pub const VLAN_ID: SaiAttrId = 0;
    pub const MEMBER_LIST: SaiAttrId = 1;
}

pub mod virtual_router {
    use super::SaiAttrId;
    pub const ADMIN_V4_STATE: SaiAttrId = 0;
    pub const SRC_MAC_ADDRESS: SaiAttrId = 1;
}

pub mod router_interface {
    use super::SaiAttrId;
    pub const VIRTUAL_ROUTER_ID: SaiAttrId = 0;
    pub const TYPE: SaiAttrId = 1;
    pub const PORT_ID: SaiAttrId = 2;
    pub const VLAN_ID: SaiAttrId = 3;
    pub const MTU: SaiAttrId = 4;

    pub const TYPE_PORT: i32 = 0;
    pub const TYPE_VLAN: i32 = 1;
    pub const TYPE_LOOPBACK: i32 = 2;
}

pub mod next_hop {
    use super::SaiAttrId;
    pub const TYPE: SaiAttrId = 0;
    pub const IP: SaiAttrId = 1;
    pub const ROUTER_INTERFACE_ID: SaiAttrId = 2;

    pub const TYPE_IP: i32 = 0;
}

pub mod acl_table {
    use super::SaiAttrId;
    pub const ACL_STAGE: SaiAttrId = 0;
    pub const FIELD_SRC_IP: SaiAttrId = 1;
    pub const ACL_BIND_POINT_TYPE_LIST: SaiAttrId = 2;
}

pub mod acl_entry {
    use super::SaiAttrId;
    pub const TABLE_ID: SaiAttrId = 0;
    pub const PRIORITY: SaiAttrId = 1;
    pub const FIELD_SRC_IP: SaiAttrId = 2;
    pub const FIELD_IN_PORTS: SaiAttrId = 3;
    pub const ACTION_REDIRECT: SaiAttrId = 4;
    pub const ACTION_PACKET_ACTION: SaiAttrId = 5;
}

pub mod hostif {
    use super::SaiAttrId;
    pub const TYPE: SaiAttrId = 0;
    pub const OBJ_ID: SaiAttrId = 1;
    pub const NAME: SaiAttrId = 2;
    pub const OPER_STATUS: SaiAttrId = 3;

    pub const TYPE_NETDEV: i32 = 0;
    pub const TYPE_FD: i32 = 1;
}

pub mod route_entry {
    use super::SaiAttrId;
    pub const PACKET_ACTION: SaiAttrId = 0;
    pub const NEXT_HOP_ID: SaiAttrId = 1;
}

pub mod neighbor_entry {
    use super::SaiAttrId;
    pub const DST_MAC_ADDRESS: SaiAttrId = 0;
    pub const PACKET_ACTION: SaiAttrId = 1;
}

pub mod fdb_entry {
    use super::SaiAttrId;
    pub const TYPE: SaiAttrId = 0;
    pub const PACKET_ACTION: SaiAttrId = 1;
    pub const BRIDGE_PORT_ID: SaiAttrId = 3;
}

pub mod fdb_flush {
    use super::SaiAttrId;
    pub const BRIDGE_PORT_ID: SaiAttrId = 0;
    pub const BV_ID: SaiAttrId = 1;
    pub const ENTRY_TYPE: SaiAttrId = 2;
}

pub const PACKET_ACTION_DROP: i32 = 0;
pub const PACKET_ACTION_FORWARD: i32 = 1;

pub const FEC_NONE: i32 = 0;
pub const FEC_RS: i32 = 1;
pub const FEC_FC: i32 = 2;

fn enum_md(name: &str, values: &[(i32, &str)]) -> Arc<EnumMetadata> {
    Arc::new(EnumMetadata::new(name, values))
}

fn md(ot: SaiObjectType, id: SaiAttrId, name: &str, vt: AttrValueType) -> AttrMetadata {
    AttrMetadata::new(ot, id, name, vt)
}

/// Builds the representative schema used across the test suites.
pub fn schema() -> Arc<MetadataRegistry> {
    use SaiObjectType as Ot;

    let packet_action = enum_md(
        "sai_packet_action_t",
        &[
            (PACKET_ACTION_DROP, "SAI_PACKET_ACTION_DROP"),
            (PACKET_ACTION_FORWARD, "SAI_PACKET_ACTION_FORWARD"),
        ],
    );
    let fec_mode = enum_md(
        "sai_port_fec_mode_t",
        &[
            (FEC_NONE, "SAI_PORT_FEC_MODE_NONE"),
            (FEC_RS, "SAI_PORT_FEC_MODE_RS"),
            (FEC_FC, "SAI_PORT_FEC_MODE_FC"),
        ],
    );
    let port_oper_status = enum_md(
        "sai_port_oper_status_t",
        &[
            (0, "SAI_PORT_OPER_STATUS_UNKNOWN"),
            (1, "SAI_PORT_OPER_STATUS_UP"),
            (2, "SAI_PORT_OPER_STATUS_DOWN"),
        ],
    );
    let fdb_entry_type = enum_md(
        "sai_fdb_entry_type_t",
        &[(0, "SAI_FDB_ENTRY_TYPE_DYNAMIC"), (1, "SAI_FDB_ENTRY_TYPE_STATIC")],
    );
    let fdb_flush_entry_type = enum_md(
        "sai_fdb_flush_entry_type_t",
        &[
            (0, "SAI_FDB_FLUSH_ENTRY_TYPE_DYNAMIC"),
            (1, "SAI_FDB_FLUSH_ENTRY_TYPE_STATIC"),
            (2, "SAI_FDB_FLUSH_ENTRY_TYPE_ALL"),
        ],
    );
    let bind_point = enum_md(
        "sai_acl_bind_point_type_t",
        &[
            (0, "SAI_ACL_BIND_POINT_TYPE_PORT"),
            (1, "SAI_ACL_BIND_POINT_TYPE_LAG"),
            (2, "SAI_ACL_BIND_POINT_TYPE_VLAN"),
        ],
    );

    let registry = MetadataRegistry::builder()
        // switch
        .attr(
            md(Ot::Switch, switch::PORT_LIST, "SAI_SWITCH_ATTR_PORT_LIST", AttrValueType::ObjectList)
                .with_flags(AttrFlags::READ_ONLY)
                .with_allowed_types(&[Ot::Port]),
        )
        .attr(
            md(Ot::Switch, switch::INIT_SWITCH, "SAI_SWITCH_ATTR_INIT_SWITCH", AttrValueType::Bool)
                .with_flags(MANDATORY_CREATE_ONLY),
        )
        .attr(
            md(Ot::Switch, switch::SRC_MAC_ADDRESS, "SAI_SWITCH_ATTR_SRC_MAC_ADDRESS", AttrValueType::Mac)
                .with_flags(AttrFlags::CREATE_AND_SET),
        )
        .attr(
            md(Ot::Switch, switch::FDB_EVENT_NOTIFY, "SAI_SWITCH_ATTR_FDB_EVENT_NOTIFY", AttrValueType::Pointer)
                .with_flags(AttrFlags::CREATE_AND_SET),
        )
        .attr(
            md(
                Ot::Switch,
                switch::DEFAULT_VIRTUAL_ROUTER_ID,
                "SAI_SWITCH_ATTR_DEFAULT_VIRTUAL_ROUTER_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::READ_ONLY)
            .with_allowed_types(&[Ot::VirtualRouter]),
        )
        .attr(
            md(
                Ot::Switch,
                switch::NUMBER_OF_ACTIVE_PORTS,
                "SAI_SWITCH_ATTR_NUMBER_OF_ACTIVE_PORTS",
                AttrValueType::U32,
            )
            .with_flags(AttrFlags::READ_ONLY),
        )
        // port
        .attr(
            md(Ot::Port, port::HW_LANE_LIST, "SAI_PORT_ATTR_HW_LANE_LIST", AttrValueType::U32List)
                .with_flags(MANDATORY_CREATE_ONLY | AttrFlags::KEY),
        )
        .attr(
            md(Ot::Port, port::SPEED, "SAI_PORT_ATTR_SPEED", AttrValueType::U32)
                .with_flags(AttrFlags::MANDATORY_ON_CREATE | AttrFlags::CREATE_AND_SET),
        )
        .attr(
            md(Ot::Port, port::ADMIN_STATE, "SAI_PORT_ATTR_ADMIN_STATE", AttrValueType::Bool)
                .with_flags(AttrFlags::CREATE_AND_SET)
                .with_default(AttrValue::Bool(false)),
        )
        .attr(
            md(Ot::Port, port::OPER_STATUS, "SAI_PORT_ATTR_OPER_STATUS", AttrValueType::S32)
                .with_flags(AttrFlags::READ_ONLY)
                .with_enum(port_oper_status),
        )
        .attr(
            md(Ot::Port, port::QOS_QUEUE_LIST, "SAI_PORT_ATTR_QOS_QUEUE_LIST", AttrValueType::ObjectList)
                .with_flags(AttrFlags::READ_ONLY)
                .with_allowed_types(&[Ot::Queue]),
        )
        .attr(
            md(
                Ot::Port,
                port::QOS_SCHEDULER_GROUP_LIST,
                "SAI_PORT_ATTR_QOS_SCHEDULER_GROUP_LIST",
                AttrValueType::ObjectList,
            )
            .with_flags(AttrFlags::READ_ONLY)
            .with_allowed_types(&[Ot::SchedulerGroup]),
        )
        .attr(
            md(
                Ot::Port,
                port::INGRESS_PRIORITY_GROUP_LIST,
                "SAI_PORT_ATTR_INGRESS_PRIORITY_GROUP_LIST",
                AttrValueType::ObjectList,
            )
            .with_flags(AttrFlags::READ_ONLY)
            .with_allowed_types(&[Ot::IngressPriorityGroup]),
        )
        .attr(
            md(Ot::Port, port::FEC_MODE, "SAI_PORT_ATTR_FEC_MODE", AttrValueType::S32)
                .with_flags(AttrFlags::CREATE_AND_SET)
                .with_enum(fec_mode.clone())
                .with_default(AttrValue::S32(FEC_NONE)),
        )
        .attr(
            md(Ot::Port, port::INGRESS_ACL, "SAI_PORT_ATTR_INGRESS_ACL", AttrValueType::ObjectId)
                .with_flags(AttrFlags::CREATE_AND_SET)
                .with_allowed_types(&[Ot::AclTable, Ot::AclTableGroup])
                .with_allow_null()
                .with_default(AttrValue::Oid(SaiObjectId::NULL)),
        )
        .attr(
            md(Ot::Port, port::PORT_VLAN_ID, "SAI_PORT_ATTR_PORT_VLAN_ID", AttrValueType::U16)
                .with_flags(AttrFlags::CREATE_AND_SET)
                .with_vlan()
                .with_default(AttrValue::U16(1)),
        )
        .attr(
            md(
                Ot::Port,
                port::SUPPORTED_FEC_MODE,
                "SAI_PORT_ATTR_SUPPORTED_FEC_MODE",
                AttrValueType::S32List,
            )
            .with_flags(AttrFlags::READ_ONLY)
            .with_enum_list(fec_mode),
        )
        .attr(
            md(
                Ot::Port,
                port::INGRESS_MIRROR_SESSION,
                "SAI_PORT_ATTR_INGRESS_MIRROR_SESSION",
                AttrValueType::ObjectList,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::MirrorSession]),
        )
        .stats(
            Ot::Port,
            enum_md(
                "sai_port_stat_t",
                &[
                    (port::STAT_IF_IN_OCTETS, "SAI_PORT_STAT_IF_IN_OCTETS"),
                    (port::STAT_IF_IN_UCAST_PKTS, "SAI_PORT_STAT_IF_IN_UCAST_PKTS"),
                    (port::STAT_IF_OUT_OCTETS, "SAI_PORT_STAT_IF_OUT_OCTETS"),
                ],
            ),
        )
        // queue
        .attr(
            md(Ot::Queue, queue::TYPE, "SAI_QUEUE_ATTR_TYPE", AttrValueType::S32)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_enum(enum_md(
                    "sai_queue_type_t",
                    &[
                        (0, "SAI_QUEUE_TYPE_ALL"),
                        (1, "SAI_QUEUE_TYPE_UNICAST"),
                        (2, "SAI_QUEUE_TYPE_MULTICAST"),
                    ],
                )),
        )
        .attr(
            md(Ot::Queue, queue::PORT, "SAI_QUEUE_ATTR_PORT", AttrValueType::ObjectId)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_allowed_types(&[Ot::Port]),
        )
        .attr(
            md(Ot::Queue, queue::INDEX, "SAI_QUEUE_ATTR_INDEX", AttrValueType::U8)
                .with_flags(MANDATORY_CREATE_ONLY),
        )
        .attr(
            md(Ot::Queue, queue::WRED_PROFILE_ID, "SAI_QUEUE_ATTR_WRED_PROFILE_ID", AttrValueType::ObjectId)
                .with_flags(AttrFlags::CREATE_AND_SET)
                .with_allowed_types(&[Ot::Wred])
                .with_allow_null()
                .with_default(AttrValue::Oid(SaiObjectId::NULL)),
        )
        .stats(
            Ot::Queue,
            enum_md(
                "sai_queue_stat_t",
                &[(0, "SAI_QUEUE_STAT_PACKETS"), (1, "SAI_QUEUE_STAT_BYTES")],
            ),
        )
        // scheduler group
        .attr(
            md(
                Ot::SchedulerGroup,
                scheduler_group::SCHEDULER_PROFILE_ID,
                "SAI_SCHEDULER_GROUP_ATTR_SCHEDULER_PROFILE_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::Scheduler])
            .with_allow_null(),
        )
        // ingress priority group
        .attr(
            md(
                Ot::IngressPriorityGroup,
                ingress_priority_group::BUFFER_PROFILE,
                "SAI_INGRESS_PRIORITY_GROUP_ATTR_BUFFER_PROFILE",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::BufferProfile])
            .with_allow_null(),
        )
        // bridge
        .attr(
            md(Ot::Bridge, bridge::TYPE, "SAI_BRIDGE_ATTR_TYPE", AttrValueType::S32)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_enum(enum_md(
                    "sai_bridge_type_t",
                    &[
                        (bridge::TYPE_1Q, "SAI_BRIDGE_TYPE_1Q"),
                        (bridge::TYPE_1D, "SAI_BRIDGE_TYPE_1D"),
                    ],
                )),
        )
        // bridge port
        .attr(
            md(Ot::BridgePort, bridge_port::TYPE, "SAI_BRIDGE_PORT_ATTR_TYPE", AttrValueType::S32)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_enum(enum_md(
                    "sai_bridge_port_type_t",
                    &[
                        (bridge_port::TYPE_PORT, "SAI_BRIDGE_PORT_TYPE_PORT"),
                        (bridge_port::TYPE_SUB_PORT, "SAI_BRIDGE_PORT_TYPE_SUB_PORT"),
                        (bridge_port::TYPE_1Q_ROUTER, "SAI_BRIDGE_PORT_TYPE_1Q_ROUTER"),
                    ],
                )),
        )
        .attr(
            md(Ot::BridgePort, bridge_port::PORT_ID, "SAI_BRIDGE_PORT_ATTR_PORT_ID", AttrValueType::ObjectId)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_allowed_types(&[Ot::Port, Ot::Lag])
                .with_condition(bridge_port::TYPE, ConditionValue::S32(bridge_port::TYPE_PORT))
                .with_condition(bridge_port::TYPE, ConditionValue::S32(bridge_port::TYPE_SUB_PORT)),
        )
        .attr(
            md(Ot::BridgePort, bridge_port::VLAN_ID, "SAI_BRIDGE_PORT_ATTR_VLAN_ID", AttrValueType::U16)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_vlan()
                .with_condition(bridge_port::TYPE, ConditionValue::S32(bridge_port::TYPE_SUB_PORT)),
        )
        .attr(
            md(
                Ot::BridgePort,
                bridge_port::BRIDGE_ID,
                "SAI_BRIDGE_PORT_ATTR_BRIDGE_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::Bridge])
            .with_allow_null()
            .with_default(AttrValue::Oid(SaiObjectId::NULL)),
        )
        .attr(
            md(
                Ot::BridgePort,
                bridge_port::ADMIN_STATE,
                "SAI_BRIDGE_PORT_ATTR_ADMIN_STATE",
                AttrValueType::Bool,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_default(AttrValue::Bool(false)),
        )
        // vlan
        .attr(
            md(Ot::Vlan, vlan::VLAN_ID, "SAI_VLAN_ATTR_VLAN_ID", AttrValueType::U16)
                .with_flags(MANDATORY_CREATE_ONLY | AttrFlags::KEY)
                .with_vlan(),
        )
        .attr(
            md(Ot::Vlan, vlan::MEMBER_LIST, "SAI_VLAN_ATTR_MEMBER_LIST", AttrValueType::ObjectList)
                .with_flags(AttrFlags::READ_ONLY)
                .with_allowed_types(&[Ot::VlanMember]),
        )
        // virtual router
        .attr(
            md(
                Ot::VirtualRouter,
                virtual_router::ADMIN_V4_STATE,
                "SAI_VIRTUAL_ROUTER_ATTR_ADMIN_V4_STATE",
                AttrValueType::Bool,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_default(AttrValue::Bool(true)),
        )
        .attr(
            md(
                Ot::VirtualRouter,
                virtual_router::SRC_MAC_ADDRESS,
                "SAI_VIRTUAL_ROUTER_ATTR_SRC_MAC_ADDRESS",
                AttrValueType::Mac,
            )
            .with_flags(AttrFlags::CREATE_AND_SET),
        )
        // router interface
        .attr(
            md(
                Ot::RouterInterface,
                router_interface::VIRTUAL_ROUTER_ID,
                "SAI_ROUTER_INTERFACE_ATTR_VIRTUAL_ROUTER_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(MANDATORY_CREATE_ONLY)
            .with_allowed_types(&[Ot::VirtualRouter]),
        )
        .attr(
            md(
                Ot::RouterInterface,
                router_interface::TYPE,
                "SAI_ROUTER_INTERFACE_ATTR_TYPE",
                AttrValueType::S32,
            )
            .with_flags(MANDATORY_CREATE_ONLY)
            .with_enum(enum_md(
                "sai_router_interface_type_t",
                &[
                    (router_interface::TYPE_PORT, "SAI_ROUTER_INTERFACE_TYPE_PORT"),
                    (router_interface::TYPE_VLAN, "SAI_ROUTER_INTERFACE_TYPE_VLAN"),
                    (router_interface::TYPE_LOOPBACK, "SAI_ROUTER_INTERFACE_TYPE_LOOPBACK"),
                ],
            )),
        )
        .attr(
            md(
                Ot::RouterInterface,
                router_interface::PORT_ID,
                "SAI_ROUTER_INTERFACE_ATTR_PORT_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(MANDATORY_CREATE_ONLY)
            .with_allowed_types(&[Ot::Port, Ot::Lag])
            .with_condition(
                router_interface::TYPE,
                ConditionValue::S32(router_interface::TYPE_PORT),
            ),
        )
        .attr(
            md(
                Ot::RouterInterface,
                router_interface::VLAN_ID,
                "SAI_ROUTER_INTERFACE_ATTR_VLAN_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(MANDATORY_CREATE_ONLY)
            .with_allowed_types(&[Ot::Vlan])
            .with_condition(
                router_interface::TYPE,
                ConditionValue::S32(router_interface::TYPE_VLAN),
            ),
        )
        .attr(
            md(
                Ot::RouterInterface,
                router_interface::MTU,
                "SAI_ROUTER_INTERFACE_ATTR_MTU",
                AttrValueType::U32,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_default(AttrValue::U32(1514)),
        )
        // next hop
        .attr(
            md(Ot::NextHop, next_hop::TYPE, "SAI_NEXT_HOP_ATTR_TYPE", AttrValueType::S32)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_enum(enum_md(
                    "sai_next_hop_type_t",
                    &[(next_hop::TYPE_IP, "SAI_NEXT_HOP_TYPE_IP"), (1, "SAI_NEXT_HOP_TYPE_MPLS")],
                )),
        )
        .attr(
            md(Ot::NextHop, next_hop::IP, "SAI_NEXT_HOP_ATTR_IP", AttrValueType::IpAddress)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_condition(next_hop::TYPE, ConditionValue::S32(next_hop::TYPE_IP)),
        )
        .attr(
            md(
                Ot::NextHop,
                next_hop::ROUTER_INTERFACE_ID,
                "SAI_NEXT_HOP_ATTR_ROUTER_INTERFACE_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(MANDATORY_CREATE_ONLY)
            .with_allowed_types(&[Ot::RouterInterface])
            .with_condition(next_hop::TYPE, ConditionValue::S32(next_hop::TYPE_IP)),
        )
        // acl table
        .attr(
            md(Ot::AclTable, acl_table::ACL_STAGE, "SAI_ACL_TABLE_ATTR_ACL_STAGE", AttrValueType::S32)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_enum(enum_md(
                    "sai_acl_stage_t",
                    &[(0, "SAI_ACL_STAGE_INGRESS"), (1, "SAI_ACL_STAGE_EGRESS")],
                )),
        )
        .attr(
            md(Ot::AclTable, acl_table::FIELD_SRC_IP, "SAI_ACL_TABLE_ATTR_FIELD_SRC_IP", AttrValueType::Bool)
                .with_flags(AttrFlags::CREATE_ONLY)
                .with_default(AttrValue::Bool(false)),
        )
        .attr(
            md(
                Ot::AclTable,
                acl_table::ACL_BIND_POINT_TYPE_LIST,
                "SAI_ACL_TABLE_ATTR_ACL_BIND_POINT_TYPE_LIST",
                AttrValueType::S32List,
            )
            .with_flags(AttrFlags::CREATE_ONLY)
            .with_enum_list(bind_point),
        )
        // acl entry
        .attr(
            md(Ot::AclEntry, acl_entry::TABLE_ID, "SAI_ACL_ENTRY_ATTR_TABLE_ID", AttrValueType::ObjectId)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_allowed_types(&[Ot::AclTable]),
        )
        .attr(
            md(Ot::AclEntry, acl_entry::PRIORITY, "SAI_ACL_ENTRY_ATTR_PRIORITY", AttrValueType::U32)
                .with_flags(AttrFlags::CREATE_AND_SET),
        )
        .attr(
            md(
                Ot::AclEntry,
                acl_entry::FIELD_SRC_IP,
                "SAI_ACL_ENTRY_ATTR_FIELD_SRC_IP",
                AttrValueType::AclField(AclDataType::Ipv4),
            )
            .with_flags(AttrFlags::CREATE_AND_SET),
        )
        .attr(
            md(
                Ot::AclEntry,
                acl_entry::FIELD_IN_PORTS,
                "SAI_ACL_ENTRY_ATTR_FIELD_IN_PORTS",
                AttrValueType::AclField(AclDataType::ObjectList),
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::Port]),
        )
        .attr(
            md(
                Ot::AclEntry,
                acl_entry::ACTION_REDIRECT,
                "SAI_ACL_ENTRY_ATTR_ACTION_REDIRECT",
                AttrValueType::AclAction(AclDataType::ObjectId),
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::Port, Ot::NextHop]),
        )
        .attr(
            md(
                Ot::AclEntry,
                acl_entry::ACTION_PACKET_ACTION,
                "SAI_ACL_ENTRY_ATTR_ACTION_PACKET_ACTION",
                AttrValueType::AclAction(AclDataType::S32),
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_enum(packet_action.clone()),
        )
        // host interface
        .attr(
            md(Ot::Hostif, hostif::TYPE, "SAI_HOSTIF_ATTR_TYPE", AttrValueType::S32)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_enum(enum_md(
                    "sai_hostif_type_t",
                    &[
                        (hostif::TYPE_NETDEV, "SAI_HOSTIF_TYPE_NETDEV"),
                        (hostif::TYPE_FD, "SAI_HOSTIF_TYPE_FD"),
                    ],
                )),
        )
        .attr(
            md(Ot::Hostif, hostif::OBJ_ID, "SAI_HOSTIF_ATTR_OBJ_ID", AttrValueType::ObjectId)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_allowed_types(&[Ot::Port, Ot::Lag, Ot::Vlan])
                .with_condition(hostif::TYPE, ConditionValue::S32(hostif::TYPE_NETDEV)),
        )
        .attr(
            md(Ot::Hostif, hostif::NAME, "SAI_HOSTIF_ATTR_NAME", AttrValueType::Chardata)
                .with_flags(MANDATORY_CREATE_ONLY)
                .with_condition(hostif::TYPE, ConditionValue::S32(hostif::TYPE_NETDEV)),
        )
        .attr(
            md(Ot::Hostif, hostif::OPER_STATUS, "SAI_HOSTIF_ATTR_OPER_STATUS", AttrValueType::Bool)
                .with_flags(AttrFlags::CREATE_AND_SET)
                .with_default(AttrValue::Bool(false)),
        )
        // lag
        .attr(
            md(Ot::Lag, 0, "SAI_LAG_ATTR_PORT_LIST", AttrValueType::ObjectList)
                .with_flags(AttrFlags::READ_ONLY)
                .with_allowed_types(&[Ot::Port]),
        )
        // route entry
        .attr(
            md(
                Ot::RouteEntry,
                route_entry::PACKET_ACTION,
                "SAI_ROUTE_ENTRY_ATTR_PACKET_ACTION",
                AttrValueType::S32,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_enum(packet_action.clone())
            .with_default(AttrValue::S32(PACKET_ACTION_FORWARD)),
        )
        .attr(
            md(
                Ot::RouteEntry,
                route_entry::NEXT_HOP_ID,
                "SAI_ROUTE_ENTRY_ATTR_NEXT_HOP_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::NextHop, Ot::NextHopGroup, Ot::RouterInterface, Ot::Port])
            .with_allow_null()
            .with_default(AttrValue::Oid(SaiObjectId::NULL)),
        )
        // neighbor entry
        .attr(
            md(
                Ot::NeighborEntry,
                neighbor_entry::DST_MAC_ADDRESS,
                "SAI_NEIGHBOR_ENTRY_ATTR_DST_MAC_ADDRESS",
                AttrValueType::Mac,
            )
            .with_flags(AttrFlags::MANDATORY_ON_CREATE | AttrFlags::CREATE_AND_SET),
        )
        .attr(
            md(
                Ot::NeighborEntry,
                neighbor_entry::PACKET_ACTION,
                "SAI_NEIGHBOR_ENTRY_ATTR_PACKET_ACTION",
                AttrValueType::S32,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_enum(packet_action.clone())
            .with_default(AttrValue::S32(PACKET_ACTION_FORWARD)),
        )
        // fdb entry
        .attr(
            md(Ot::FdbEntry, fdb_entry::TYPE, "SAI_FDB_ENTRY_ATTR_TYPE", AttrValueType::S32)
                .with_flags(AttrFlags::MANDATORY_ON_CREATE | AttrFlags::CREATE_AND_SET)
                .with_enum(fdb_entry_type),
        )
        .attr(
            md(
                Ot::FdbEntry,
                fdb_entry::PACKET_ACTION,
                "SAI_FDB_ENTRY_ATTR_PACKET_ACTION",
                AttrValueType::S32,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_enum(packet_action)
            .with_default(AttrValue::S32(PACKET_ACTION_FORWARD)),
        )
        .attr(
            md(
                Ot::FdbEntry,
                fdb_entry::BRIDGE_PORT_ID,
                "SAI_FDB_ENTRY_ATTR_BRIDGE_PORT_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::CREATE_AND_SET)
            .with_allowed_types(&[Ot::BridgePort])
            .with_allow_null()
            .with_default(AttrValue::Oid(SaiObjectId::NULL)),
        )
        // fdb flush
        .attr(
            md(
                Ot::FdbFlush,
                fdb_flush::BRIDGE_PORT_ID,
                "SAI_FDB_FLUSH_ATTR_BRIDGE_PORT_ID",
                AttrValueType::ObjectId,
            )
            .with_flags(AttrFlags::CREATE_ONLY)
            .with_allowed_types(&[Ot::BridgePort]),
        )
        .attr(
            md(Ot::FdbFlush, fdb_flush::BV_ID, "SAI_FDB_FLUSH_ATTR_BV_ID", AttrValueType::ObjectId)
                .with_flags(AttrFlags::CREATE_ONLY)
                .with_allowed_types(&[Ot::Bridge, Ot::Vlan]),
        )
        .attr(
            md(
                Ot::FdbFlush,
                fdb_flush::ENTRY_TYPE,
                "SAI_FDB_FLUSH_ATTR_ENTRY_TYPE",
                AttrValueType::S32,
            )
            .with_flags(AttrFlags::CREATE_ONLY)
            .with_enum(fdb_flush_entry_type)
            .with_default(AttrValue::S32(0)),
        )
        .object_type(Ot::Wred)
        .object_type(Ot::Scheduler)
        .object_type(Ot::BufferProfile)
        .object_type(Ot::NextHopGroup)
        .object_type(Ot::MirrorSession)
        .object_type(Ot::VlanMember)
        .build();

    match registry {
        Ok(registry) => Arc::new(registry),
        Err(e) => panic!("test schema is inconsistent: {}", e),
    }
}
