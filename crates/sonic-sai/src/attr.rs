//! SAI attribute values.
//!
//! [`AttrValue`] is the Rust counterpart of the `sai_attribute_value_t` union:
//! one variant per value shape. The schema ([`crate::metadata`]) says which
//! shape each attribute id must carry; [`AttrValue::value_type`] is what the
//! validator compares against it.

use crate::types::SaiObjectId;
use sonic_types::{IpAddress, IpPrefix, Ipv4Address, Ipv6Address, MacAddress};
use std::fmt;

/// Attribute id, unique within one object type.
pub type SaiAttrId = u32;

/// Opaque identifier of a registered notification callback.
///
/// Pointer-typed attributes (switch notification slots) carry this instead of
/// a raw function pointer. Zero means "no callback".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

/// Scalar or list payload shape of an ACL field or action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AclDataType {
    Bool,
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    Mac,
    Ipv4,
    Ipv6,
    ObjectId,
    ObjectList,
    U8List,
}

/// Declared shape of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrValueType {
    Bool,
    Chardata,
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    S64,
    Pointer,
    Mac,
    Ipv4,
    Ipv6,
    IpAddress,
    IpPrefix,
    ObjectId,
    ObjectList,
    U8List,
    S8List,
    U16List,
    S16List,
    U32List,
    S32List,
    U32Range,
    S32Range,
    VlanList,
    AclField(AclDataType),
    AclAction(AclDataType),
    AclCapability,
}

impl AttrValueType {
    /// Returns true if values of this shape may carry object handles.
    pub const fn is_oid_type(&self) -> bool {
        matches!(
            self,
            AttrValueType::ObjectId
                | AttrValueType::ObjectList
                | AttrValueType::AclField(AclDataType::ObjectId | AclDataType::ObjectList)
                | AttrValueType::AclAction(AclDataType::ObjectId | AclDataType::ObjectList)
        )
    }
}

/// Payload of an ACL field or action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AclData {
    Bool(bool),
    U8(u8),
    S8(i8),
    U16(u16),
    S16(i16),
    U32(u32),
    S32(i32),
    U64(u64),
    Mac(MacAddress),
    Ipv4(Ipv4Address),
    Ipv6(Ipv6Address),
    Oid(SaiObjectId),
    ObjList(Vec<SaiObjectId>),
    U8List(Vec<u8>),
}

impl AclData {
    pub fn data_type(&self) -> AclDataType {
        match self {
            AclData::Bool(_) => AclDataType::Bool,
            AclData::U8(_) => AclDataType::U8,
            AclData::S8(_) => AclDataType::S8,
            AclData::U16(_) => AclDataType::U16,
            AclData::S16(_) => AclDataType::S16,
            AclData::U32(_) => AclDataType::U32,
            AclData::S32(_) => AclDataType::S32,
            AclData::U64(_) => AclDataType::U64,
            AclData::Mac(_) => AclDataType::Mac,
            AclData::Ipv4(_) => AclDataType::Ipv4,
            AclData::Ipv6(_) => AclDataType::Ipv6,
            AclData::Oid(_) => AclDataType::ObjectId,
            AclData::ObjList(_) => AclDataType::ObjectList,
            AclData::U8List(_) => AclDataType::U8List,
        }
    }

    fn oids(&self) -> &[SaiObjectId] {
        match self {
            AclData::Oid(oid) => std::slice::from_ref(oid),
            AclData::ObjList(list) => list,
            _ => &[],
        }
    }
}

/// ACL match field: enable flag, data and optional mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclFieldData {
    pub enable: bool,
    pub data: AclData,
    pub mask: Option<AclData>,
}

/// ACL action: enable flag and parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclActionData {
    pub enable: bool,
    pub parameter: AclData,
}

/// ACL stage capability: list of supported action kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AclCapability {
    pub is_action_list_mandatory: bool,
    pub action_list: Vec<i32>,
}

/// A SAI attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Bool(bool),
    Chardata(String),
    U8(u8),
    S8(i8),
    U16(u16),
    S16(i16),
    U32(u32),
    S32(i32),
    U64(u64),
    S64(i64),
    Pointer(CallbackId),
    Mac(MacAddress),
    Ipv4(Ipv4Address),
    Ipv6(Ipv6Address),
    IpAddress(IpAddress),
    IpPrefix(IpPrefix),
    Oid(SaiObjectId),
    ObjList(Vec<SaiObjectId>),
    U8List(Vec<u8>),
    S8List(Vec<i8>),
    U16List(Vec<u16>),
    S16List(Vec<i16>),
    U32List(Vec<u32>),
    S32List(Vec<i32>),
    U32Range { min: u32, max: u32 },
    S32Range { min: i32, max: i32 },
    VlanList(Vec<u16>),
    AclField(AclFieldData),
    AclAction(AclActionData),
    AclCapability(AclCapability),
}

impl AttrValue {
    /// Returns the shape of this value.
    pub fn value_type(&self) -> AttrValueType {
        match self {
            AttrValue::Bool(_) => AttrValueType::Bool,
            AttrValue::Chardata(_) => AttrValueType::Chardata,
            AttrValue::U8(_) => AttrValueType::U8,
            AttrValue::S8(_) => AttrValueType::S8,
            AttrValue::U16(_) => AttrValueType::U16,
            AttrValue::S16(_) => AttrValueType::S16,
            AttrValue::U32(_) => AttrValueType::U32,
            AttrValue::S32(_) => AttrValueType::S32,
            AttrValue::U64(_) => AttrValueType::U64,
            AttrValue::S64(_) => AttrValueType::S64,
            AttrValue::Pointer(_) => AttrValueType::Pointer,
            AttrValue::Mac(_) => AttrValueType::Mac,
            AttrValue::Ipv4(_) => AttrValueType::Ipv4,
            AttrValue::Ipv6(_) => AttrValueType::Ipv6,
            AttrValue::IpAddress(_) => AttrValueType::IpAddress,
            AttrValue::IpPrefix(_) => AttrValueType::IpPrefix,
            AttrValue::Oid(_) => AttrValueType::ObjectId,
            AttrValue::ObjList(_) => AttrValueType::ObjectList,
            AttrValue::U8List(_) => AttrValueType::U8List,
            AttrValue::S8List(_) => AttrValueType::S8List,
            AttrValue::U16List(_) => AttrValueType::U16List,
            AttrValue::S16List(_) => AttrValueType::S16List,
            AttrValue::U32List(_) => AttrValueType::U32List,
            AttrValue::S32List(_) => AttrValueType::S32List,
            AttrValue::U32Range { .. } => AttrValueType::U32Range,
            AttrValue::S32Range { .. } => AttrValueType::S32Range,
            AttrValue::VlanList(_) => AttrValueType::VlanList,
            AttrValue::AclField(f) => AttrValueType::AclField(f.data.data_type()),
            AttrValue::AclAction(a) => AttrValueType::AclAction(a.parameter.data_type()),
            AttrValue::AclCapability(_) => AttrValueType::AclCapability,
        }
    }

    /// Returns the handles this value holds references on.
    ///
    /// ACL fields and actions only hold references while enabled.
    pub fn oids(&self) -> &[SaiObjectId] {
        match self {
            AttrValue::Oid(oid) => std::slice::from_ref(oid),
            AttrValue::ObjList(list) => list,
            AttrValue::AclField(f) if f.enable => f.data.oids(),
            AttrValue::AclAction(a) if a.enable => a.parameter.oids(),
            _ => &[],
        }
    }

    /// Returns the value an enum or enum condition is compared with.
    pub fn enum_value(&self) -> Option<i32> {
        match self {
            AttrValue::S32(v) => Some(*v),
            AttrValue::AclField(AclFieldData {
                data: AclData::S32(v),
                ..
            }) => Some(*v),
            AttrValue::AclAction(AclActionData {
                parameter: AclData::S32(v),
                ..
            }) => Some(*v),
            _ => None,
        }
    }

    /// Resets the enum payload of an output buffer to zero.
    pub fn clear_enum_value(&mut self) {
        match self {
            AttrValue::S32(v) => *v = 0,
            AttrValue::AclField(AclFieldData {
                data: AclData::S32(v),
                ..
            }) => *v = 0,
            AttrValue::AclAction(AclActionData {
                parameter: AclData::S32(v),
                ..
            }) => *v = 0,
            _ => {}
        }
    }

    /// Returns the element count of list-shaped values.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            AttrValue::ObjList(l) => Some(l.len()),
            AttrValue::U8List(l) => Some(l.len()),
            AttrValue::S8List(l) => Some(l.len()),
            AttrValue::U16List(l) => Some(l.len()),
            AttrValue::S16List(l) => Some(l.len()),
            AttrValue::U32List(l) => Some(l.len()),
            AttrValue::S32List(l) => Some(l.len()),
            AttrValue::VlanList(l) => Some(l.len()),
            AttrValue::AclField(AclFieldData {
                data: AclData::ObjList(l),
                ..
            }) => Some(l.len()),
            AttrValue::AclAction(AclActionData {
                parameter: AclData::ObjList(l),
                ..
            }) => Some(l.len()),
            AttrValue::AclCapability(c) => Some(c.action_list.len()),
            _ => None,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, list: &[T]) -> fmt::Result {
    write!(f, "{}:", list.len())?;
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for AclData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AclData::Bool(v) => write!(f, "{}", v),
            AclData::U8(v) => write!(f, "{}", v),
            AclData::S8(v) => write!(f, "{}", v),
            AclData::U16(v) => write!(f, "{}", v),
            AclData::S16(v) => write!(f, "{}", v),
            AclData::U32(v) => write!(f, "{}", v),
            AclData::S32(v) => write!(f, "{}", v),
            AclData::U64(v) => write!(f, "{}", v),
            AclData::Mac(v) => write!(f, "{}", v),
            AclData::Ipv4(v) => write!(f, "{}", v),
            AclData::Ipv6(v) => write!(f, "{}", v),
            AclData::Oid(v) => write!(f, "{}", v),
            AclData::ObjList(l) => write_list(f, l),
            AclData::U8List(l) => write_list(f, l),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Chardata(v) => write!(f, "{}", v),
            AttrValue::U8(v) => write!(f, "{}", v),
            AttrValue::S8(v) => write!(f, "{}", v),
            AttrValue::U16(v) => write!(f, "{}", v),
            AttrValue::S16(v) => write!(f, "{}", v),
            AttrValue::U32(v) => write!(f, "{}", v),
            AttrValue::S32(v) => write!(f, "{}", v),
            AttrValue::U64(v) => write!(f, "{}", v),
            AttrValue::S64(v) => write!(f, "{}", v),
            AttrValue::Pointer(v) => write!(f, "ptr:0x{:x}", v.0),
            AttrValue::Mac(v) => write!(f, "{}", v),
            AttrValue::Ipv4(v) => write!(f, "{}", v),
            AttrValue::Ipv6(v) => write!(f, "{}", v),
            AttrValue::IpAddress(v) => write!(f, "{}", v),
            AttrValue::IpPrefix(v) => write!(f, "{}", v),
            AttrValue::Oid(v) => write!(f, "{}", v),
            AttrValue::ObjList(l) => write_list(f, l),
            AttrValue::U8List(l) => write_list(f, l),
            AttrValue::S8List(l) => write_list(f, l),
            AttrValue::U16List(l) => write_list(f, l),
            AttrValue::S16List(l) => write_list(f, l),
            AttrValue::U32List(l) => write_list(f, l),
            AttrValue::S32List(l) => write_list(f, l),
            AttrValue::VlanList(l) => write_list(f, l),
            AttrValue::U32Range { min, max } => write!(f, "{},{}", min, max),
            AttrValue::S32Range { min, max } => write!(f, "{},{}", min, max),
            AttrValue::AclField(field) if !field.enable => f.write_str("disabled"),
            AttrValue::AclField(field) => match &field.mask {
                Some(mask) => write!(f, "{}&mask:{}", field.data, mask),
                None => write!(f, "{}", field.data),
            },
            AttrValue::AclAction(action) if !action.enable => f.write_str("disabled"),
            AttrValue::AclAction(action) => write!(f, "{}", action.parameter),
            AttrValue::AclCapability(cap) => {
                write!(f, "{}:", cap.is_action_list_mandatory)?;
                write_list(f, &cap.action_list)
            }
        }
    }
}

/// An attribute id paired with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: SaiAttrId,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(id: SaiAttrId, value: AttrValue) -> Self {
        Self { id, value }
    }
}

/// Finds the first attribute with the given id.
pub fn find_attr(attrs: &[Attribute], id: SaiAttrId) -> Option<&Attribute> {
    attrs.iter().find(|a| a.id == id)
}
