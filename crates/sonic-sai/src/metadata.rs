//! SAI attribute schema.
//!
//! A [`MetadataRegistry`] describes, per object type, every attribute the
//! metadata layer knows about: its value shape, flags, enum domain, allowed
//! referenced object types, default value and conditions. The registry is
//! assembled once through [`MetadataRegistryBuilder`] and is read-only after
//! that.

use crate::attr::{AttrValue, AttrValueType, SaiAttrId};
use crate::error::{SaiError, SaiResult};
use crate::types::SaiObjectType;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

/// Attribute flags (`sai_attr_flags_t`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttrFlags(u32);

impl AttrFlags {
    pub const NONE: AttrFlags = AttrFlags(0);
    pub const MANDATORY_ON_CREATE: AttrFlags = AttrFlags(1 << 0);
    pub const CREATE_ONLY: AttrFlags = AttrFlags(1 << 1);
    pub const CREATE_AND_SET: AttrFlags = AttrFlags(1 << 2);
    pub const READ_ONLY: AttrFlags = AttrFlags(1 << 3);
    pub const KEY: AttrFlags = AttrFlags(1 << 4);

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: AttrFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// `const` form of `|`, for flag combinations declared as constants.
    pub const fn union(self, other: AttrFlags) -> AttrFlags {
        AttrFlags(self.0 | other.0)
    }
}

impl BitOr for AttrFlags {
    type Output = AttrFlags;

    fn bitor(self, rhs: AttrFlags) -> AttrFlags {
        self.union(rhs)
    }
}

impl fmt::Debug for AttrFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(AttrFlags, &str); 5] = [
            (AttrFlags::MANDATORY_ON_CREATE, "MANDATORY_ON_CREATE"),
            (AttrFlags::CREATE_ONLY, "CREATE_ONLY"),
            (AttrFlags::CREATE_AND_SET, "CREATE_AND_SET"),
            (AttrFlags::READ_ONLY, "READ_ONLY"),
            (AttrFlags::KEY, "KEY"),
        ];

        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            f.write_str("NONE")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}

/// Allowed values of an enum attribute or of a stat enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMetadata {
    pub name: String,
    values: Vec<(i32, String)>,
}

impl EnumMetadata {
    pub fn new(name: impl Into<String>, values: &[(i32, &str)]) -> Self {
        Self {
            name: name.into(),
            values: values.iter().map(|(v, n)| (*v, n.to_string())).collect(),
        }
    }

    pub fn is_allowed(&self, value: i32) -> bool {
        self.values.iter().any(|(v, _)| *v == value)
    }

    /// Returns the symbolic name of `value`, if it belongs to the enum.
    pub fn value_name(&self, value: i32) -> Option<&str> {
        self.values
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, n)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().map(|(v, _)| *v)
    }
}

/// Right-hand side of an attribute condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionValue {
    Bool(bool),
    S32(i32),
}

/// "Attribute `attr_id` equals `value`" predicate on the same object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrCondition {
    pub attr_id: SaiAttrId,
    pub value: ConditionValue,
}

impl AttrCondition {
    pub fn new(attr_id: SaiAttrId, value: ConditionValue) -> Self {
        Self { attr_id, value }
    }

    /// Evaluates the condition against the governing attribute's value.
    pub fn is_met_by(&self, value: &AttrValue) -> bool {
        match (self.value, value) {
            (ConditionValue::Bool(expected), AttrValue::Bool(actual)) => expected == *actual,
            (ConditionValue::S32(expected), v) => v.enum_value() == Some(expected),
            _ => false,
        }
    }
}

/// Schema entry for a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrMetadata {
    pub object_type: SaiObjectType,
    pub attr_id: SaiAttrId,
    pub name: String,
    pub value_type: AttrValueType,
    pub flags: AttrFlags,
    pub allowed_object_types: Vec<SaiObjectType>,
    pub allow_null: bool,
    pub enum_metadata: Option<Arc<EnumMetadata>>,
    pub is_enum_list: bool,
    pub default: Option<AttrValue>,
    pub conditions: Vec<AttrCondition>,
    /// The value is a VLAN number (u16 attributes only).
    pub is_vlan: bool,
}

impl AttrMetadata {
    pub fn new(
        object_type: SaiObjectType,
        attr_id: SaiAttrId,
        name: impl Into<String>,
        value_type: AttrValueType,
    ) -> Self {
        Self {
            object_type,
            attr_id,
            name: name.into(),
            value_type,
            flags: AttrFlags::NONE,
            allowed_object_types: Vec::new(),
            allow_null: false,
            enum_metadata: None,
            is_enum_list: false,
            default: None,
            conditions: Vec::new(),
            is_vlan: false,
        }
    }

    pub fn with_flags(mut self, flags: AttrFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_allowed_types(mut self, types: &[SaiObjectType]) -> Self {
        self.allowed_object_types = types.to_vec();
        self
    }

    pub fn with_allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    pub fn with_enum(mut self, enum_metadata: Arc<EnumMetadata>) -> Self {
        self.enum_metadata = Some(enum_metadata);
        self
    }

    pub fn with_enum_list(mut self, enum_metadata: Arc<EnumMetadata>) -> Self {
        self.enum_metadata = Some(enum_metadata);
        self.is_enum_list = true;
        self
    }

    pub fn with_default(mut self, value: AttrValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_condition(mut self, attr_id: SaiAttrId, value: ConditionValue) -> Self {
        self.conditions.push(AttrCondition::new(attr_id, value));
        self
    }

    pub fn with_vlan(mut self) -> Self {
        self.is_vlan = true;
        self
    }

    pub fn is_mandatory_on_create(&self) -> bool {
        self.flags.contains(AttrFlags::MANDATORY_ON_CREATE)
    }

    pub fn is_create_only(&self) -> bool {
        self.flags.contains(AttrFlags::CREATE_ONLY)
    }

    pub fn is_read_only(&self) -> bool {
        self.flags.contains(AttrFlags::READ_ONLY)
    }

    pub fn is_key(&self) -> bool {
        self.flags.contains(AttrFlags::KEY)
    }

    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Scalar enum (not an enum list).
    pub fn is_enum(&self) -> bool {
        self.enum_metadata.is_some() && !self.is_enum_list
    }

    pub fn is_oid_attribute(&self) -> bool {
        self.value_type.is_oid_type()
    }

    pub fn is_allowed_object_type(&self, object_type: SaiObjectType) -> bool {
        self.allowed_object_types.contains(&object_type)
    }

    pub fn is_allowed_enum_value(&self, value: i32) -> bool {
        self.enum_metadata
            .as_ref()
            .is_some_and(|e| e.is_allowed(value))
    }
}

impl fmt::Display for AttrMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Schema of one object type: its attributes in schema order and its stat
/// enum, if the type has counters.
#[derive(Debug, Clone)]
pub struct ObjectTypeInfo {
    pub object_type: SaiObjectType,
    attrs: Vec<Arc<AttrMetadata>>,
    pub stat_enum: Option<Arc<EnumMetadata>>,
}

impl ObjectTypeInfo {
    fn new(object_type: SaiObjectType) -> Self {
        Self {
            object_type,
            attrs: Vec::new(),
            stat_enum: None,
        }
    }

    pub fn attr(&self, attr_id: SaiAttrId) -> Option<&Arc<AttrMetadata>> {
        self.attrs.iter().find(|md| md.attr_id == attr_id)
    }

    /// Attributes in schema order.
    pub fn attrs(&self) -> &[Arc<AttrMetadata>] {
        &self.attrs
    }

    pub fn key_attrs(&self) -> impl Iterator<Item = &Arc<AttrMetadata>> {
        self.attrs.iter().filter(|md| md.is_key())
    }

    pub fn has_keys(&self) -> bool {
        self.attrs.iter().any(|md| md.is_key())
    }

    pub fn is_non_object_id(&self) -> bool {
        self.object_type.is_non_object_id()
    }
}

/// Read-only schema oracle.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    types: HashMap<SaiObjectType, ObjectTypeInfo>,
}

impl MetadataRegistry {
    pub fn builder() -> MetadataRegistryBuilder {
        MetadataRegistryBuilder::default()
    }

    pub fn object_type_info(&self, object_type: SaiObjectType) -> Option<&ObjectTypeInfo> {
        self.types.get(&object_type)
    }

    pub fn attr_metadata(
        &self,
        object_type: SaiObjectType,
        attr_id: SaiAttrId,
    ) -> Option<&Arc<AttrMetadata>> {
        self.types.get(&object_type)?.attr(attr_id)
    }

    pub fn is_known_object_type(&self, object_type: SaiObjectType) -> bool {
        self.types.contains_key(&object_type)
    }
}

/// Assembles a [`MetadataRegistry`].
///
/// # Example
///
/// ```
/// use sonic_sai::{AttrFlags, AttrMetadata, AttrValueType, MetadataRegistry, SaiObjectType};
///
/// let registry = MetadataRegistry::builder()
///     .attr(
///         AttrMetadata::new(SaiObjectType::Vlan, 0, "SAI_VLAN_ATTR_VLAN_ID", AttrValueType::U16)
///             .with_flags(AttrFlags::MANDATORY_ON_CREATE | AttrFlags::CREATE_ONLY | AttrFlags::KEY)
///             .with_vlan(),
///     )
///     .build()
///     .unwrap();
///
/// assert!(registry.object_type_info(SaiObjectType::Vlan).unwrap().has_keys());
/// ```
#[derive(Debug, Default)]
pub struct MetadataRegistryBuilder {
    types: HashMap<SaiObjectType, ObjectTypeInfo>,
}

impl MetadataRegistryBuilder {
    /// Registers an object type that may have no attributes of its own.
    pub fn object_type(mut self, object_type: SaiObjectType) -> Self {
        self.types
            .entry(object_type)
            .or_insert_with(|| ObjectTypeInfo::new(object_type));
        self
    }

    /// Appends an attribute to its object type, preserving insertion order
    /// as schema order.
    pub fn attr(mut self, md: AttrMetadata) -> Self {
        self.types
            .entry(md.object_type)
            .or_insert_with(|| ObjectTypeInfo::new(md.object_type))
            .attrs
            .push(Arc::new(md));
        self
    }

    pub fn stats(mut self, object_type: SaiObjectType, stat_enum: Arc<EnumMetadata>) -> Self {
        self.types
            .entry(object_type)
            .or_insert_with(|| ObjectTypeInfo::new(object_type))
            .stat_enum = Some(stat_enum);
        self
    }

    /// Validates and freezes the schema.
    ///
    /// Fails if an attribute id is declared twice for one type, if a
    /// condition names an attribute that does not exist, or if a handle
    /// attribute lists no allowed object types.
    pub fn build(self) -> SaiResult<MetadataRegistry> {
        for info in self.types.values() {
            let mut seen = HashSet::new();

            for md in &info.attrs {
                if !seen.insert(md.attr_id) {
                    return Err(SaiError::failure(format!(
                        "{}: attribute id {} declared twice",
                        info.object_type, md.attr_id
                    )));
                }

                if md.is_oid_attribute() && md.allowed_object_types.is_empty() {
                    return Err(SaiError::failure(format!(
                        "{}: object id attribute without allowed object types",
                        md.name
                    )));
                }
            }

            for md in &info.attrs {
                for condition in &md.conditions {
                    if info.attr(condition.attr_id).is_none() {
                        return Err(SaiError::failure(format!(
                            "{}: condition on unknown attribute id {}",
                            md.name, condition.attr_id
                        )));
                    }
                }
            }
        }

        Ok(MetadataRegistry { types: self.types })
    }
}
