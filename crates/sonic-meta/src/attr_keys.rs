//! Attribute-key index.
//!
//! Object types that declare key attributes (a VLAN's id, a port's hardware
//! lanes) must keep those values unique across live objects. The index maps
//! the serialized key-attribute values of each live object to the object's
//! meta-key string.

use sonic_sai::{find_attr, Attribute, AttrValue, ObjectTypeInfo};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AttrKeyMap {
    /// attribute key -> meta-key string
    keys: HashMap<String, String>,
}

impl AttrKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the attribute key of an object from its create attributes.
    ///
    /// Key attributes are walked in schema order so the same values always
    /// serialize the same way whatever order the caller passed them in. List
    /// values are sorted: a lane list keys the same set of lanes in any order.
    ///
    /// Returns `None` when `attrs` carries none of the type's key attributes.
    pub fn construct_key(info: &ObjectTypeInfo, attrs: &[Attribute]) -> Option<String> {
        let mut key = format!("{};", info.object_type);
        let mut found = false;

        for md in info.key_attrs() {
            if let Some(attr) = find_attr(attrs, md.attr_id) {
                key.push_str(&format!("{}:{};", md.name, canonical_value(&attr.value)));
                found = true;
            }
        }

        found.then_some(key)
    }

    pub fn insert(&mut self, meta_key: &str, attr_key: String) {
        self.keys.insert(attr_key, meta_key.to_string());
    }

    pub fn attr_key_exists(&self, attr_key: &str) -> bool {
        self.keys.contains_key(attr_key)
    }

    /// Drops every key owned by `meta_key`.
    pub fn erase_meta_key(&mut self, meta_key: &str) {
        self.keys.retain(|_, owner| owner != meta_key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

fn canonical_value(value: &AttrValue) -> String {
    match value {
        AttrValue::U32List(list) => {
            let mut sorted = list.clone();
            sorted.sort_unstable();
            AttrValue::U32List(sorted).to_string()
        }
        AttrValue::U16List(list) => {
            let mut sorted = list.clone();
            sorted.sort_unstable();
            AttrValue::U16List(sorted).to_string()
        }
        other => other.to_string(),
    }
}
