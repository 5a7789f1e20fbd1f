//! Object collection: the local mirror of every object and the attribute
//! values last seen for it.
//!
//! Objects are keyed by the canonical string form of their [`MetaKey`], which
//! lets existence be checked from a string alone.

use sonic_sai::{AttrMetadata, AttrValue, MetaKey, SaiAttrId, SaiObjectType};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// An attribute value together with its schema entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SaiAttr {
    md: Arc<AttrMetadata>,
    value: AttrValue,
}

impl SaiAttr {
    pub fn new(md: Arc<AttrMetadata>, value: AttrValue) -> Self {
        Self { md, value }
    }

    pub fn metadata(&self) -> &AttrMetadata {
        &self.md
    }

    pub fn value(&self) -> &AttrValue {
        &self.value
    }
}

/// One mirrored object.
#[derive(Debug, Clone, PartialEq)]
pub struct SaiObject {
    meta_key: MetaKey,
    attrs: BTreeMap<SaiAttrId, SaiAttr>,
}

impl SaiObject {
    fn new(meta_key: MetaKey) -> Self {
        Self {
            meta_key,
            attrs: BTreeMap::new(),
        }
    }

    pub fn meta_key(&self) -> &MetaKey {
        &self.meta_key
    }

    pub fn object_type(&self) -> SaiObjectType {
        self.meta_key.object_type()
    }

    pub fn attr(&self, attr_id: SaiAttrId) -> Option<&SaiAttr> {
        self.attrs.get(&attr_id)
    }

    pub fn has_attr(&self, attr_id: SaiAttrId) -> bool {
        self.attrs.contains_key(&attr_id)
    }

    /// Attributes ordered by id.
    pub fn attrs(&self) -> impl Iterator<Item = &SaiAttr> {
        self.attrs.values()
    }

    fn set_attr(&mut self, md: Arc<AttrMetadata>, value: AttrValue) {
        self.attrs.insert(md.attr_id, SaiAttr::new(md, value));
    }
}

#[derive(Debug, Clone, Default)]
pub struct SaiObjectCollection {
    objects: HashMap<String, SaiObject>,
}

impl SaiObjectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty record. Returns false, leaving the existing record
    /// untouched, if the key is already present.
    pub fn create_object(&mut self, meta_key: &MetaKey) -> bool {
        let key = meta_key.to_string();
        if self.objects.contains_key(&key) {
            return false;
        }
        self.objects.insert(key, SaiObject::new(meta_key.clone()));
        true
    }

    pub fn remove_object(&mut self, meta_key: &MetaKey) -> Option<SaiObject> {
        self.objects.remove(&meta_key.to_string())
    }

    pub fn object_exists(&self, meta_key: &MetaKey) -> bool {
        self.objects.contains_key(&meta_key.to_string())
    }

    /// Existence check by canonical string, for callers that only hold the
    /// serialized key.
    pub fn object_exists_str(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Stores `value` on an existing object. Returns false if the object is
    /// not in the collection.
    pub fn set_object_attr(
        &mut self,
        meta_key: &MetaKey,
        md: Arc<AttrMetadata>,
        value: AttrValue,
    ) -> bool {
        match self.objects.get_mut(&meta_key.to_string()) {
            Some(object) => {
                object.set_attr(md, value);
                true
            }
            None => false,
        }
    }

    pub fn get_object_attr(&self, meta_key: &MetaKey, attr_id: SaiAttrId) -> Option<&SaiAttr> {
        self.get_object(meta_key)?.attr(attr_id)
    }

    pub fn get_object(&self, meta_key: &MetaKey) -> Option<&SaiObject> {
        self.objects.get(&meta_key.to_string())
    }

    /// All objects of one type, in canonical key order.
    pub fn objects_by_type(&self, object_type: SaiObjectType) -> Vec<&SaiObject> {
        let mut objects: Vec<(&String, &SaiObject)> = self
            .objects
            .iter()
            .filter(|(_, object)| object.object_type() == object_type)
            .collect();
        objects.sort_by(|a, b| a.0.cmp(b.0));
        objects.into_iter().map(|(_, object)| object).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
