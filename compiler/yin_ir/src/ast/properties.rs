//! Property tables for typed parameters, record fields and declarations.
//!
//! A `Properties` table maps each field (or parameter) name to an
//! `Attributes` bag. Both preserve insertion order. Uniqueness of field
//! names is enforced by the parser before insertion; the table itself only
//! guarantees that one name maps to one entry.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::{Expr, Ident};
use crate::Name;

/// Ordered attribute bag of one field.
///
/// Most fields carry only `type` and perhaps one extra attribute, so the bag
/// is stored inline for up to two entries.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Attributes {
    entries: SmallVec<[(Name, Expr); 2]>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            entries: SmallVec::new(),
        }
    }

    /// Insert an attribute, returning the previous value for the key.
    ///
    /// An existing key keeps its position and only its value is replaced.
    pub fn insert(&mut self, key: Name, value: Expr) -> Option<Expr> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Insert every entry of `other`, in its order.
    pub fn merge(&mut self, other: Attributes) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: Name) -> Option<&Expr> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: Name) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Expr)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = Name> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Ordered table from field name to its attributes.
#[derive(Clone, Default)]
pub struct Properties {
    entries: Vec<(Ident, Attributes)>,
    index: FxHashMap<Name, usize>,
}

impl Properties {
    pub fn new() -> Self {
        Properties {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Check if a field with this name exists.
    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.index.contains_key(&name)
    }

    /// Set attribute `attr` of field `field` to `value`.
    ///
    /// The first insert for a field creates its entry at the end of the
    /// table. Later inserts update that entry without moving it; the span of
    /// the field's identifier stays the one from the first insert.
    pub fn insert(&mut self, field: Ident, attr: Name, value: Expr) {
        let slot = self.entry_mut(field);
        slot.insert(attr, value);
    }

    /// Merge a whole attribute bag into field `field`.
    pub fn extend_field(&mut self, field: Ident, attrs: Attributes) {
        let slot = self.entry_mut(field);
        slot.merge(attrs);
    }

    fn entry_mut(&mut self, field: Ident) -> &mut Attributes {
        let index = match self.index.get(&field.name) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                self.entries.push((field, Attributes::new()));
                self.index.insert(field.name, index);
                index
            }
        };
        &mut self.entries[index].1
    }

    pub fn get(&self, name: Name) -> Option<&Attributes> {
        self.index.get(&name).map(|&index| &self.entries[index].1)
    }

    /// The identifier a field was first inserted with.
    pub fn field(&self, name: Name) -> Option<Ident> {
        self.index.get(&name).map(|&index| self.entries[index].0)
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Attributes)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.entries.iter().map(|(k, _)| k.name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The index is derived from `entries`, so equality and hashing only look at
// the ordered entries.
impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Properties {}

impl Hash for Properties {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k.name, v)))
            .finish()
    }
}
