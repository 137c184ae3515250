// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object shapes.
//!
//! A shape describes the named-property layout of an object: which keys it
//! has, in what slot order, and with what attributes. Objects with the same
//! layout share one shape, so the per-object cost of a property is its
//! value slot alone. Shapes are immutable; adding, removing or
//! reconfiguring a property produces a successor shape. Additions walk a
//! transition table on the predecessor so that objects built the same way
//! end up sharing the same shape chain.

use crate::ecmascript::types::PropertyKey;
use crate::heap::indexes::ObjectShapeIndex;
use crate::heap::Heap;

/// Handle to a shape in the shape arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjectShape(pub(crate) ObjectShapeIndex);

impl ObjectShape {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }
}

/// The [[Writable]], [[Enumerable]] and [[Configurable]] attributes of a
/// property. For named properties these are part of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAttributes {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl PropertyAttributes {
    /// Attributes of properties created by ordinary assignment.
    pub const DEFAULT: PropertyAttributes = PropertyAttributes {
        writable: true,
        enumerable: true,
        configurable: true,
    };

    /// Attributes of built-in methods: writable and configurable, but not
    /// enumerable.
    pub const BUILTIN: PropertyAttributes = PropertyAttributes {
        writable: true,
        enumerable: false,
        configurable: true,
    };

    /// Fully locked down.
    pub const SEALED: PropertyAttributes = PropertyAttributes {
        writable: false,
        enumerable: false,
        configurable: false,
    };
}

#[derive(Debug, Default)]
pub struct ObjectShapeRecord {
    /// Keys and their attributes, in slot order.
    keys: Vec<(PropertyKey, PropertyAttributes)>,
    /// Key to slot index.
    table: hashbrown::HashMap<PropertyKey, u32, ahash::RandomState>,
    /// Successor shapes reached by adding a property to this shape.
    transitions: hashbrown::HashMap<(PropertyKey, PropertyAttributes), ObjectShape, ahash::RandomState>,
}

impl ObjectShapeRecord {
    pub(crate) fn lookup(&self, key: PropertyKey) -> Option<(u32, PropertyAttributes)> {
        let slot = *self.table.get(&key)?;
        Some((slot, self.keys[slot as usize].1))
    }

    pub(crate) fn len(&self) -> u32 {
        self.keys.len() as u32
    }

    pub(crate) fn keys(&self) -> &[(PropertyKey, PropertyAttributes)] {
        &self.keys
    }
}

/// Find or build the shape reached by appending `key` to `shape`.
///
/// `cacheable` decides whether the edge is recorded in the predecessor's
/// transition table; objects that have diverged from the shared chains
/// build private shapes instead.
pub(crate) fn add_property_to_shape(
    heap: &mut Heap,
    shape: ObjectShape,
    key: PropertyKey,
    attributes: PropertyAttributes,
    cacheable: bool,
) -> ObjectShape {
    if cacheable {
        if let Some(successor) = heap[shape].transitions.get(&(key, attributes)) {
            return *successor;
        }
    }
    let record = &heap[shape];
    debug_assert!(record.lookup(key).is_none());
    let mut keys = record.keys.clone();
    let mut table = record.table.clone();
    table.insert(key, keys.len() as u32);
    keys.push((key, attributes));
    let successor = heap.alloc_shape(ObjectShapeRecord {
        keys,
        table,
        transitions: Default::default(),
    });
    if cacheable {
        heap[shape].transitions.insert((key, attributes), successor);
    }
    successor
}

/// Build the shape reached by removing the property at `slot`. Deletions
/// are never cached; the object is leaving the shared chains.
pub(crate) fn remove_property_from_shape(
    heap: &mut Heap,
    shape: ObjectShape,
    slot: u32,
) -> ObjectShape {
    let record = &heap[shape];
    let mut keys = record.keys.clone();
    keys.remove(slot as usize);
    let table = keys
        .iter()
        .enumerate()
        .map(|(index, (key, _))| (*key, index as u32))
        .collect();
    heap.alloc_shape(ObjectShapeRecord {
        keys,
        table,
        transitions: Default::default(),
    })
}

/// Build the shape with the property at `slot` reconfigured to new
/// attributes. Like removal, this leaves the shared chains.
pub(crate) fn reconfigure_shape_property(
    heap: &mut Heap,
    shape: ObjectShape,
    slot: u32,
    attributes: PropertyAttributes,
) -> ObjectShape {
    let record = &heap[shape];
    let mut keys = record.keys.clone();
    keys[slot as usize].1 = attributes;
    let table = record.table.clone();
    heap.alloc_shape(ObjectShapeRecord {
        keys,
        table,
        transitions: Default::default(),
    })
}
