// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # The heap
//!
//! All engine-visible data lives in typed arenas: one vector per heap data
//! kind, addressed by the `NonZeroU32` indexes of [`indexes`]. Handles are
//! plain indexes, so they stay valid across any number of allocations; a
//! borrow of heap data (for example a `&str` into a string record) cannot be
//! held across an allocation because allocating requires `&mut` access to
//! the heap. That borrow discipline is the allocation contract the rest of
//! the engine is written against.

pub(crate) mod heap_constants;
pub mod indexes;
pub(crate) mod object_entry;

pub use heap_constants::{WellKnownSymbolIndexes, LAST_WELL_KNOWN_SYMBOL_INDEX};

use self::heap_constants::WELL_KNOWN_SYMBOL_DESCRIPTIONS;
use self::indexes::{ObjectShapeIndex, StringIndex};
use crate::ecmascript::builtins::{
    array::data::ArrayHeapData,
    array::Array,
    ordinary::shape::{ObjectShape, ObjectShapeRecord},
    primitive_objects::{PrimitiveObject, PrimitiveObjectHeapData},
    regexp::{RegExp, RegExpHeapData},
    text_processing::string_objects::string_iterator_objects::{
        StringIterator, StringIteratorHeapData,
    },
    BuiltinFunction,
};
use crate::ecmascript::execution::{Realm, RealmIdentifier};
use crate::ecmascript::types::{
    BuiltinFunctionHeapData, Error, ErrorHeapData, HeapString, ObjectHeapData, OrdinaryObject,
    String, StringHeapData, Symbol, SymbolHeapData, BUILTIN_STRINGS_LIST,
};

#[derive(Debug)]
pub struct Heap {
    pub(crate) arrays: Vec<Option<ArrayHeapData>>,
    pub(crate) builtin_functions: Vec<Option<BuiltinFunctionHeapData>>,
    pub(crate) errors: Vec<Option<ErrorHeapData>>,
    pub(crate) object_shapes: Vec<Option<ObjectShapeRecord>>,
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) primitive_objects: Vec<Option<PrimitiveObjectHeapData>>,
    pub(crate) realms: Vec<Option<Realm>>,
    pub(crate) regexps: Vec<Option<RegExpHeapData>>,
    pub(crate) string_iterators: Vec<Option<StringIteratorHeapData>>,
    pub(crate) strings: Vec<Option<StringHeapData>>,
    pub(crate) symbols: Vec<Option<SymbolHeapData>>,
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            arrays: Vec::with_capacity(64),
            builtin_functions: Vec::with_capacity(64),
            errors: Vec::with_capacity(8),
            object_shapes: Vec::with_capacity(64),
            objects: Vec::with_capacity(64),
            primitive_objects: Vec::with_capacity(8),
            realms: Vec::with_capacity(1),
            regexps: Vec::with_capacity(8),
            string_iterators: Vec::with_capacity(8),
            strings: Vec::with_capacity(256),
            symbols: Vec::with_capacity(8),
        };

        heap.strings.extend(
            BUILTIN_STRINGS_LIST.map(|string| Some(StringHeapData::from_static_str(string))),
        );
        let well_known_symbols = WELL_KNOWN_SYMBOL_DESCRIPTIONS.map(|description| {
            Some(SymbolHeapData {
                descriptor: Some(String::from_static_str_in(&mut heap.strings, description)),
            })
        });
        heap.symbols.extend(well_known_symbols);
        // The root shape: no keys, shared starting point of every transition
        // chain.
        heap.object_shapes.push(Some(ObjectShapeRecord::default()));

        heap
    }

    /// The shape every object starts from.
    pub(crate) fn root_shape(&self) -> ObjectShape {
        ObjectShape(ObjectShapeIndex::from_u32_index(0))
    }

    pub(crate) fn alloc_shape(&mut self, record: ObjectShapeRecord) -> ObjectShape {
        self.object_shapes.push(Some(record));
        ObjectShape(ObjectShapeIndex::last(&self.object_shapes))
    }

    pub(crate) fn add_realm(&mut self, realm: Realm) -> RealmIdentifier {
        self.realms.push(Some(realm));
        RealmIdentifier::last(&self.realms)
    }

    /// Allocate a string into the string arena.
    ///
    /// Heap strings are content-deduplicated: allocating a string whose
    /// bytes already exist in the arena returns the existing handle. The
    /// rest of the engine relies on this to compare heap strings by index.
    /// Callers must route strings of up to 7 bytes into `SmallString`
    /// instead; see `String::from_str`.
    pub(crate) fn alloc_str(&mut self, message: &str) -> HeapString {
        debug_assert!(message.len() > small_string::SmallString::MAX_LEN);
        if let Some(existing) = self.find_equal_string(message) {
            return existing;
        }
        self.strings.push(Some(StringHeapData::from_str(message)));
        HeapString(StringIndex::last(&self.strings))
    }

    pub(crate) fn alloc_string(&mut self, message: std::string::String) -> HeapString {
        debug_assert!(message.len() > small_string::SmallString::MAX_LEN);
        if let Some(existing) = self.find_equal_string(&message) {
            return existing;
        }
        self.strings.push(Some(StringHeapData::from_string(message)));
        HeapString(StringIndex::last(&self.strings))
    }

    fn find_equal_string(&self, message: &str) -> Option<HeapString> {
        self.strings
            .iter()
            .position(|string| string.as_ref().is_some_and(|s| s.as_str() == message))
            .map(|index| HeapString(StringIndex::from_index(index)))
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper trait for allocating heap data and receiving a typed handle back.
pub trait CreateHeapData<T, F> {
    fn create(&mut self, data: T) -> F;
}

macro_rules! impl_create_heap_data {
    ($data: ty, $handle: ty, $field: ident) => {
        impl CreateHeapData<$data, $handle> for Heap {
            fn create(&mut self, data: $data) -> $handle {
                self.$field.push(Some(data));
                <$handle>::from_index(self.$field.len() - 1)
            }
        }
    };
}

impl_create_heap_data!(ArrayHeapData, Array, arrays);
impl_create_heap_data!(BuiltinFunctionHeapData, BuiltinFunction, builtin_functions);
impl_create_heap_data!(ErrorHeapData, Error, errors);
impl_create_heap_data!(ObjectHeapData, OrdinaryObject, objects);
impl_create_heap_data!(
    PrimitiveObjectHeapData,
    PrimitiveObject,
    primitive_objects
);
impl_create_heap_data!(RegExpHeapData, RegExp, regexps);
impl_create_heap_data!(StringIteratorHeapData, StringIterator, string_iterators);
impl_create_heap_data!(SymbolHeapData, Symbol, symbols);

macro_rules! impl_heap_index {
    ($handle: ty, $data: ty, $field: ident, $what: literal) => {
        impl core::ops::Index<$handle> for Heap {
            type Output = $data;

            fn index(&self, index: $handle) -> &Self::Output {
                self.$field
                    .get(index.get_index())
                    .expect(concat!($what, " out of bounds"))
                    .as_ref()
                    .expect(concat!($what, " slot empty"))
            }
        }

        impl core::ops::IndexMut<$handle> for Heap {
            fn index_mut(&mut self, index: $handle) -> &mut Self::Output {
                self.$field
                    .get_mut(index.get_index())
                    .expect(concat!($what, " out of bounds"))
                    .as_mut()
                    .expect(concat!($what, " slot empty"))
            }
        }

        impl core::ops::Index<$handle> for crate::ecmascript::execution::Agent {
            type Output = $data;

            fn index(&self, index: $handle) -> &Self::Output {
                &self.heap[index]
            }
        }

        impl core::ops::IndexMut<$handle> for crate::ecmascript::execution::Agent {
            fn index_mut(&mut self, index: $handle) -> &mut Self::Output {
                &mut self.heap[index]
            }
        }
    };
}

impl_heap_index!(Array, ArrayHeapData, arrays, "Array");
impl_heap_index!(
    BuiltinFunction,
    BuiltinFunctionHeapData,
    builtin_functions,
    "BuiltinFunction"
);
impl_heap_index!(Error, ErrorHeapData, errors, "Error");
impl_heap_index!(HeapString, StringHeapData, strings, "String");
impl_heap_index!(ObjectShape, ObjectShapeRecord, object_shapes, "ObjectShape");
impl_heap_index!(OrdinaryObject, ObjectHeapData, objects, "Object");
impl_heap_index!(
    PrimitiveObject,
    PrimitiveObjectHeapData,
    primitive_objects,
    "PrimitiveObject"
);
impl_heap_index!(RealmIdentifier, Realm, realms, "Realm");
impl_heap_index!(RegExp, RegExpHeapData, regexps, "RegExp");
impl_heap_index!(
    StringIterator,
    StringIteratorHeapData,
    string_iterators,
    "StringIterator"
);
impl_heap_index!(Symbol, SymbolHeapData, symbols, "Symbol");
