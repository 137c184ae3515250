// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::{
    array::data::ArrayHeapData, ordinary::shape::ObjectShapeRecord,
    primitive_objects::PrimitiveObjectHeapData, regexp::RegExpHeapData,
    text_processing::string_objects::string_iterator_objects::StringIteratorHeapData,
};
use crate::ecmascript::execution::Realm;
use crate::ecmascript::types::{
    BuiltinFunctionHeapData, ErrorHeapData, ObjectHeapData, StringHeapData, SymbolHeapData,
};
use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::size_of;
use core::num::NonZeroU32;

/// A non-zero index into a heap vector of `T`s, stored offset by one so that
/// `Option<BaseIndex<T>>` stays four bytes wide.
///
/// Holding a `BaseIndex` implies the pointed-to heap entry is live: entries
/// are never moved or dropped while a handle to them can still be reached.
pub struct BaseIndex<T: ?Sized>(NonZeroU32, PhantomData<T>);

const _INDEX_SIZE_IS_U32: () = assert!(size_of::<BaseIndex<()>>() == size_of::<u32>());
const _OPTION_INDEX_SIZE_IS_U32: () =
    assert!(size_of::<Option<BaseIndex<()>>>() == size_of::<u32>());

impl<T: ?Sized> Debug for BaseIndex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (self.0.get() - 1).fmt(f)
    }
}

impl<T: ?Sized> Clone for BaseIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for BaseIndex<T> {}

impl<T: ?Sized> PartialEq for BaseIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized> Eq for BaseIndex<T> {}

impl<T: ?Sized> PartialOrd for BaseIndex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for BaseIndex<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: ?Sized> Hash for BaseIndex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: ?Sized> BaseIndex<T> {
    pub const fn into_index(self) -> usize {
        self.0.get() as usize - 1
    }

    pub const fn into_u32_index(self) -> u32 {
        self.0.get() - 1
    }

    pub const fn from_index(value: usize) -> Self {
        assert!(value < u32::MAX as usize);
        Self::from_u32_index(value as u32)
    }

    pub const fn from_u32_index(value: u32) -> Self {
        assert!(value != u32::MAX);
        // SAFETY: value + 1 cannot overflow and is never zero.
        Self(unsafe { NonZeroU32::new_unchecked(value + 1) }, PhantomData)
    }

    /// Index of the most recently pushed entry.
    pub fn last(vec: &[Option<T>]) -> Self
    where
        T: Sized,
    {
        assert!(!vec.is_empty());
        Self::from_index(vec.len() - 1)
    }
}

pub type ArrayIndex = BaseIndex<ArrayHeapData>;
pub type BuiltinFunctionIndex = BaseIndex<BuiltinFunctionHeapData>;
pub type ErrorIndex = BaseIndex<ErrorHeapData>;
pub type ObjectIndex = BaseIndex<ObjectHeapData>;
pub type ObjectShapeIndex = BaseIndex<ObjectShapeRecord>;
pub type PrimitiveObjectIndex = BaseIndex<PrimitiveObjectHeapData>;
pub type RealmIndex = BaseIndex<Realm>;
pub type RegExpIndex = BaseIndex<RegExpHeapData>;
pub type StringIndex = BaseIndex<StringHeapData>;
pub type StringIteratorIndex = BaseIndex<StringIteratorHeapData>;
pub type SymbolIndex = BaseIndex<SymbolHeapData>;
