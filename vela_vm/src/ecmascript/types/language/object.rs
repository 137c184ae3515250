// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;
mod internal_methods;
mod property_key;

use super::Value;
use crate::ecmascript::builtins::{
    array::Array,
    primitive_objects::PrimitiveObject,
    regexp::RegExp,
    text_processing::string_objects::string_iterator_objects::StringIterator,
    BuiltinFunction,
};
use crate::ecmascript::types::Error;
use crate::heap::indexes::ObjectIndex;

pub use data::{IndexedEntry, ObjectHeapData, PropertyValue};
pub(crate) use internal_methods::is_no_op_redefinition;
pub use property_key::{parse_string_to_integer_property_key, PropertyKey};

/// Handle to an ordinary (plain) object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

impl OrdinaryObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(ObjectIndex::from_index(index))
    }
}

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// Every object kind the engine knows about. Exotic objects carry their
/// special data in their own heap arenas and delegate "ordinary object
/// business" to an optional backing ordinary object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    Array(Array),
    BuiltinFunction(BuiltinFunction),
    Error(Error),
    PrimitiveObject(PrimitiveObject),
    RegExp(RegExp),
    StringIterator(StringIterator),
}

/// Convenience conversion into [`Object`].
pub trait IntoObject {
    fn into_object(self) -> Object;
}

impl<T> IntoObject for T
where
    T: Into<Object>,
{
    fn into_object(self) -> Object {
        self.into()
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        match value {
            Object::Object(o) => Value::Object(o),
            Object::Array(a) => Value::Array(a),
            Object::BuiltinFunction(f) => Value::BuiltinFunction(f),
            Object::Error(e) => Value::Error(e),
            Object::PrimitiveObject(p) => Value::PrimitiveObject(p),
            Object::RegExp(r) => Value::RegExp(r),
            Object::StringIterator(i) => Value::StringIterator(i),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(o) => Ok(Object::Object(o)),
            Value::Array(a) => Ok(Object::Array(a)),
            Value::BuiltinFunction(f) => Ok(Object::BuiltinFunction(f)),
            Value::Error(e) => Ok(Object::Error(e)),
            Value::PrimitiveObject(p) => Ok(Object::PrimitiveObject(p)),
            Value::RegExp(r) => Ok(Object::RegExp(r)),
            Value::StringIterator(i) => Ok(Object::StringIterator(i)),
            _ => Err(()),
        }
    }
}
