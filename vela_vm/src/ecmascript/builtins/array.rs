// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The slice of the Array exotic object the String core depends on:
//! creation, the indexed define-property primitive, and length reporting.

pub(crate) mod data;

use self::data::ArrayHeapData;
use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::builtins::ordinary::{ordinary_define_own_property, ordinary_set};
use crate::ecmascript::execution::{Agent, JsResult};
use crate::ecmascript::types::{
    Object, PropertyDescriptor, PropertyKey, Value, BUILTIN_STRING_MEMORY,
};
use crate::heap::indexes::ArrayIndex;
use crate::heap::CreateHeapData;

/// Handle to an Array exotic object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Array(pub(crate) ArrayIndex);

impl Array {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(ArrayIndex::from_index(index))
    }

    /// ### [10.4.2.2 ArrayCreate ( length \[ , proto \] )](https://tc39.es/ecma262/#sec-arraycreate)
    pub fn create(agent: &mut Agent, length: usize) -> Array {
        agent.heap.create(ArrayHeapData {
            object_index: None,
            elements: vec![None; length],
        })
    }

    pub fn from_slice(agent: &mut Agent, elements: &[Value]) -> Array {
        agent.heap.create(ArrayHeapData {
            object_index: None,
            elements: elements.iter().copied().map(Some).collect(),
        })
    }

    pub fn len(self, agent: &Agent) -> u32 {
        agent[self].elements.len() as u32
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].elements.is_empty()
    }

    /// The sole array mutation primitive the string builtins use: define
    /// the property at `index`, extending the array as needed.
    pub(crate) fn define_indexed(self, agent: &mut Agent, index: usize, value: Value) {
        let elements = &mut agent[self].elements;
        if elements.len() <= index {
            elements.resize(index + 1, None);
        }
        elements[index] = Some(value);
    }

    /// The element at `index`, if the array has one there.
    pub fn get_element(self, agent: &Agent, index: usize) -> Option<Value> {
        agent[self].elements.get(index).copied().flatten()
    }
}

impl From<Array> for Object {
    fn from(value: Array) -> Self {
        Object::Array(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl TryFrom<Value> for Array {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(a) => Ok(a),
            _ => Err(()),
        }
    }
}

/// `length` and the element properties, synthesized from the element
/// vector.
pub(crate) fn array_own_property(
    agent: &Agent,
    array: Array,
    key: PropertyKey,
) -> Option<PropertyDescriptor> {
    if key == BUILTIN_STRING_MEMORY.length.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            Value::from(array.len(agent)),
            PropertyAttributes {
                writable: true,
                enumerable: false,
                configurable: false,
            },
        ));
    }
    if let PropertyKey::Integer(index) = key {
        let value = array.get_element(agent, index as usize)?;
        return Some(PropertyDescriptor::new_data(
            value,
            PropertyAttributes::DEFAULT,
        ));
    }
    None
}

pub(crate) fn array_set(
    agent: &mut Agent,
    array: Array,
    key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    if let PropertyKey::Integer(index) = key {
        array.define_indexed(agent, index as usize, value);
        return Ok(true);
    }
    if key == BUILTIN_STRING_MEMORY.length.to_property_key() {
        // Only integral number lengths are accepted; the core never grows
        // arrays through `length` assignment.
        let Value::Number(new_length) = value else {
            return Ok(false);
        };
        if new_length.trunc() != new_length || !(0.0..4294967296.0).contains(&new_length) {
            return Ok(false);
        }
        let new_length = new_length as usize;
        agent[array].elements.resize(new_length, None);
        return Ok(true);
    }
    ordinary_set(agent, Object::Array(array), key, value, receiver)
}

pub(crate) fn array_define_own_property(
    agent: &mut Agent,
    array: Array,
    key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    if let PropertyKey::Integer(index) = key {
        if descriptor.is_accessor_descriptor() {
            return Ok(false);
        }
        array.define_indexed(
            agent,
            index as usize,
            descriptor.value.unwrap_or(Value::Undefined),
        );
        return Ok(true);
    }
    if key == BUILTIN_STRING_MEMORY.length.to_property_key() {
        let current = array_own_property(agent, array, key).unwrap();
        return Ok(
            crate::ecmascript::types::is_no_op_redefinition(&descriptor, &current),
        );
    }
    let backing = Object::Array(array).get_or_create_backing_object(agent);
    Ok(ordinary_define_own_property(agent, backing, key, descriptor))
}
