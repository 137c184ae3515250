// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boxed primitive wrappers: the objects produced by `ToObject` on
//! primitives and by `new String(…)`. Wrappers around string data behave
//! as String exotic objects, exposing `length` and per-code-point indexed
//! properties.

use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::execution::Agent;
use crate::ecmascript::types::{
    HeapString, IntoValue, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Symbol,
    Value, BUILTIN_STRING_MEMORY,
};
use crate::heap::indexes::PrimitiveObjectIndex;
use small_string::SmallString;

/// Handle to a boxed primitive object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PrimitiveObject(pub(crate) PrimitiveObjectIndex);

impl PrimitiveObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(PrimitiveObjectIndex::from_index(index))
    }

    /// The wrapped string, when this is a String object.
    pub fn string_data(self, agent: &Agent) -> Option<String> {
        match agent[self].data {
            PrimitiveObjectData::String(s) => Some(String::String(s)),
            PrimitiveObjectData::SmallString(s) => Some(String::SmallString(s)),
            _ => None,
        }
    }
}

impl From<PrimitiveObject> for Object {
    fn from(value: PrimitiveObject) -> Self {
        Object::PrimitiveObject(value)
    }
}

impl From<PrimitiveObject> for Value {
    fn from(value: PrimitiveObject) -> Self {
        Value::PrimitiveObject(value)
    }
}

/// The [[BooleanData]], [[NumberData]], [[StringData]] or [[SymbolData]]
/// internal slot.
#[derive(Debug, Clone, Copy)]
pub enum PrimitiveObjectData {
    Boolean(bool),
    Number(f64),
    SmallString(SmallString),
    String(HeapString),
    Symbol(Symbol),
}

#[derive(Debug, Clone)]
pub struct PrimitiveObjectHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) data: PrimitiveObjectData,
}

impl PrimitiveObjectHeapData {
    pub(crate) fn new(data: PrimitiveObjectData) -> Self {
        Self {
            object_index: None,
            data,
        }
    }

    pub(crate) fn new_string(string: String) -> Self {
        match string {
            String::String(s) => Self::new(PrimitiveObjectData::String(s)),
            String::SmallString(s) => Self::new(PrimitiveObjectData::SmallString(s)),
        }
    }
}

/// ### [10.4.3.4 StringCreate ( value, prototype )](https://tc39.es/ecma262/#sec-stringcreate)
pub(crate) fn string_create(agent: &mut Agent, value: String, prototype: Object) -> PrimitiveObject {
    use crate::ecmascript::builtins::ordinary::ordinary_object_create;
    use crate::heap::CreateHeapData;
    // 1.-7. A String exotic object with [[StringData]] set to value; the
    // backing object carries the resolved prototype.
    let object: PrimitiveObject = agent.heap.create(PrimitiveObjectHeapData::new_string(value));
    let backing = ordinary_object_create(agent, Some(prototype));
    agent[object].object_index = Some(backing);
    object
}

/// ### [10.4.3.5 StringGetOwnProperty ( S, P )](https://tc39.es/ecma262/#sec-stringgetownproperty)
///
/// `length` and the indexed one-code-point properties of a String object.
pub(crate) fn primitive_object_own_property(
    agent: &Agent,
    object: PrimitiveObject,
    key: PropertyKey,
) -> Option<PropertyDescriptor> {
    let string = object.string_data(agent)?;
    if key == BUILTIN_STRING_MEMORY.length.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            Value::Number(string.code_point_length(agent) as f64),
            PropertyAttributes::SEALED,
        ));
    }
    if let PropertyKey::Integer(index) = key {
        let ch = string.as_str(agent).chars().nth(index as usize)?;
        return Some(PropertyDescriptor::new_data(
            String::from_code_point(ch).into_value(),
            PropertyAttributes {
                writable: false,
                enumerable: true,
                configurable: false,
            },
        ));
    }
    None
}

/// The synthesized own keys of a String object, for integrity-level
/// checks.
pub(crate) fn primitive_object_own_string_keys(
    agent: &Agent,
    object: PrimitiveObject,
) -> Vec<PropertyKey> {
    let Some(string) = object.string_data(agent) else {
        return Vec::new();
    };
    let mut keys: Vec<PropertyKey> = (0..string.code_point_length(agent) as u32)
        .map(PropertyKey::Integer)
        .collect();
    keys.push(BUILTIN_STRING_MEMORY.length.to_property_key());
    keys
}
