// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::execution::{Agent, JsResult};
use crate::ecmascript::types::{
    IntoValue, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
    BUILTIN_STRING_MEMORY,
};
use crate::heap::indexes::BuiltinFunctionIndex;
use crate::heap::CreateHeapData;
use std::ops::Deref;

/// The argument list a native function receives. Absent arguments read as
/// undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArgumentsList<'_> {
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn =
    fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;

/// The native code behind a builtin function, with or without a
/// `[[Construct]]` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
}

impl Behaviour {
    pub(crate) fn is_constructor(&self) -> bool {
        matches!(self, Behaviour::Constructor(_))
    }
}

/// Compile-time description of one builtin function: its name, its
/// `length`, its behaviour, and the attributes it is installed with.
pub trait Builtin {
    const NAME: String;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// Set when the property key differs from `NAME`, e.g. for well-known
    /// symbol keyed methods.
    const KEY: Option<PropertyKey> = None;

    const WRITABLE: bool = true;
    const ENUMERABLE: bool = false;
    const CONFIGURABLE: bool = true;
}

/// Handle to a builtin function object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

impl BuiltinFunction {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(BuiltinFunctionIndex::from_index(index))
    }

    pub fn is_constructor(self, agent: &Agent) -> bool {
        agent[self].behaviour.is_constructor()
    }
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

impl From<BuiltinFunction> for Value {
    fn from(value: BuiltinFunction) -> Self {
        Value::BuiltinFunction(value)
    }
}

impl TryFrom<Value> for BuiltinFunction {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::BuiltinFunction(f) => Ok(f),
            _ => Err(()),
        }
    }
}

#[derive(Debug)]
pub struct BuiltinFunctionHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) length: u8,
    /// The value of the `name` property.
    pub(crate) initial_name: Option<String>,
    pub(crate) behaviour: Behaviour,
}

/// ### [10.3.3 CreateBuiltinFunction ( behaviour, length, name, … )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    length: u8,
    name: String,
) -> BuiltinFunction {
    agent.heap.create(BuiltinFunctionHeapData {
        object_index: None,
        length,
        initial_name: Some(name),
        behaviour,
    })
}

/// The `length` and `name` own properties, synthesized from the function
/// record: both non-writable, non-enumerable and configurable.
pub(crate) fn builtin_function_own_property(
    agent: &Agent,
    function: BuiltinFunction,
    key: PropertyKey,
) -> Option<PropertyDescriptor> {
    const ATTRIBUTES: PropertyAttributes = PropertyAttributes {
        writable: false,
        enumerable: false,
        configurable: true,
    };
    let data = &agent[function];
    if key == BUILTIN_STRING_MEMORY.length.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            Value::from(data.length as u32),
            ATTRIBUTES,
        ));
    }
    if key == BUILTIN_STRING_MEMORY.name.to_property_key() {
        let name = data.initial_name.unwrap_or(String::EMPTY_STRING);
        return Some(PropertyDescriptor::new_data(name.into_value(), ATTRIBUTES));
    }
    None
}
