// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{HeapString, Object, OrdinaryObject, String, Symbol};
use crate::ecmascript::builtins::{
    array::Array,
    primitive_objects::PrimitiveObject,
    regexp::RegExp,
    text_processing::string_objects::string_iterator_objects::StringIterator,
    BuiltinFunction,
};
use crate::ecmascript::execution::Agent;
use crate::ecmascript::types::Error;
use small_string::SmallString;

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// The tagged value union. Strings and numbers split into an inline and a
/// heap-allocated variant; everything else is either an immediate or a typed
/// index into a heap arena. The "no value" sentinel of the exception
/// protocol is not a variant: an in-flight `JsError` takes its place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(HeapString),
    SmallString(SmallString),

    /// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
    Symbol(Symbol),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    Number(f64),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    Object(OrdinaryObject),

    // Exotic objects.
    Array(Array),
    BuiltinFunction(BuiltinFunction),
    Error(Error),
    PrimitiveObject(PrimitiveObject),
    RegExp(RegExp),
    StringIterator(StringIterator),
}

impl Value {
    pub fn nan() -> Self {
        Value::Number(f64::NAN)
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    /// Undefined or null.
    pub fn is_nullish(self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Value::String(_) | Value::SmallString(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_object(self) -> bool {
        Object::try_from(self).is_ok()
    }

    /// Allocate a string value from a borrowed Rust string.
    pub fn from_str(agent: &mut Agent, string: &str) -> Value {
        String::from_str(agent, string).into_value()
    }

    /// Allocate a string value from an owned Rust string.
    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Value {
        String::from_string(agent, string).into_value()
    }
}

/// Convenience conversion into [`Value`], mirroring the `Into` story of the
/// handle types.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl<T> IntoValue for T
where
    T: Into<Value>,
{
    fn into_value(self) -> Value {
        self.into()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<SmallString> for Value {
    fn from(value: SmallString) -> Self {
        Value::SmallString(value)
    }
}

impl From<HeapString> for Value {
    fn from(value: HeapString) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}
