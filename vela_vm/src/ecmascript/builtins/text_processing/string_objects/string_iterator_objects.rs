// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String Iterator objects and the iterator prototypes they hang off.
//!
//! %IteratorPrototype% lives here as well: the String iterator is its only
//! consumer in this engine core.

use crate::ecmascript::abstract_operations::operations_on_iterator_objects::create_iter_result_object;
use crate::ecmascript::builders::ordinary_object_builder::OrdinaryObjectBuilder;
use crate::ecmascript::builtins::{ArgumentsList, Behaviour, Builtin};
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};
use crate::ecmascript::types::{
    IntoValue, Object, OrdinaryObject, PropertyKey, String, Value, BUILTIN_STRING_MEMORY,
};
use crate::heap::indexes::StringIteratorIndex;
use crate::heap::{CreateHeapData, WellKnownSymbolIndexes};

/// Handle to a String Iterator object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StringIterator(pub(crate) StringIteratorIndex);

impl StringIterator {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(StringIteratorIndex::from_index(index))
    }

    /// ### [22.1.5.1 CreateStringIterator ( string )](https://tc39.es/ecma262/#sec-createstringiterator)
    pub fn create(agent: &mut Agent, string: String) -> StringIterator {
        agent.heap.create(StringIteratorHeapData {
            object_index: None,
            string,
            next_index: 0,
        })
    }
}

impl From<StringIterator> for Object {
    fn from(value: StringIterator) -> Self {
        Object::StringIterator(value)
    }
}

impl From<StringIterator> for Value {
    fn from(value: StringIterator) -> Self {
        Value::StringIterator(value)
    }
}

#[derive(Debug, Clone)]
pub struct StringIteratorHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    /// [[IteratedString]]
    pub(crate) string: String,
    /// [[StringNextIndex]], as a byte offset into the UTF-8 store.
    pub(crate) next_index: usize,
}

struct StringIteratorPrototypeNext;
impl Builtin for StringIteratorPrototypeNext {
    const NAME: String = BUILTIN_STRING_MEMORY.next;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(next);
}

/// ### [22.1.5.2.1 %StringIteratorPrototype%.next ( )](https://tc39.es/ecma262/#sec-%stringiteratorprototype%.next)
///
/// Yields one code point per step as a one-code-point string.
fn next(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
    let Value::StringIterator(iterator) = this_value else {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::TypeError,
            "next method called on incompatible receiver",
        ));
    };
    let (string, position) = {
        let data = &agent[iterator];
        (data.string, data.next_index)
    };
    let text = string.as_str(agent);
    if position >= text.len() {
        return Ok(create_iter_result_object(agent, Value::Undefined, true).into_value());
    }
    let ch = text[position..].chars().next().unwrap();
    agent[iterator].next_index = position + ch.len_utf8();
    let value = String::from_code_point(ch).into_value();
    Ok(create_iter_result_object(agent, value, false).into_value())
}

struct IteratorPrototypeIterator;
impl Builtin for IteratorPrototypeIterator {
    const NAME: String = BUILTIN_STRING_MEMORY._Symbol_iterator_;
    const KEY: Option<PropertyKey> = Some(WellKnownSymbolIndexes::Iterator.to_property_key());
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(iterator_prototype_iterator);
}

/// ### [27.1.2.1 %IteratorPrototype% \[ %Symbol.iterator% \] ( )](https://tc39.es/ecma262/#sec-%iteratorprototype%-%symbol.iterator%)
fn iterator_prototype_iterator(
    _agent: &mut Agent,
    this_value: Value,
    _: ArgumentsList,
) -> JsResult<Value> {
    // 1. Return the this value.
    Ok(this_value)
}

pub(crate) fn create_iterator_prototype(
    agent: &mut Agent,
    object_prototype: OrdinaryObject,
) -> OrdinaryObject {
    OrdinaryObjectBuilder::new(agent)
        .with_prototype(object_prototype.into())
        .with_property_capacity(1)
        .with_builtin_function_property::<IteratorPrototypeIterator>()
        .build()
}

pub(crate) fn create_string_iterator_prototype(
    agent: &mut Agent,
    iterator_prototype: OrdinaryObject,
) -> OrdinaryObject {
    OrdinaryObjectBuilder::new(agent)
        .with_prototype(iterator_prototype.into())
        .with_property_capacity(1)
        .with_builtin_function_property::<StringIteratorPrototypeNext>()
        .build()
}
