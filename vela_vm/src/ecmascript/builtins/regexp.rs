// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The RegExp collaborator surface. Pattern compilation and matching live
//! in an external engine; the string builtins only need `RegExpCreate` and
//! the `source`/`flags`/`lastIndex` properties of the created object.

use crate::ecmascript::abstract_operations::type_conversion::to_string;
use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};
use crate::ecmascript::types::{
    IntoValue, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
    BUILTIN_STRING_MEMORY,
};
use crate::heap::indexes::RegExpIndex;
use crate::heap::CreateHeapData;

/// Handle to a RegExp object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RegExp(pub(crate) RegExpIndex);

impl RegExp {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(RegExpIndex::from_index(index))
    }

    pub fn source(self, agent: &Agent) -> String {
        agent[self].original_source
    }

    pub fn flags(self, agent: &Agent) -> String {
        agent[self].original_flags
    }
}

impl From<RegExp> for Object {
    fn from(value: RegExp) -> Self {
        Object::RegExp(value)
    }
}

impl From<RegExp> for Value {
    fn from(value: RegExp) -> Self {
        Value::RegExp(value)
    }
}

#[derive(Debug, Clone)]
pub struct RegExpHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    /// [[OriginalSource]]
    pub(crate) original_source: String,
    /// [[OriginalFlags]]
    pub(crate) original_flags: String,
    pub(crate) last_index: f64,
}

/// ### [22.2.3.2.4 RegExpCreate ( P, F )](https://tc39.es/ecma262/#sec-regexpcreate)
///
/// Builds the RegExp record without compiling the pattern. Flag validation
/// is the one piece of `[[RegExpMatcher]]` setup that must happen here,
/// since it throws before any matching could be attempted.
pub fn reg_exp_create(
    agent: &mut Agent,
    pattern: Value,
    flags: Option<String>,
) -> JsResult<RegExp> {
    let source = if pattern.is_undefined() {
        String::EMPTY_STRING
    } else {
        to_string(agent, pattern)?
    };
    let flags = flags.unwrap_or(String::EMPTY_STRING);
    let mut seen = [false; 6];
    let invalid = flags.as_str(agent).chars().any(|flag| {
        let index = match flag {
            'g' => 0,
            'i' => 1,
            'm' => 2,
            's' => 3,
            'u' => 4,
            'y' => 5,
            _ => return true,
        };
        core::mem::replace(&mut seen[index], true)
    });
    if invalid {
        return Err(agent.throw_exception_with_static_message(
            ExceptionType::SyntaxError,
            "Invalid RegExp flags",
        ));
    }
    Ok(agent.heap.create(RegExpHeapData {
        object_index: None,
        original_source: source,
        original_flags: flags,
        last_index: 0.0,
    }))
}

/// `source`, `flags` and `lastIndex`, synthesized from the record.
pub(crate) fn regexp_own_property(
    agent: &Agent,
    regexp: RegExp,
    key: PropertyKey,
) -> Option<PropertyDescriptor> {
    let data = &agent[regexp];
    if key == BUILTIN_STRING_MEMORY.source.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            data.original_source.into_value(),
            PropertyAttributes::SEALED,
        ));
    }
    if key == BUILTIN_STRING_MEMORY.flags.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            data.original_flags.into_value(),
            PropertyAttributes::SEALED,
        ));
    }
    if key == BUILTIN_STRING_MEMORY.lastIndex.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            Value::Number(data.last_index),
            PropertyAttributes {
                writable: true,
                enumerable: false,
                configurable: false,
            },
        ));
    }
    None
}

/// Store into the writable `lastIndex` slot.
pub(crate) fn regexp_set(agent: &mut Agent, regexp: RegExp, value: Value) -> JsResult<bool> {
    let number = crate::ecmascript::abstract_operations::type_conversion::to_number(agent, value)?;
    agent[regexp].last_index = number;
    Ok(true)
}
