// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::execution::{Agent, ExceptionType};
use crate::ecmascript::types::{
    IntoValue, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
    BUILTIN_STRING_MEMORY,
};
use crate::heap::indexes::ErrorIndex;

/// Handle to an error object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Error(pub(crate) ErrorIndex);

impl Error {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(ErrorIndex::from_index(index))
    }

    pub fn kind(self, agent: &Agent) -> ExceptionType {
        agent[self].kind
    }

    pub fn message(self, agent: &Agent) -> Option<String> {
        agent[self].message
    }
}

impl From<Error> for Object {
    fn from(value: Error) -> Self {
        Object::Error(value)
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Error(value)
    }
}

#[derive(Debug, Clone)]
pub struct ErrorHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
}

impl ErrorHeapData {
    pub(crate) fn new(kind: ExceptionType, message: Option<String>) -> Self {
        Self {
            object_index: None,
            kind,
            message,
        }
    }
}

/// The `name` and `message` own properties, synthesized from the error
/// record.
pub(crate) fn error_own_property(
    agent: &Agent,
    error: Error,
    key: PropertyKey,
) -> Option<PropertyDescriptor> {
    let data = &agent[error];
    if key == BUILTIN_STRING_MEMORY.name.to_property_key() {
        return Some(PropertyDescriptor::new_data(
            data.kind.name_string().into_value(),
            PropertyAttributes::SEALED,
        ));
    }
    if key == BUILTIN_STRING_MEMORY.message.to_property_key() {
        let message = data.message?;
        return Some(PropertyDescriptor::new_data(
            message.into_value(),
            PropertyAttributes::SEALED,
        ));
    }
    None
}
