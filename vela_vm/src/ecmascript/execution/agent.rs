// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Intrinsics, Realm, RealmIdentifier};
use crate::ecmascript::types::{ErrorHeapData, String, Value, BUILTIN_STRING_MEMORY};
use crate::heap::{CreateHeapData, Heap};

/// The result type of every fallible engine operation.
///
/// An `Err` in flight is the pending exception of the specification's
/// exception channel: each `?` is one short-circuit check, and the "no
/// value" sentinel never needs to be materialised.
pub type JsResult<T> = std::result::Result<T, JsError>;

/// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// The thrown value.
    pub fn value(self) -> Value {
        self.0
    }

    /// The error kind, when the thrown value is an engine error object.
    pub fn kind(self, agent: &Agent) -> Option<ExceptionType> {
        match self.0 {
            Value::Error(error) => Some(agent[error].kind),
            _ => None,
        }
    }

    /// The error message, when the thrown value is an engine error object.
    pub fn message(self, agent: &Agent) -> Option<String> {
        match self.0 {
            Value::Error(error) => agent[error].message,
            _ => None,
        }
    }
}

/// Error kinds of the native error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    EvalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    UriError,
}

impl ExceptionType {
    /// The `name` of the corresponding native error constructor.
    pub(crate) fn name_string(self) -> String {
        match self {
            ExceptionType::Error => BUILTIN_STRING_MEMORY.Error,
            ExceptionType::EvalError => BUILTIN_STRING_MEMORY.EvalError,
            ExceptionType::RangeError => BUILTIN_STRING_MEMORY.RangeError,
            ExceptionType::ReferenceError => BUILTIN_STRING_MEMORY.ReferenceError,
            ExceptionType::SyntaxError => BUILTIN_STRING_MEMORY.SyntaxError,
            ExceptionType::TypeError => BUILTIN_STRING_MEMORY.TypeError,
            ExceptionType::UriError => BUILTIN_STRING_MEMORY.URIError,
        }
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
///
/// The agent owns the heap and tracks the running realm. Script execution
/// is cooperative and single-threaded: a native method runs to completion
/// before any other script-visible operation begins.
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) current_realm: Option<RealmIdentifier>,
}

impl Agent {
    pub fn new() -> Self {
        Self {
            heap: Heap::new(),
            current_realm: None,
        }
    }

    pub fn current_realm_id(&self) -> RealmIdentifier {
        self.current_realm.expect("no realm has been created")
    }

    pub fn current_realm(&self) -> &Realm {
        &self[self.current_realm_id()]
    }

    pub(crate) fn intrinsics(&self) -> &Intrinsics {
        &self.current_realm().intrinsics
    }

    /// Throw an exception with a statically known message.
    pub fn throw_exception_with_static_message(
        &mut self,
        kind: ExceptionType,
        message: &'static str,
    ) -> JsError {
        let message = String::from_static_str(self, message);
        let error = self.heap.create(ErrorHeapData::new(kind, Some(message)));
        JsError::new(Value::Error(error))
    }

    /// Throw an exception with a computed message.
    pub fn throw_exception(&mut self, kind: ExceptionType, message: std::string::String) -> JsError {
        let message = String::from_string(self, message);
        let error = self.heap.create(ErrorHeapData::new(kind, Some(message)));
        JsError::new(Value::Error(error))
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
