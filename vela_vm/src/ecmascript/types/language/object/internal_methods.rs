// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
//!
//! The essential internal methods, dispatched over the object kinds. Exotic
//! objects first consult their synthesized own properties and then fall
//! back to their backing ordinary object; the prototype walk itself is
//! shared by all kinds.

use super::{Object, PropertyKey};
use crate::ecmascript::abstract_operations::operations_on_objects::call_function;
use crate::ecmascript::builtins::array::{
    array_define_own_property, array_own_property, array_set,
};
use crate::ecmascript::builtins::builtin_function::builtin_function_own_property;
use crate::ecmascript::builtins::error::error_own_property;
use crate::ecmascript::builtins::ordinary::{
    ordinary_define_own_property, ordinary_delete, ordinary_get_own_property, ordinary_object_create,
    ordinary_own_property_keys, ordinary_set,
};
use crate::ecmascript::builtins::primitive_objects::{
    primitive_object_own_property, primitive_object_own_string_keys, PrimitiveObjectData,
};
use crate::ecmascript::builtins::regexp::{regexp_own_property, regexp_set};
use crate::ecmascript::execution::{Agent, JsResult, ProtoIntrinsics};
use crate::ecmascript::types::{OrdinaryObject, PropertyDescriptor, Value, BUILTIN_STRING_MEMORY};

impl Object {
    /// The backing ordinary object of an exotic object, if one has been
    /// created.
    pub(crate) fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        match self {
            Object::Object(o) => Some(o),
            Object::Array(a) => agent[a].object_index,
            Object::BuiltinFunction(f) => agent[f].object_index,
            Object::Error(e) => agent[e].object_index,
            Object::PrimitiveObject(p) => agent[p].object_index,
            Object::RegExp(r) => agent[r].object_index,
            Object::StringIterator(i) => agent[i].object_index,
        }
    }

    pub(crate) fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        if let Some(backing) = self.get_backing_object(agent) {
            return backing;
        }
        let prototype = self.default_prototype(agent);
        let backing = ordinary_object_create(agent, Some(prototype));
        match self {
            Object::Object(_) => unreachable!(),
            Object::Array(a) => agent[a].object_index = Some(backing),
            Object::BuiltinFunction(f) => agent[f].object_index = Some(backing),
            Object::Error(e) => agent[e].object_index = Some(backing),
            Object::PrimitiveObject(p) => agent[p].object_index = Some(backing),
            Object::RegExp(r) => agent[r].object_index = Some(backing),
            Object::StringIterator(i) => agent[i].object_index = Some(backing),
        }
        backing
    }

    fn default_prototype(self, agent: &Agent) -> Object {
        let proto_intrinsics = match self {
            Object::Object(_) => unreachable!("ordinary objects carry their own prototype"),
            Object::Array(_) => ProtoIntrinsics::Array,
            Object::BuiltinFunction(_) => ProtoIntrinsics::Function,
            Object::Error(_) => ProtoIntrinsics::Error,
            Object::PrimitiveObject(p) => match agent[p].data {
                PrimitiveObjectData::String(_) | PrimitiveObjectData::SmallString(_) => {
                    ProtoIntrinsics::String
                }
                _ => ProtoIntrinsics::Object,
            },
            Object::RegExp(_) => ProtoIntrinsics::RegExp,
            Object::StringIterator(_) => ProtoIntrinsics::StringIterator,
        };
        agent.intrinsics().get(proto_intrinsics)
    }

    /// Own properties an exotic object synthesizes from its heap data,
    /// bypassing the backing object.
    fn exotic_own_property(self, agent: &Agent, key: PropertyKey) -> Option<PropertyDescriptor> {
        match self {
            Object::Object(_) => None,
            Object::Array(a) => array_own_property(agent, a, key),
            Object::BuiltinFunction(f) => builtin_function_own_property(agent, f, key),
            Object::Error(e) => error_own_property(agent, e, key),
            Object::PrimitiveObject(p) => primitive_object_own_property(agent, p, key),
            Object::RegExp(r) => regexp_own_property(agent, r, key),
            Object::StringIterator(_) => None,
        }
    }

    /// ### [10.1.1 \[\[GetPrototypeOf\]\] ( )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-getprototypeof)
    pub fn internal_get_prototype_of(self, agent: &Agent) -> Option<Object> {
        if let Object::Object(o) = self {
            return agent[o].prototype;
        }
        match self.get_backing_object(agent) {
            Some(backing) => agent[backing].prototype,
            None => Some(self.default_prototype(agent)),
        }
    }

    /// ### [10.1.3 \[\[IsExtensible\]\] ( )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-isextensible)
    pub fn internal_is_extensible(self, agent: &Agent) -> bool {
        match self.get_backing_object(agent) {
            Some(backing) => agent[backing].extensible,
            None => true,
        }
    }

    /// ### [10.1.4 \[\[PreventExtensions\]\] ( )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-preventextensions)
    pub fn internal_prevent_extensions(self, agent: &mut Agent) -> bool {
        let backing = self.get_or_create_backing_object(agent);
        agent[backing].extensible = false;
        true
    }

    /// ### [10.1.5 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-getownproperty-p)
    pub fn internal_get_own_property(
        self,
        agent: &Agent,
        key: PropertyKey,
    ) -> Option<PropertyDescriptor> {
        if let Object::Object(o) = self {
            return ordinary_get_own_property(agent, o, key);
        }
        if let Some(descriptor) = self.exotic_own_property(agent, key) {
            return Some(descriptor);
        }
        let backing = self.get_backing_object(agent)?;
        ordinary_get_own_property(agent, backing, key)
    }

    /// ### [10.1.6 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-defineownproperty-p-desc)
    pub fn internal_define_own_property(
        self,
        agent: &mut Agent,
        key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        match self {
            Object::Object(o) => Ok(ordinary_define_own_property(agent, o, key, descriptor)),
            Object::Array(a) => array_define_own_property(agent, a, key, descriptor),
            _ => {
                if let Some(current) = self.exotic_own_property(agent, key) {
                    // Synthesized properties have no mutable storage; only a
                    // no-op redefinition can succeed.
                    return Ok(is_no_op_redefinition(&descriptor, &current));
                }
                let backing = self.get_or_create_backing_object(agent);
                Ok(ordinary_define_own_property(agent, backing, key, descriptor))
            }
        }
    }

    /// ### [10.1.7 \[\[HasProperty\]\] ( P )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-hasproperty-p)
    pub fn internal_has_property(self, agent: &Agent, key: PropertyKey) -> bool {
        if self.internal_get_own_property(agent, key).is_some() {
            return true;
        }
        match self.internal_get_prototype_of(agent) {
            Some(parent) => parent.internal_has_property(agent, key),
            None => false,
        }
    }

    /// ### [10.1.8 \[\[Get\]\] ( P, Receiver )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-get-p-receiver)
    pub fn internal_get(
        self,
        agent: &mut Agent,
        key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        // 1. Let desc be ? O.[[GetOwnProperty]](P).
        if let Some(descriptor) = self.internal_get_own_property(agent, key) {
            // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
            if let Some(value) = descriptor.value {
                return Ok(value);
            }
            // 4.-7. Accessor: call the getter with Receiver, or undefined
            // if there is none.
            return match descriptor.get {
                Some(getter) => call_function(agent, getter, receiver, None),
                None => Ok(Value::Undefined),
            };
        }
        // 2. If desc is undefined, follow the prototype chain.
        match self.internal_get_prototype_of(agent) {
            Some(parent) => parent.internal_get(agent, key, receiver),
            None => Ok(Value::Undefined),
        }
    }

    /// ### [10.1.9 \[\[Set\]\] ( P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-set-p-v-receiver)
    pub fn internal_set(
        self,
        agent: &mut Agent,
        key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        match self {
            Object::Array(a) => array_set(agent, a, key, value, receiver),
            Object::RegExp(r) if key == BUILTIN_STRING_MEMORY.lastIndex.to_property_key() => {
                regexp_set(agent, r, value)
            }
            _ => ordinary_set(agent, self, key, value, receiver),
        }
    }

    /// ### [10.1.10 \[\[Delete\]\] ( P )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-delete-p)
    pub fn internal_delete(self, agent: &mut Agent, key: PropertyKey) -> bool {
        if let Object::Object(o) = self {
            return ordinary_delete(agent, o, key);
        }
        if let Some(current) = self.exotic_own_property(agent, key) {
            return current.configurable == Some(true);
        }
        match self.get_backing_object(agent) {
            Some(backing) => ordinary_delete(agent, backing, key),
            None => true,
        }
    }

    /// ### [10.1.11 \[\[OwnPropertyKeys\]\] ( )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-ownpropertykeys)
    pub fn internal_own_property_keys(self, agent: &Agent) -> Vec<PropertyKey> {
        let mut keys = match self {
            Object::Object(o) => return ordinary_own_property_keys(agent, o),
            Object::Array(a) => {
                let mut keys: Vec<PropertyKey> = agent[a]
                    .elements
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.is_some())
                    .map(|(i, _)| PropertyKey::Integer(i as u32))
                    .collect();
                keys.push(BUILTIN_STRING_MEMORY.length.to_property_key());
                keys
            }
            Object::BuiltinFunction(_) => vec![
                BUILTIN_STRING_MEMORY.length.to_property_key(),
                BUILTIN_STRING_MEMORY.name.to_property_key(),
            ],
            Object::Error(_) => vec![
                BUILTIN_STRING_MEMORY.name.to_property_key(),
                BUILTIN_STRING_MEMORY.message.to_property_key(),
            ],
            Object::PrimitiveObject(p) => primitive_object_own_string_keys(agent, p),
            Object::RegExp(_) => vec![
                BUILTIN_STRING_MEMORY.source.to_property_key(),
                BUILTIN_STRING_MEMORY.flags.to_property_key(),
                BUILTIN_STRING_MEMORY.lastIndex.to_property_key(),
            ],
            Object::StringIterator(_) => Vec::new(),
        };
        if let Some(backing) = self.get_backing_object(agent) {
            keys.extend(ordinary_own_property_keys(agent, backing));
        }
        keys
    }
}

/// Whether redefining `current` with `descriptor` changes nothing.
pub(crate) fn is_no_op_redefinition(
    descriptor: &PropertyDescriptor,
    current: &PropertyDescriptor,
) -> bool {
    if let Some(value) = descriptor.value {
        match current.value {
            Some(current_value) => {
                if !crate::ecmascript::abstract_operations::testing_and_comparison::same_value(
                    value,
                    current_value,
                ) {
                    return false;
                }
            }
            None => return false,
        }
    }
    (descriptor.writable.is_none() || descriptor.writable == current.writable)
        && (descriptor.enumerable.is_none() || descriptor.enumerable == current.enumerable)
        && (descriptor.configurable.is_none() || descriptor.configurable == current.configurable)
        && descriptor.get.is_none()
        && descriptor.set.is_none()
}
