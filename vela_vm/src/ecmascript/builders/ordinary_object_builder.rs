// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::property_builder::{NoDefinition, NoKey, PropertyBuilder};
use crate::ecmascript::builtins::ordinary::shape::{add_property_to_shape, PropertyAttributes};
use crate::ecmascript::builtins::{create_builtin_function, Builtin, BuiltinFunction};
use crate::ecmascript::execution::Agent;
use crate::ecmascript::types::{
    IntoValue, Object, ObjectHeapData, OrdinaryObject, PropertyKey, PropertyValue,
    BUILTIN_STRING_MEMORY,
};
use crate::heap::object_entry::ObjectEntry;
use crate::heap::CreateHeapData;

/// Builder for intrinsic ordinary objects: a prototype and a fixed set of
/// properties, laid out through the shared shape chains.
pub struct OrdinaryObjectBuilder<'agent> {
    agent: &'agent mut Agent,
    prototype: Option<Object>,
    entries: Vec<ObjectEntry>,
}

impl<'agent> OrdinaryObjectBuilder<'agent> {
    pub fn new(agent: &'agent mut Agent) -> Self {
        Self {
            agent,
            prototype: None,
            entries: Vec::new(),
        }
    }

    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn with_property_capacity(mut self, capacity: usize) -> Self {
        self.entries.reserve(capacity);
        self
    }

    /// Install a builtin function valued property described by `T`.
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let function = create_builtin_function(self.agent, T::BEHAVIOUR, T::LENGTH, T::NAME);
        let key = T::KEY.unwrap_or_else(|| T::NAME.to_property_key());
        self.entries.push(ObjectEntry {
            key,
            attributes: PropertyAttributes {
                writable: T::WRITABLE,
                enumerable: T::ENUMERABLE,
                configurable: T::CONFIGURABLE,
            },
            value: PropertyValue::Data(function.into_value()),
        });
        self
    }

    /// Install the `constructor` back-reference.
    pub fn with_constructor_property(mut self, constructor: BuiltinFunction) -> Self {
        self.entries.push(ObjectEntry {
            key: BUILTIN_STRING_MEMORY.constructor.to_property_key(),
            attributes: PropertyAttributes::BUILTIN,
            value: PropertyValue::Data(constructor.into_value()),
        });
        self
    }

    pub fn with_property(
        mut self,
        creator: impl FnOnce(PropertyBuilder<NoKey, NoDefinition>) -> ObjectEntry,
    ) -> Self {
        let entry = creator(PropertyBuilder::new());
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> OrdinaryObject {
        let mut data = ObjectHeapData::new(self.prototype, self.agent.heap.root_shape());
        data.values.reserve_exact(self.entries.len());
        for entry in &self.entries {
            debug_assert!(!matches!(entry.key, PropertyKey::Integer(_)));
            data.shape = add_property_to_shape(
                &mut self.agent.heap,
                data.shape,
                entry.key,
                entry.attributes,
                true,
            );
            data.values.push(entry.value);
        }
        self.agent.heap.create(data)
    }
}
