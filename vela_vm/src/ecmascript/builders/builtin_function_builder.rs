// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::ordinary::shape::{add_property_to_shape, PropertyAttributes};
use crate::ecmascript::builtins::{create_builtin_function, Builtin, BuiltinFunction};
use crate::ecmascript::execution::Agent;
use crate::ecmascript::types::{
    IntoValue, Object, ObjectHeapData, PropertyValue, String, BUILTIN_STRING_MEMORY,
};
use crate::heap::object_entry::ObjectEntry;
use crate::heap::CreateHeapData;

/// Builder for intrinsic builtin functions that carry own properties
/// beyond the synthesized `length` and `name`.
pub struct BuiltinFunctionBuilder<'agent> {
    agent: &'agent mut Agent,
    behaviour: crate::ecmascript::builtins::Behaviour,
    length: u8,
    name: String,
    prototype: Option<Object>,
    entries: Vec<ObjectEntry>,
}

impl<'agent> BuiltinFunctionBuilder<'agent> {
    pub fn new<T: Builtin>(agent: &'agent mut Agent) -> Self {
        Self {
            agent,
            behaviour: T::BEHAVIOUR,
            length: T::LENGTH,
            name: T::NAME,
            prototype: None,
            entries: Vec::new(),
        }
    }

    /// The `[[Prototype]]` of the function object itself, normally
    /// %Function.prototype%.
    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn with_property_capacity(mut self, capacity: usize) -> Self {
        self.entries.reserve(capacity);
        self
    }

    /// Install the non-writable, non-configurable `prototype` property.
    pub fn with_prototype_property(mut self, prototype: Object) -> Self {
        self.entries.push(ObjectEntry {
            key: BUILTIN_STRING_MEMORY.prototype.to_property_key(),
            attributes: PropertyAttributes::SEALED,
            value: PropertyValue::Data(prototype.into_value()),
        });
        self
    }

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

    pub fn build(self) -> BuiltinFunction {
        let function = create_builtin_function(self.agent, self.behaviour, self.length, self.name);
        if !self.entries.is_empty() || self.prototype.is_some() {
            let mut data = ObjectHeapData::new(self.prototype, self.agent.heap.root_shape());
            data.values.reserve_exact(self.entries.len());
            for entry in &self.entries {
                data.shape = add_property_to_shape(
                    &mut self.agent.heap,
                    data.shape,
                    entry.key,
                    entry.attributes,
                    true,
                );
                data.values.push(entry.value);
            }
            let backing = self.agent.heap.create(data);
            self.agent[function].object_index = Some(backing);
        }
        function
    }
}
