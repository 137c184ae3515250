// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::types::{PropertyKey, PropertyValue, Value};
use crate::heap::object_entry::ObjectEntry;

#[doc(hidden)]
#[derive(Default, Clone, Copy)]
pub struct NoKey;

#[doc(hidden)]
#[derive(Default, Clone, Copy)]
pub struct NoDefinition;

#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct CreatorKey(PropertyKey);

#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct CreatorValue(Value);

/// Typestate builder for one property of an intrinsic object.
pub struct PropertyBuilder<K, D> {
    key: K,
    definition: D,
    enumerable: bool,
    configurable: bool,
}

impl PropertyBuilder<NoKey, NoDefinition> {
    pub(crate) fn new() -> Self {
        PropertyBuilder {
            key: NoKey,
            definition: NoDefinition,
            enumerable: true,
            configurable: true,
        }
    }
}

impl<D> PropertyBuilder<NoKey, D> {
    pub fn with_key(self, key: PropertyKey) -> PropertyBuilder<CreatorKey, D> {
        PropertyBuilder {
            key: CreatorKey(key),
            definition: self.definition,
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }
}

impl<K> PropertyBuilder<K, NoDefinition> {
    pub fn with_value(self, value: Value) -> PropertyBuilder<K, CreatorValue> {
        PropertyBuilder {
            key: self.key,
            definition: CreatorValue(value),
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }
}

impl<K, D> PropertyBuilder<K, D> {
    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }
}

impl PropertyBuilder<CreatorKey, CreatorValue> {
    pub(crate) fn build(self) -> ObjectEntry {
        ObjectEntry {
            key: self.key.0,
            attributes: PropertyAttributes {
                writable: true,
                enumerable: self.enumerable,
                configurable: self.configurable,
            },
            value: PropertyValue::Data(self.definition.0),
        }
    }
}
