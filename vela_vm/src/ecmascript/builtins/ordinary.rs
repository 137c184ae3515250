// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [10.1 Ordinary Object Internal Methods](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
//!
//! The ordinary implementations over the shape-backed property store.

pub(crate) mod shape;

use self::shape::{
    add_property_to_shape, reconfigure_shape_property, remove_property_from_shape,
    PropertyAttributes,
};
use crate::ecmascript::abstract_operations::operations_on_objects::call_function;
use crate::ecmascript::abstract_operations::testing_and_comparison::same_value;
use crate::ecmascript::execution::Agent;
use crate::ecmascript::execution::JsResult;
use crate::ecmascript::types::{
    IndexedEntry, Object, ObjectHeapData, OrdinaryObject, PropertyDescriptor, PropertyKey,
    PropertyValue, Value,
};
use crate::heap::CreateHeapData;

/// ### [10.1.13 GetPrototypeFromConstructor ( constructor, intrinsicDefaultProto )](https://tc39.es/ecma262/#sec-getprototypefromconstructor)
///
/// The sole caller is the String constructor, so the intrinsic default is
/// %String.prototype%.
pub(crate) fn get_prototype_from_constructor(
    agent: &mut Agent,
    constructor: Object,
) -> JsResult<Object> {
    use crate::ecmascript::abstract_operations::operations_on_objects::get;
    use crate::ecmascript::types::BUILTIN_STRING_MEMORY;
    // 2. Let proto be ? Get(constructor, "prototype").
    let proto = get(
        agent,
        constructor,
        BUILTIN_STRING_MEMORY.prototype.to_property_key(),
    )?;
    // 3. If proto is not an Object, use the intrinsic default.
    match Object::try_from(proto) {
        Ok(proto) => Ok(proto),
        Err(_) => Ok(Object::PrimitiveObject(
            agent.intrinsics().string_prototype(),
        )),
    }
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
pub fn ordinary_object_create(
    agent: &mut Agent,
    prototype: Option<Object>,
) -> OrdinaryObject {
    let shape = agent.heap.root_shape();
    agent.heap.create(ObjectHeapData::new(prototype, shape))
}

fn descriptor_from_slot(
    attributes: PropertyAttributes,
    value: PropertyValue,
) -> PropertyDescriptor {
    match value {
        PropertyValue::Data(value) => PropertyDescriptor::new_data(value, attributes),
        PropertyValue::Accessor { get, set } => PropertyDescriptor {
            value: None,
            writable: None,
            get,
            set,
            enumerable: Some(attributes.enumerable),
            configurable: Some(attributes.configurable),
        },
    }
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: OrdinaryObject,
    key: PropertyKey,
) -> Option<PropertyDescriptor> {
    let data = &agent[object];
    if let PropertyKey::Integer(index) = key {
        let entry = data.indexed.get(&index)?;
        return Some(descriptor_from_slot(entry.attributes, entry.value));
    }
    let (slot, attributes) = agent[data.shape].lookup(key)?;
    Some(descriptor_from_slot(attributes, data.values[slot as usize]))
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: OrdinaryObject,
    key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    let current = ordinary_get_own_property(agent, object, key);
    let Some(current) = current else {
        // 10.1.6.3 step 2: no current property; the object must be
        // extensible, and absent fields default to false/undefined.
        if !agent[object].extensible {
            return false;
        }
        let attributes = PropertyAttributes {
            writable: descriptor.writable.unwrap_or(false),
            enumerable: descriptor.enumerable.unwrap_or(false),
            configurable: descriptor.configurable.unwrap_or(false),
        };
        let value = if descriptor.is_accessor_descriptor() {
            PropertyValue::Accessor {
                get: descriptor.get,
                set: descriptor.set,
            }
        } else {
            PropertyValue::Data(descriptor.value.unwrap_or(Value::Undefined))
        };
        if let PropertyKey::Integer(index) = key {
            agent[object]
                .indexed
                .insert(index, IndexedEntry { attributes, value });
        } else {
            let shape = agent[object].shape;
            let cacheable = agent[object].transitions_enabled;
            let new_shape = add_property_to_shape(&mut agent.heap, shape, key, attributes, cacheable);
            let data = &mut agent[object];
            data.shape = new_shape;
            data.values.push(value);
        }
        return true;
    };

    // 10.1.6.3 step 3: every field absent is a no-op.
    if descriptor.is_empty() {
        return true;
    }

    // 10.1.6.3 step 4: validate against a non-configurable current property.
    if current.configurable == Some(false) {
        if descriptor.configurable == Some(true) {
            return false;
        }
        if descriptor
            .enumerable
            .is_some_and(|enumerable| Some(enumerable) != current.enumerable)
        {
            return false;
        }
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }
        if current.is_accessor_descriptor() {
            if descriptor.get.is_some() && descriptor.get != current.get {
                return false;
            }
            if descriptor.set.is_some() && descriptor.set != current.set {
                return false;
            }
        } else if current.writable == Some(false) {
            if descriptor.writable == Some(true) {
                return false;
            }
            if descriptor
                .value
                .is_some_and(|value| !same_value(value, current.value.unwrap()))
            {
                return false;
            }
        }
    }

    // Apply: merge the descriptor over the current property.
    let attributes = PropertyAttributes {
        writable: descriptor.writable.or(current.writable).unwrap_or(false),
        enumerable: descriptor.enumerable.or(current.enumerable).unwrap_or(false),
        configurable: descriptor
            .configurable
            .or(current.configurable)
            .unwrap_or(false),
    };
    let value = if descriptor.is_accessor_descriptor() {
        PropertyValue::Accessor {
            get: descriptor.get,
            set: descriptor.set,
        }
    } else if descriptor.is_generic_descriptor() && current.is_accessor_descriptor() {
        PropertyValue::Accessor {
            get: current.get,
            set: current.set,
        }
    } else {
        PropertyValue::Data(descriptor.value.or(current.value).unwrap_or(Value::Undefined))
    };

    if let PropertyKey::Integer(index) = key {
        agent[object]
            .indexed
            .insert(index, IndexedEntry { attributes, value });
        return true;
    }

    let shape = agent[object].shape;
    let (slot, current_attributes) = agent[shape].lookup(key).unwrap();
    if attributes != current_attributes {
        let new_shape = reconfigure_shape_property(&mut agent.heap, shape, slot, attributes);
        let data = &mut agent[object];
        data.shape = new_shape;
        // The layout has diverged from the shared transition chains.
        data.transitions_enabled = false;
    }
    agent[object].values[slot as usize] = value;
    true
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    let own_descriptor = match object.internal_get_own_property(agent, key) {
        Some(descriptor) => descriptor,
        None => {
            // 2. If ownDesc is undefined, walk the prototype chain; with no
            // prototype, behave as a default data property.
            if let Some(parent) = object.internal_get_prototype_of(agent) {
                return parent.internal_set(agent, key, value, receiver);
            }
            PropertyDescriptor {
                value: Some(Value::Undefined),
                writable: Some(true),
                get: None,
                set: None,
                enumerable: Some(true),
                configurable: Some(true),
            }
        }
    };
    // 3. If IsDataDescriptor(ownDesc) is true:
    if own_descriptor.is_data_descriptor() {
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }
        let Ok(receiver_object) = Object::try_from(receiver) else {
            return Ok(false);
        };
        if let Some(existing) = receiver_object.internal_get_own_property(agent, key) {
            if existing.is_accessor_descriptor() {
                return Ok(false);
            }
            if existing.writable == Some(false) {
                return Ok(false);
            }
            receiver_object.internal_define_own_property(
                agent,
                key,
                PropertyDescriptor::value_only(value),
            )
        } else {
            receiver_object.internal_define_own_property(
                agent,
                key,
                PropertyDescriptor::new_data(value, PropertyAttributes::DEFAULT),
            )
        }
    } else {
        // 4.-7. Accessor property: call the setter, if any.
        match own_descriptor.set {
            Some(setter) => {
                call_function(agent, setter, receiver, Some(&[value]))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(agent: &mut Agent, object: OrdinaryObject, key: PropertyKey) -> bool {
    if let PropertyKey::Integer(index) = key {
        let Some(entry) = agent[object].indexed.get(&index) else {
            return true;
        };
        if !entry.attributes.configurable {
            return false;
        }
        agent[object].indexed.remove(&index);
        return true;
    }
    let shape = agent[object].shape;
    let Some((slot, attributes)) = agent[shape].lookup(key) else {
        return true;
    };
    if !attributes.configurable {
        return false;
    }
    let new_shape = remove_property_from_shape(&mut agent.heap, shape, slot);
    let data = &mut agent[object];
    data.shape = new_shape;
    data.values.remove(slot as usize);
    data.transitions_enabled = false;
    true
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
///
/// Integer keys in ascending order, then named keys in insertion order.
pub(crate) fn ordinary_own_property_keys(
    agent: &Agent,
    object: OrdinaryObject,
) -> Vec<PropertyKey> {
    let data = &agent[object];
    let mut indexes: Vec<u32> = data.indexed.keys().copied().collect();
    indexes.sort_unstable();
    let mut keys: Vec<PropertyKey> = indexes.into_iter().map(PropertyKey::Integer).collect();
    keys.extend(agent[data.shape].keys().iter().map(|(key, _)| *key));
    keys
}
