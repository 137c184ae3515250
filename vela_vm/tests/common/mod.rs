// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![allow(dead_code)]

use vela_vm::ecmascript::abstract_operations::operations_on_objects::{call, get, get_v};
use vela_vm::ecmascript::types::{Object, String, Value};
use vela_vm::{initialize_host_defined_realm, Agent, BuiltinFunction, JsResult, PropertyKey};

pub fn agent_with_realm() -> Agent {
    let mut agent = Agent::new();
    initialize_host_defined_realm(&mut agent);
    agent
}

pub fn string_value(agent: &mut Agent, text: &str) -> Value {
    Value::from_str(agent, text)
}

/// Look the method up on the receiver (through its prototype chain) and
/// call it, the way the interpreter would.
pub fn call_method(
    agent: &mut Agent,
    receiver: Value,
    name: &str,
    args: &[Value],
) -> JsResult<Value> {
    let key = PropertyKey::from_str(agent, name);
    let method = get_v(agent, receiver, key)?;
    call(agent, method, receiver, Some(args))
}

/// Call a prototype method on a Rust string receiver and unwrap.
pub fn run_method(agent: &mut Agent, receiver: &str, name: &str, args: &[Value]) -> Value {
    let receiver = string_value(agent, receiver);
    call_method(agent, receiver, name, args).unwrap()
}

pub fn as_string(agent: &Agent, value: Value) -> std::string::String {
    String::try_from(value)
        .expect("expected a string value")
        .as_str(agent)
        .to_string()
}

pub fn as_number(value: Value) -> f64 {
    match value {
        Value::Number(n) => n,
        other => panic!("expected a number, got {:?}", other),
    }
}

pub fn as_bool(value: Value) -> bool {
    match value {
        Value::Boolean(b) => b,
        other => panic!("expected a boolean, got {:?}", other),
    }
}

/// The `String` constructor, read off the global object.
pub fn string_constructor(agent: &mut Agent) -> BuiltinFunction {
    let realm = agent.current_realm_id();
    let global = agent[realm].global_object();
    let key = PropertyKey::from_str(agent, "String");
    let value = get(agent, Object::Object(global), key).unwrap();
    BuiltinFunction::try_from(value).expect("String is not installed on the global object")
}

/// Call a static method of the `String` constructor.
pub fn call_static(agent: &mut Agent, name: &str, args: &[Value]) -> JsResult<Value> {
    let constructor = string_constructor(agent);
    call_method(agent, constructor.into(), name, args)
}
