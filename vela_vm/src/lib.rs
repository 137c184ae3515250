// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # The Vela VM String builtin core
//!
//! The `String` constructor and prototype of the Vela JavaScript engine,
//! together with the runtime substrate those methods stand on: the tagged
//! value representation, the coercion library, the exception channel, and
//! the shape-backed object model.
//!
//! ```
//! use vela_vm::{initialize_host_defined_realm, Agent};
//!
//! let mut agent = Agent::new();
//! let realm = initialize_host_defined_realm(&mut agent);
//! let global = agent[realm].global_object();
//! # let _ = global;
//! ```

pub mod ecmascript;
pub mod heap;

pub use ecmascript::builtins::text_processing::string_objects::{
    create_string_constructor, install_on_global,
};
pub use ecmascript::builtins::{
    create_builtin_function, ArgumentsList, Behaviour, Builtin, BuiltinFunction,
};
pub use ecmascript::execution::{
    initialize_host_defined_realm, Agent, ExceptionType, JsError, JsResult, Realm, RealmIdentifier,
};
pub use ecmascript::types::{Object, PropertyKey, String, Value};
pub use heap::Heap;
pub use small_string::SmallString;
