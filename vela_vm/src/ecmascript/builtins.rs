// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [10 Ordinary and Exotic Objects Behaviours](https://tc39.es/ecma262/#sec-ordinary-and-exotic-objects-behaviours)
//!
//! Ordinary objects implement the default internal methods; exotic objects
//! carry extra internal slots in their own heap arenas and delegate their
//! ordinary-object business to an optional backing object.

pub mod array;
pub mod builtin_function;
pub mod error;
pub(crate) mod fundamental_objects;
pub mod ordinary;
pub mod primitive_objects;
pub mod regexp;
pub mod text_processing;

pub use builtin_function::{
    create_builtin_function, ArgumentsList, Behaviour, Builtin, BuiltinFunction, ConstructorFn,
    RegularFn,
};
