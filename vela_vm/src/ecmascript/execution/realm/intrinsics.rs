// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::{primitive_objects::PrimitiveObject, BuiltinFunction};
use crate::ecmascript::types::{Object, OrdinaryObject};

/// The intrinsic objects of a realm, held as direct handles.
///
/// The base substrate is created eagerly with the realm; the String
/// constructor and prototype pair is installed by the embedder through
/// `create_string_constructor` and is `None` until then.
#[derive(Debug)]
pub struct Intrinsics {
    pub(crate) array_prototype: OrdinaryObject,
    pub(crate) error_prototype: OrdinaryObject,
    pub(crate) function_prototype: OrdinaryObject,
    pub(crate) iterator_prototype: OrdinaryObject,
    pub(crate) object_prototype: OrdinaryObject,
    pub(crate) regexp_prototype: OrdinaryObject,
    pub(crate) string_iterator_prototype: OrdinaryObject,
    /// %String%
    pub(crate) string: Option<BuiltinFunction>,
    /// %String.prototype%
    pub(crate) string_prototype: Option<PrimitiveObject>,
}

/// Intrinsics that act as the default prototype of some object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProtoIntrinsics {
    Array,
    Error,
    Function,
    Iterator,
    Object,
    RegExp,
    String,
    StringIterator,
}

impl Intrinsics {
    pub fn array_prototype(&self) -> OrdinaryObject {
        self.array_prototype
    }

    pub fn error_prototype(&self) -> OrdinaryObject {
        self.error_prototype
    }

    pub fn function_prototype(&self) -> OrdinaryObject {
        self.function_prototype
    }

    pub fn iterator_prototype(&self) -> OrdinaryObject {
        self.iterator_prototype
    }

    pub fn object_prototype(&self) -> OrdinaryObject {
        self.object_prototype
    }

    pub fn regexp_prototype(&self) -> OrdinaryObject {
        self.regexp_prototype
    }

    pub fn string_iterator_prototype(&self) -> OrdinaryObject {
        self.string_iterator_prototype
    }

    /// %String%. Panics if the String intrinsics have not been created.
    pub fn string(&self) -> BuiltinFunction {
        self.string.expect("String intrinsics not yet created")
    }

    /// %String.prototype%. Panics if the String intrinsics have not been
    /// created.
    pub fn string_prototype(&self) -> PrimitiveObject {
        self.string_prototype
            .expect("String intrinsics not yet created")
    }

    pub(crate) fn get(&self, intrinsic: ProtoIntrinsics) -> Object {
        match intrinsic {
            ProtoIntrinsics::Array => self.array_prototype.into(),
            ProtoIntrinsics::Error => self.error_prototype.into(),
            ProtoIntrinsics::Function => self.function_prototype.into(),
            ProtoIntrinsics::Iterator => self.iterator_prototype.into(),
            ProtoIntrinsics::Object => self.object_prototype.into(),
            ProtoIntrinsics::RegExp => self.regexp_prototype.into(),
            ProtoIntrinsics::String => Object::PrimitiveObject(self.string_prototype()),
            ProtoIntrinsics::StringIterator => self.string_iterator_prototype.into(),
        }
    }
}
