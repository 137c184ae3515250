// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::builtins::ordinary::shape::PropertyAttributes;
use crate::ecmascript::types::{PropertyKey, PropertyValue};

/// A fully resolved property, ready to be laid into a fresh object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectEntry {
    pub(crate) key: PropertyKey,
    pub(crate) attributes: PropertyAttributes,
    pub(crate) value: PropertyValue,
}
