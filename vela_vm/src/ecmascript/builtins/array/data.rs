// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::{OrdinaryObject, Value};

/// Heap data of an Array exotic object. Holes are `None`.
#[derive(Debug, Clone)]
pub struct ArrayHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) elements: Vec<Option<Value>>,
}
