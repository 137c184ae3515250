// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builders used when setting up a realm's intrinsic objects.

pub(crate) mod builtin_function_builder;
pub(crate) mod ordinary_object_builder;
pub(crate) mod property_builder;
