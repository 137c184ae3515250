// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

use super::Agent;
use crate::ecmascript::builders::ordinary_object_builder::OrdinaryObjectBuilder;
use crate::ecmascript::builtins::fundamental_objects::create_object_prototype;
use crate::ecmascript::builtins::text_processing::string_objects::string_iterator_objects::{
    create_iterator_prototype, create_string_iterator_prototype,
};
use crate::ecmascript::types::OrdinaryObject;
use crate::heap::indexes::RealmIndex;

pub use intrinsics::Intrinsics;
pub(crate) use intrinsics::ProtoIntrinsics;

/// Identifier of a realm in the realm arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RealmIdentifier(RealmIndex);

impl RealmIdentifier {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) fn last(realms: &[Option<Realm>]) -> Self {
        Self(RealmIndex::last(realms))
    }
}

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
#[derive(Debug)]
pub struct Realm {
    pub(crate) intrinsics: Intrinsics,
    pub(crate) global_object: OrdinaryObject,
}

impl Realm {
    /// Create a realm with its base intrinsic substrate and make it the
    /// agent's running realm. The String intrinsics are installed
    /// separately; see `create_string_constructor`.
    pub fn create(agent: &mut Agent) -> RealmIdentifier {
        let object_prototype = create_object_prototype(agent);
        let function_prototype = OrdinaryObjectBuilder::new(agent)
            .with_prototype(object_prototype.into())
            .build();
        let iterator_prototype = create_iterator_prototype(agent, object_prototype);
        let string_iterator_prototype =
            create_string_iterator_prototype(agent, iterator_prototype);
        let array_prototype = OrdinaryObjectBuilder::new(agent)
            .with_prototype(object_prototype.into())
            .build();
        let regexp_prototype = OrdinaryObjectBuilder::new(agent)
            .with_prototype(object_prototype.into())
            .build();
        let error_prototype = OrdinaryObjectBuilder::new(agent)
            .with_prototype(object_prototype.into())
            .build();
        let global_object = OrdinaryObjectBuilder::new(agent)
            .with_prototype(object_prototype.into())
            .build();

        let realm = Realm {
            intrinsics: Intrinsics {
                array_prototype,
                error_prototype,
                function_prototype,
                iterator_prototype,
                object_prototype,
                regexp_prototype,
                string_iterator_prototype,
                string: None,
                string_prototype: None,
            },
            global_object,
        };
        let identifier = agent.heap.add_realm(realm);
        agent.current_realm = Some(identifier);
        identifier
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    pub fn global_object(&self) -> OrdinaryObject {
        self.global_object
    }
}

/// Create a realm and install every intrinsic on it, including the String
/// builtin and its global binding.
pub fn initialize_host_defined_realm(agent: &mut Agent) -> RealmIdentifier {
    use crate::ecmascript::builtins::text_processing::string_objects::{
        create_string_constructor, install_on_global,
    };
    let realm = Realm::create(agent);
    let (constructor, _prototype) = create_string_constructor(agent, realm);
    install_on_global(agent, realm, constructor);
    realm
}
