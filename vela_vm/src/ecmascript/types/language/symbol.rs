// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::String;
use crate::ecmascript::execution::Agent;
use crate::heap::indexes::SymbolIndex;

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(pub(crate) SymbolIndex);

impl Symbol {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Allocate a fresh symbol with the given [[Description]].
    pub fn create(agent: &mut Agent, description: Option<String>) -> Symbol {
        use crate::heap::CreateHeapData;
        agent.heap.create(SymbolHeapData {
            descriptor: description,
        })
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(SymbolIndex::from_index(index))
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    pub fn descriptive_string(self, agent: &mut Agent) -> String {
        let text = match agent[self].descriptor {
            Some(descriptor) => format!("Symbol({})", descriptor.as_str(agent)),
            None => "Symbol()".to_string(),
        };
        String::from_string(agent, text)
    }
}

#[derive(Debug, Clone)]
pub struct SymbolHeapData {
    /// The [[Description]] internal slot.
    pub(crate) descriptor: Option<String>,
}
