use std::collections::HashMap;

use crate::core::collector::UseSet;

/// Leading underscore marks an internal helper; everything else is a named
/// output of the class.
pub fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

/// Expands private-helper reference chains into the non-private names they
/// ultimately read.
///
/// The table maps each private method to its use set and is built once per
/// class. Resolution is depth-first; each path refuses to revisit its own
/// ancestry, so mutually-referential helpers terminate instead of looping.
/// The same private name may legitimately recur on a different path, and the
/// same terminal name may be yielded once per path that reaches it.
#[derive(Debug, Clone, Default)]
pub struct IndirectionResolver {
    table: HashMap<String, UseSet>,
}

impl IndirectionResolver {
    pub fn new(table: HashMap<String, UseSet>) -> Self {
        Self { table }
    }

    /// The recorded use set of one private method, if it is defined on the
    /// analyzed class.
    pub fn uses_of(&self, name: &str) -> Option<&UseSet> {
        self.table.get(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All non-private names reachable from `source` through the table.
    ///
    /// A `source` with no table entry (referenced but not defined on this
    /// class, e.g. inherited from a base) yields nothing.
    pub fn resolve(&self, source: &str) -> Vec<String> {
        let mut resolved = Vec::new();
        let mut path = Vec::new();
        self.resolve_onto(source, &mut path, &mut resolved);
        resolved
    }

    fn resolve_onto(&self, source: &str, path: &mut Vec<String>, out: &mut Vec<String>) {
        let uses = match self.table.get(source) {
            Some(uses) => uses,
            None => return,
        };

        for sub in uses {
            if sub == source || path.iter().any(|seen| seen == sub) {
                continue;
            }
            if is_private(sub) {
                path.push(sub.clone());
                self.resolve_onto(sub, path, out);
                path.pop();
            } else {
                out.push(sub.clone());
            }
        }
    }
}
