//! Name/scope index of user-code identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier category. The discriminant is the icon code shown by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum EntryKind {
    Unknown = 0,
    Function = 1,
    Class = 2,
    Keyword = 3,
    Variable = 4,
}

impl EntryKind {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Owning scope; empty for globals.
    pub scope: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind, scope: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            scope: scope.into(),
        }
    }
}

const SEEDED: [&str; 2] = ["function", "module"];

/// Entries keyed by `(scope, name)`, iterated in key order.
#[derive(Debug, Clone)]
pub struct EntryIndex {
    entries: BTreeMap<(String, String), Entry>,
}

impl Default for EntryIndex {
    fn default() -> Self {
        let mut index = Self {
            entries: BTreeMap::new(),
        };
        index.seed();
        index
    }
}

impl EntryIndex {
    /// An index holding only the built-in `function`/`module` entries.
    pub fn new() -> Self {
        Self::default()
    }

    fn seed(&mut self) {
        for name in SEEDED {
            self.add(name, EntryKind::Function, "");
        }
    }

    /// Inserts an entry; an existing `(scope, name)` key keeps its first entry.
    pub fn add(&mut self, name: impl Into<String>, kind: EntryKind, scope: impl Into<String>) {
        let entry = Entry::new(name, kind, scope);
        self.entries
            .entry((entry.scope.clone(), entry.name.clone()))
            .or_insert(entry);
    }

    /// Resets to the seeded baseline.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.seed();
    }

    pub fn get(&self, scope: &str, name: &str) -> Option<&Entry> {
        self.entries.get(&(scope.to_string(), name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
