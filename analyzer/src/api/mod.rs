//! API table: library members declared in `.api` files.
//!
//! Entries are keyed by `(class_owner, member_name)` and iterated in declaration order.

mod loader;
mod parse;

pub use loader::LoadError;
pub use parse::parse_declaration;

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use serde::{Deserialize, Serialize};

/// One declared library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntry {
    /// Owning class; empty for a free function.
    pub class_owner: String,
    pub member_name: String,
    /// Declared return type/class; empty when the declaration has none.
    pub return_type_name: String,
    /// Normalized declaration line, shown verbatim in call tips.
    pub raw_text: String,
}

impl ApiEntry {
    pub fn is_free_function(&self) -> bool {
        self.class_owner.is_empty()
    }

    fn key(&self) -> ApiKey {
        ApiKey {
            class_owner: self.class_owner.clone(),
            member_name: self.member_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ApiKey {
    class_owner: String,
    member_name: String,
}

/// Declaration-ordered set of [`ApiEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct ApiTable {
    entries: IndexMap<ApiKey, ApiEntry>,
}

impl ApiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from declaration text (one declaration per line).
    pub fn from_source(source: &str) -> Self {
        let mut table = Self::new();
        table.extend_from_source(source);
        table
    }

    /// Inserts `entry` unless an entry with the same `(class_owner, member_name)` exists.
    ///
    /// Returns `false` when the key was already present; the first declaration wins.
    pub fn insert(&mut self, entry: ApiEntry) -> bool {
        match self.entries.entry(entry.key()) {
            MapEntry::Occupied(_) => false,
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    /// Parses every line of `source` and inserts the resulting entries.
    ///
    /// Returns the number of newly inserted entries.
    pub fn extend_from_source(&mut self, source: &str) -> usize {
        let mut inserted = 0;
        for line in source.lines() {
            match parse_declaration(line) {
                Some(entry) => {
                    if self.insert(entry) {
                        inserted += 1;
                    }
                }
                None => tracing::trace!(line, "skipped declaration line"),
            }
        }
        inserted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ApiEntry> {
        self.entries.values()
    }

    pub fn get(&self, class_owner: &str, member_name: &str) -> Option<&ApiEntry> {
        self.entries.get(&ApiKey {
            class_owner: class_owner.to_string(),
            member_name: member_name.to_string(),
        })
    }

    /// True iff some entry is owned by exactly `name` (case-sensitive).
    pub fn is_class(&self, name: &str) -> bool {
        !name.is_empty() && self.iter().any(|entry| entry.class_owner == name)
    }

    /// Distinct class names in first-declaration order.
    pub fn classes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in self.iter() {
            if !entry.class_owner.is_empty() && !out.contains(&entry.class_owner.as_str()) {
                out.push(entry.class_owner.as_str());
            }
        }
        out
    }

    pub fn members_of<'a>(&'a self, class_owner: &'a str) -> impl Iterator<Item = &'a ApiEntry> {
        self.iter().filter(move |entry| entry.class_owner == class_owner)
    }

    pub fn free_functions(&self) -> impl Iterator<Item = &ApiEntry> {
        self.iter().filter(|entry| entry.is_free_function())
    }
}
