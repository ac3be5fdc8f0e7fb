//! The snapshot every completion query reads.

use std::path::Path;

use crate::api::ApiTable;
use crate::config::ApiConfig;
use crate::entry::EntryIndex;
use crate::resolve;
use crate::symbol::{Project, ProjectFile, SymbolTable};

/// API declarations, project symbols, and user entries.
///
/// Rebuilds take `&mut self` and queries take `&self`, so a query never observes a
/// half-rebuilt index.
#[derive(Debug, Clone, Default)]
pub struct Index {
    pub apis: ApiTable,
    pub symbols: SymbolTable,
    pub entries: EntryIndex,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops project symbols and resets entries; API declarations are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.symbols.clear();
    }

    /// Replaces symbols and entries with those of `project`.
    pub fn rebuild_from_project(&mut self, project: &Project) {
        self.clear();
        for file in &project.files {
            self.add_file(file);
        }
        tracing::debug!(
            files = project.files.len(),
            symbols = self.symbols.len(),
            "rebuilt symbol table"
        );
    }

    /// Appends the symbols of one file after those already indexed.
    pub fn add_file(&mut self, file: &ProjectFile) {
        self.symbols.extend_from_file(file);
    }

    /// Replaces API declarations with the contents of one file.
    pub fn load_apis(&mut self, path: &Path) {
        self.apis.load_file(path);
    }

    /// Replaces API declarations with every declaration file beside the executable.
    pub fn load_all_apis(&mut self, config: &ApiConfig) -> usize {
        self.apis.load_default_dir(config)
    }

    pub fn resolve_class(&self, token: &str) -> String {
        resolve::resolve_class(&self.apis, self.symbols.as_slice(), token)
    }

    pub fn return_type(&self, class: &str, func: &str) -> String {
        resolve::return_type(&self.apis, class, func)
    }
}
