//! Symbol model for Lua autocompletion.
//!
//! Pipeline: `.api` declarations + indexer symbols → [`Index`] → class resolution.
//! Ranking and editor-facing queries live in the `decoda_ide` crate.
pub mod api;
pub mod config;
pub mod entry;
mod index;
pub mod resolve;
pub mod symbol;
mod tests;

pub use api::{ApiEntry, ApiTable, LoadError, parse_declaration};
pub use config::ApiConfig;
pub use entry::{Entry, EntryIndex, EntryKind};
pub use index::Index;
pub use resolve::{last_segment, resolve_class, return_type};
pub use symbol::{Project, ProjectFile, Symbol, SymbolKind, SymbolTable};
