//! Completion candidates for the editor's autocompletion list.
//!
//! Items serialize to the list format the editor widget consumes:
//! `name?<kind digit>` followed by a single space, per item.

use std::fmt;

use decoda_analyzer::EntryKind;
use serde::{Deserialize, Serialize};

mod entries;
mod items;
mod matchers;
mod ranking;

pub(crate) use entries::entry_items;
pub(crate) use items::{api_items, class_items, function_items};
pub(crate) use matchers::prefix_score;

/// Separator between an item's name and its kind digit.
pub const KIND_SEPARATOR: char = '?';

/// Default for `CompletionConfig.min_prefix_len`.
pub const DEFAULT_MIN_PREFIX_LEN: usize = 2;

/// Configuration knobs for token completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletionConfig {
    /// Chars a bare (non-member) identifier needs before completions are offered.
    pub min_prefix_len: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: DEFAULT_MIN_PREFIX_LEN,
        }
    }
}

/// Icon bucket shown next to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionKind {
    Unknown,
    Function,
    Class,
    Keyword,
    Variable,
}

impl CompletionKind {
    /// Editor icon digit; `None` for `Unknown`, which is shown without an icon.
    pub fn icon(self) -> Option<char> {
        let code = match self {
            Self::Unknown => return None,
            Self::Function => EntryKind::Function.code(),
            Self::Class => EntryKind::Class.code(),
            Self::Keyword => EntryKind::Keyword.code(),
            Self::Variable => EntryKind::Variable.code(),
        };
        Some(char::from(b'0' + code))
    }
}

impl From<EntryKind> for CompletionKind {
    fn from(value: EntryKind) -> Self {
        match value {
            EntryKind::Unknown => Self::Unknown,
            EntryKind::Function => Self::Function,
            EntryKind::Class => Self::Class,
            EntryKind::Keyword => Self::Keyword,
            EntryKind::Variable => Self::Variable,
        }
    }
}

/// One completion candidate.
///
/// `score` is `1 + (label chars - prefix chars)`; lower ranks earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub score: usize,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionKind, score: usize) -> Self {
        Self {
            label: label.into(),
            kind,
            score,
        }
    }
}

/// Ranked completion list. `Display` renders the editor list string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completions {
    pub items: Vec<CompletionItem>,
}

impl Completions {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }
}

impl fmt::Display for Completions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            f.write_str(&item.label)?;
            if let Some(icon) = item.kind.icon() {
                write!(f, "{KIND_SEPARATOR}{icon}")?;
            }
            f.write_str(" ")?;
        }
        Ok(())
    }
}
