use crate::completion::{CompletionItem, CompletionKind};

/// Collects candidates, dropping repeats of `(kind, lowercase label)`.
///
/// The first candidate seen wins, even if a later repeat would score better.
#[derive(Debug, Default)]
pub(crate) struct Candidates {
    items: Vec<CompletionItem>,
    seen: Vec<(CompletionKind, String)>,
}

impl Candidates {
    pub(crate) fn push(&mut self, item: CompletionItem) {
        let key = (item.kind, item.label.to_lowercase());
        if self.seen.contains(&key) {
            return;
        }
        self.seen.push(key);
        self.items.push(item);
    }

    /// Items by ascending score; equal scores keep insertion order.
    pub(crate) fn into_ranked(self) -> Vec<CompletionItem> {
        let mut items = self.items;
        rank(&mut items);
        items
    }
}

/// Stable sort by ascending score.
pub(crate) fn rank(items: &mut [CompletionItem]) {
    items.sort_by_key(|item| item.score);
}
