use decoda_analyzer::EntryIndex;

use crate::completion::ranking::rank;
use crate::completion::{CompletionItem, Completions, prefix_score};

/// Matches user entries scoped to `module`.
///
/// Member completions (`member == true`) only see scoped entries, and bare identifiers
/// only see global ones.
pub(crate) fn entry_items(
    entries: &EntryIndex,
    module: &str,
    prefix: &str,
    member: bool,
) -> Completions {
    let query = prefix.to_lowercase();
    let mut items: Vec<CompletionItem> = entries
        .iter()
        .filter(|entry| entry.scope.is_empty() != member && entry.scope == module)
        .filter_map(|entry| {
            prefix_score(&query, &entry.name)
                .map(|score| CompletionItem::new(entry.name.clone(), entry.kind.into(), score))
        })
        .collect();
    rank(&mut items);
    Completions { items }
}
