//! Candidate sourcing, from the strictest tier to the loosest.
//! Each function returns items already ranked by score.

use decoda_analyzer::{ApiTable, Index};

use crate::completion::ranking::{Candidates, rank};
use crate::completion::{CompletionItem, CompletionKind, prefix_score};

/// Primary tier: API declarations in the resolved class context.
///
/// With a class, its members are scored by name. Without one, free functions are
/// scored by name and class-owned entries by their class name (so typing `Pla` offers
/// `Player`).
pub(crate) fn api_items(apis: &ApiTable, class: &str, query_lower: &str) -> Vec<CompletionItem> {
    let mut candidates = Candidates::default();

    for entry in apis.iter() {
        let (label, kind) = if !class.is_empty() {
            if entry.class_owner != class {
                continue;
            }
            (&entry.member_name, CompletionKind::Function)
        } else if entry.is_free_function() {
            (&entry.member_name, CompletionKind::Function)
        } else {
            (&entry.class_owner, CompletionKind::Class)
        };

        if let Some(score) = prefix_score(query_lower, label) {
            candidates.push(CompletionItem::new(label.clone(), kind, score));
        }
    }

    candidates.into_ranked()
}

/// Tier A: every known class matching the prefix, for contexts that resolved to nothing.
pub(crate) fn class_items(apis: &ApiTable, query_lower: &str) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = apis
        .classes()
        .into_iter()
        .filter_map(|class| {
            prefix_score(query_lower, class)
                .map(|score| CompletionItem::new(class, CompletionKind::Class, score))
        })
        .collect();
    rank(&mut items);
    items
}

/// Tier B: project function symbols, then API free functions, by name alone.
pub(crate) fn function_items(index: &Index, query_lower: &str) -> Vec<CompletionItem> {
    let symbol_names = index.symbols.functions().map(|symbol| symbol.name.as_str());
    let api_names = index.apis.free_functions().map(|entry| entry.member_name.as_str());

    let mut items: Vec<CompletionItem> = Vec::new();
    for name in symbol_names.chain(api_names) {
        let Some(score) = prefix_score(query_lower, name) else {
            continue;
        };
        if items.iter().any(|item| item.label == name) {
            continue;
        }
        items.push(CompletionItem::new(name, CompletionKind::Function, score));
    }
    rank(&mut items);
    items
}
