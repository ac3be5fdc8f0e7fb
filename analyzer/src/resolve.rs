//! Class inference for member-access context tokens.
//!
//! Lua values carry no static type, so the class behind `x:` is inferred from the
//! assignment that introduced `x`, by looking at the symbols that immediately follow
//! the `ReturnIdentifier` for `x`:
//!
//! - `x = Table.func(...)` → `[ReturnIdentifier x, Table Table, TableFunction func]`
//! - `x = func(...)`       → `[ReturnIdentifier x, FunctionCall func]`
//!
//! The declared return type of `func` names the class.

use crate::api::ApiTable;
use crate::symbol::{Symbol, SymbolKind};

/// Bound on nested `Table.func` resolution (guards `a = a.f()`).
pub const MAX_RESOLVE_DEPTH: usize = 8;

/// The text after the last `:` of a chained token (`a:b:c` → `c`).
pub fn last_segment(token: &str) -> &str {
    match token.rfind(':') {
        Some(pos) => &token[pos + 1..],
        None => token,
    }
}

/// Resolves `token` to a known class.
///
/// Returns the (last-segment) token unchanged when nothing better is known, and an
/// empty string for an empty token. Callers compare the result against class owners,
/// so an unresolved token simply matches nothing.
pub fn resolve_class(apis: &ApiTable, symbols: &[Symbol], token: &str) -> String {
    resolve_class_at_depth(apis, symbols, token, 0)
}

fn resolve_class_at_depth(apis: &ApiTable, symbols: &[Symbol], token: &str, depth: usize) -> String {
    let module = last_segment(token);
    if module.is_empty() || apis.is_class(module) {
        return module.to_string();
    }
    if depth >= MAX_RESOLVE_DEPTH {
        tracing::trace!(module, depth, "class resolution depth exhausted");
        return module.to_string();
    }

    match class_from_assignment(apis, symbols, module, depth) {
        Some(class) => {
            tracing::trace!(module, class = class.as_str(), "inferred class from assignment");
            class
        }
        None => module.to_string(),
    }
}

/// Inspects the first `ReturnIdentifier` named `name` that has a successor.
fn class_from_assignment(
    apis: &ApiTable,
    symbols: &[Symbol],
    name: &str,
    depth: usize,
) -> Option<String> {
    let idx = symbols
        .iter()
        .enumerate()
        .position(|(idx, symbol)| {
            symbol.kind == SymbolKind::ReturnIdentifier
                && symbol.name == name
                && idx + 1 < symbols.len()
        })?;

    let next = &symbols[idx + 1];
    let class = match next.kind {
        SymbolKind::Table => match symbols.get(idx + 2) {
            Some(func) if func.kind == SymbolKind::TableFunction => {
                let owner = resolve_class_at_depth(apis, symbols, &next.name, depth + 1);
                return_type(apis, &owner, &func.name)
            }
            _ => String::new(),
        },
        SymbolKind::FunctionCall => return_type(apis, "", &next.name),
        _ => String::new(),
    };

    (!class.is_empty()).then_some(class)
}

/// Declared return type of `class.func`, or of the free function `func` when `class` is empty.
///
/// With an empty `class`, a `func` that is itself a known class name is returned as-is so
/// that `x = SomeClass` chains like a constructor call. Returns an empty string on no match.
pub fn return_type(apis: &ApiTable, class: &str, func: &str) -> String {
    if !class.is_empty() {
        return apis
            .get(class, func)
            .map(|entry| entry.return_type_name.clone())
            .unwrap_or_default();
    }

    if let Some(entry) = apis.free_functions().find(|entry| entry.member_name == func) {
        return entry.return_type_name.clone();
    }
    if apis.is_class(func) {
        return func.to_string();
    }
    String::new()
}
