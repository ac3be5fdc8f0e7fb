//! Editor-facing queries over a [`decoda_analyzer::Index`].
//!
//! The editor widget asks for completions, call tips, and line rewrites here and renders
//! the results; all functions are pure reads of the index snapshot.
//! Line columns are byte offsets.

mod completion;
mod context;
mod edit;
mod signature;

use decoda_analyzer::{Index, last_segment};

pub use completion::{
    CompletionConfig, CompletionItem, CompletionKind, Completions, DEFAULT_MIN_PREFIX_LEN,
    KIND_SEPARATOR,
};
pub use context::{
    CompletionRequest, MEMBER_JOINERS, call_brace_column, split_call_target,
    split_completion_token, token_at,
};
pub use edit::{
    LINE_COMMENT, comment_lines, hover_token, indent_count, on_statement_terminator,
    strip_trailing_class_names, uncomment_lines, untabify,
};
pub use signature::api_tip;

/// Completions for the token under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub completions: Completions,
    /// Bytes before the cursor that the chosen item replaces (the typed prefix).
    pub replace_len: usize,
}

/// Ranks completions for `prefix` typed in `context`.
///
/// Sourcing falls through three tiers: the resolved context's API members, then every
/// known class (only when `context` is non-empty), then project and API function names.
/// Sourcing depends on `context` alone; `member` is the caller's gate (see
/// [`complete_token`]).
pub fn matching_items(index: &Index, context: &str, prefix: &str, member: bool) -> Completions {
    let module = last_segment(context);
    let class = index.resolve_class(module);
    let query = prefix.to_lowercase();

    let mut items = completion::api_items(&index.apis, &class, &query);
    if items.is_empty() && !context.is_empty() {
        items = completion::class_items(&index.apis, &query);
    }
    if items.is_empty() {
        items = completion::function_items(index, &query);
    }

    tracing::trace!(
        context,
        class = class.as_str(),
        prefix,
        member,
        count = items.len(),
        "matched completion items"
    );
    Completions { items }
}

/// Legacy completion over the user-entry index.
pub fn entry_items(index: &Index, module: &str, prefix: &str, member: bool) -> Completions {
    completion::entry_items(&index.entries, module, prefix, member)
}

/// Declared return class of `class.function` (or of the free function when `class` is empty).
pub fn return_type(index: &Index, class: &str, function: &str) -> String {
    index.return_type(class, function)
}

/// Completes a whole token such as `player:Ju` or `pri`.
///
/// Bare identifiers shorter than `config.min_prefix_len` chars yield nothing.
pub fn complete_token(index: &Index, token: &str, config: CompletionConfig) -> Completions {
    let request = split_completion_token(token);
    if !request.member && request.prefix.chars().count() < config.min_prefix_len {
        return Completions::default();
    }
    matching_items(index, request.context, request.prefix, request.member)
}

/// Completes the token ending at `column` (the char just typed). `None` when no token
/// is there or nothing matches.
pub fn complete_at(
    index: &Index,
    line: &str,
    column: usize,
    config: CompletionConfig,
) -> Option<CompletionResult> {
    let token = token_at(line, column, MEMBER_JOINERS)?;
    let completions = complete_token(index, token, config);
    if completions.is_empty() {
        return None;
    }
    Some(CompletionResult {
        completions,
        replace_len: split_completion_token(token).prefix.len(),
    })
}

/// Call tip for the call whose `(` was just typed at `column`, or whose argument list
/// contains `column`.
pub fn call_tip_at(index: &Index, line: &str, column: usize) -> Option<String> {
    let typed = *line.as_bytes().get(column)?;
    if typed == b')' {
        return None;
    }
    let brace = if typed == b'(' {
        column
    } else {
        call_brace_column(line, column)?
    };

    let token = token_at(line, brace.checked_sub(1)?, MEMBER_JOINERS)?;
    let (owner, function) = split_call_target(token);
    let text = api_tip(index, owner, function);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests;
