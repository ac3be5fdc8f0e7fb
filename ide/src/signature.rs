//! Call-tip text for a function about to be called.

use decoda_analyzer::Index;

/// Declaration text for `context.function`.
///
/// An exact `(class, function)` declaration returns just that line. Otherwise every API
/// declaration named `function` (any class) and every project function definition with
/// that name are listed, one per line, since the call target cannot be pinned down.
pub fn api_tip(index: &Index, context: &str, function: &str) -> String {
    let class = index.resolve_class(context);
    if let Some(entry) = index.apis.get(&class, function) {
        return entry.raw_text.clone();
    }

    let mut text = String::new();
    for entry in index.apis.iter().filter(|entry| entry.member_name == function) {
        text.push_str(&entry.raw_text);
        text.push('\n');
    }
    for symbol in index
        .symbols
        .functions()
        .filter(|symbol| symbol.name == function && !symbol.definition_text.is_empty())
    {
        text.push_str(&symbol.definition_text);
        text.push('\n');
    }
    text
}
