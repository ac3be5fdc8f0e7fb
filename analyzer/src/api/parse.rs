//! Declaration line grammar: `[ReturnType ]([Class][.|:]FunctionName)[(args...)]`.

use super::ApiEntry;

/// Parses one declaration line.
///
/// Returns `None` for blank lines, `--`/`//` comments, and lines that do not name a member.
pub fn parse_declaration(line: &str) -> Option<ApiEntry> {
    let text = normalize_line(line);
    if text.is_empty() || text.starts_with("--") || text.starts_with("//") {
        return None;
    }

    let (class_part, member_part) = match text.find(['.', ':']) {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => ("", text.as_str()),
    };

    let mut return_type_name = String::new();
    let mut class_owner = class_part;
    if let Some((ret, rest)) = split_leading_word(class_part) {
        return_type_name = ret.to_string();
        class_owner = rest;
    }

    let mut member_name = match member_part.find('(') {
        Some(pos) => &member_part[..pos],
        None => member_part,
    };
    if class_owner.is_empty()
        && let Some((ret, rest)) = split_leading_word(member_name)
    {
        return_type_name = ret.to_string();
        member_name = rest;
    }

    let member_name = member_name.trim();
    if member_name.is_empty() {
        return None;
    }

    Some(ApiEntry {
        class_owner: class_owner.trim().to_string(),
        member_name: member_name.to_string(),
        return_type_name,
        raw_text: text,
    })
}

/// Strips line terminators, turns tabs into spaces, and trims.
fn normalize_line(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits `"Ret rest"` into `("Ret", "rest")`. A space at index 0 does not count.
fn split_leading_word(s: &str) -> Option<(&str, &str)> {
    match s.find(' ') {
        Some(pos) if pos > 0 => Some((&s[..pos], s[pos..].trim_start())),
        _ => None,
    }
}
