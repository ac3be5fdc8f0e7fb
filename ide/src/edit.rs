//! Line rewrites applied while typing.

use decoda_analyzer::ApiTable;

use crate::context::token_at;

/// Lua line-comment marker.
pub const LINE_COMMENT: &str = "--";

/// Removes `.Class`/`:Class` segments naming a known class.
///
/// When no completion context could be inferred, the class list is offered so the user can
/// type `obj.Player.` to reach `Player`'s members; the placeholder class segment is dropped
/// once the statement is finished. Returns `None` when the line has no `.`/`:` at all.
///
/// The line ends at the first CR, LF or NUL; whatever follows is re-appended unchanged.
pub fn strip_trailing_class_names(apis: &ApiTable, line: &str) -> Option<String> {
    let content_end = line.find(['\r', '\n', '\0']).unwrap_or(line.len());
    let (content, terminator) = line.split_at(content_end);
    let first = content.find(['.', ':'])?;

    let bytes = content.as_bytes();
    let mut out = content[..first].to_string();
    let mut start = first;
    for pos in first + 1..=bytes.len() {
        if pos < bytes.len() && !matches!(bytes[pos], b'.' | b':') {
            continue;
        }
        let name = &content[start + 1..pos];
        if !name.is_empty() && !apis.is_class(name) {
            out.push_str(&content[start..pos]);
        }
        start = pos;
    }

    out.push_str(terminator);
    Some(out)
}

/// Rewrite for the line on which `;` was typed. `None` when the line stays as it is.
///
/// A lone `end` loses one leading tab; any other line drops placeholder class segments.
pub fn on_statement_terminator(apis: &ApiTable, line: &str) -> Option<String> {
    let rewritten = if line.trim() == "end" {
        line.strip_prefix('\t').map(str::to_string)
    } else {
        strip_trailing_class_names(apis, line)
    };
    rewritten.filter(|text| text != line)
}

/// Indentation depth for the line following `previous_line`.
pub fn indent_count(previous_line: &str) -> usize {
    let mut count: isize = 0;
    for c in previous_line.chars() {
        match c {
            '(' | '\t' | '{' | '[' => count += 1,
            ')' | '}' | ']' => count -= 1,
            _ => {}
        }
    }

    for keyword in ["function", " then", " do"] {
        if previous_line.contains(keyword) {
            count += 1;
        }
    }

    count.max(0).unsigned_abs()
}

/// Char column of the first non-whitespace char; `None` for a blank line.
fn first_non_whitespace(line: &str) -> Option<usize> {
    line.chars().position(|c| !c.is_whitespace())
}

fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Comments out every non-blank line of `text`.
///
/// The marker goes in at the smallest indentation among the non-blank lines, so the
/// block keeps its relative indentation. Blank lines are left alone.
pub fn comment_lines(text: &str) -> String {
    let Some(column) = text.split_inclusive('\n').filter_map(first_non_whitespace).min() else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if first_non_whitespace(line).is_some() {
            let (head, tail) = line.split_at(byte_offset(line, column));
            out.push_str(head);
            out.push_str(LINE_COMMENT);
            out.push_str(tail);
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Removes one `--` from each line of `text` that starts with it after its indentation.
pub fn uncomment_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let start = first_non_whitespace(line).map(|column| byte_offset(line, column));
        match start {
            Some(start) if line[start..].starts_with(LINE_COMMENT) => {
                out.push_str(&line[..start]);
                out.push_str(&line[start + LINE_COMMENT.len()..]);
            }
            _ => out.push_str(line),
        }
    }
    out
}

/// Expands each tab to `indent_size` spaces. `None` when `text` has no tabs.
pub fn untabify(text: &str, indent_size: usize) -> Option<String> {
    if !text.contains('\t') {
        return None;
    }
    Some(text.replace('\t', &" ".repeat(indent_size)))
}

/// Expression under the mouse at `column`, for evaluation on hover.
///
/// Only `.` joins segments: `obj:method` hovers as `method` so hovering never evaluates
/// a method call.
pub fn hover_token(line: &str, column: usize) -> Option<&str> {
    token_at(line, column, ".")
}
