//! Line-text helpers that locate the token being completed.
//! Columns are byte offsets into a single line.

/// Joiners for member-access tokens (`obj:method`, `mod.func`).
pub const MEMBER_JOINERS: &str = ".:";

/// Chars skipped when looking back from an argument to its call's `(`.
const ARGUMENT_CHARS: &[u8] = b"+-*/.,";

fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Completion query derived from a token such as `player:Ju`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    /// Text before the last `.`/`:`; empty for a bare identifier.
    pub context: &'a str,
    /// Text after the last `.`/`:`.
    pub prefix: &'a str,
    /// True when the token contains a member-access operator.
    pub member: bool,
}

/// Returns the token around `column`.
///
/// The char at `column` must be alphanumeric or one of `joiners`. The token extends left
/// over identifier chars and joiners, and right over identifier chars only.
pub fn token_at<'a>(line: &'a str, column: usize, joiners: &str) -> Option<&'a str> {
    let bytes = line.as_bytes();
    let joiners = joiners.as_bytes();
    let at = *bytes.get(column)?;
    if !at.is_ascii_alphanumeric() && !joiners.contains(&at) {
        return None;
    }

    let mut start = column;
    while start > 0 && (is_identifier_char(bytes[start - 1]) || joiners.contains(&bytes[start - 1])) {
        start -= 1;
    }

    let mut end = column;
    while end + 1 < bytes.len() && is_identifier_char(bytes[end + 1]) {
        end += 1;
    }

    line.get(start..=end)
}

/// Column of the `(` whose argument list contains `column`, if any.
///
/// Looks back over one argument expression (identifiers and `+-*/.,`). Returns `None`
/// inside an unterminated string literal.
pub fn call_brace_column(line: &str, column: usize) -> Option<usize> {
    let bytes = line.as_bytes();
    let before = bytes.get(..column)?;

    let singles = before.iter().filter(|&&c| c == b'\'').count();
    let doubles = before.iter().filter(|&&c| c == b'"').count();
    if singles % 2 == 1 || doubles % 2 == 1 {
        return None;
    }

    let mut start = column;
    while start > 0
        && (is_identifier_char(bytes[start - 1]) || ARGUMENT_CHARS.contains(&bytes[start - 1]))
    {
        start -= 1;
    }

    (start > 0 && bytes[start - 1] == b'(').then(|| start - 1)
}

/// Splits a call target `a.b:func` into `(owner, func)`, keeping only the owner's last segment.
pub fn split_call_target(token: &str) -> (&str, &str) {
    let Some(pos) = token.rfind('.').or_else(|| token.rfind(':')) else {
        return ("", token);
    };
    let owner = &token[..pos];
    let func = &token[pos + 1..];
    let owner = match owner.rfind('.').or_else(|| owner.rfind(':')) {
        Some(pos) => &owner[pos + 1..],
        None => owner,
    };
    (owner, func)
}

/// Splits a completion token at its last `.` or `:`.
pub fn split_completion_token(token: &str) -> CompletionRequest<'_> {
    let end = [token.rfind('.'), token.rfind(':')]
        .into_iter()
        .flatten()
        .max();

    match end {
        Some(pos) => CompletionRequest {
            context: &token[..pos],
            prefix: &token[pos + 1..],
            member: true,
        },
        None => CompletionRequest {
            context: "",
            prefix: token,
            member: false,
        },
    }
}
