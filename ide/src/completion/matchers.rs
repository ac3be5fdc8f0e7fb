//! Prefix scoring for completion labels.
//!
//! A label matches when its lowercase form starts with the lowercase query. The score
//! counts the unmatched tail, so with equal prefixes shorter labels rank first:
//! `score = 1 + (label chars - query chars)`.

/// Scores `label` against `query_lower` (already lowercased). `None` when it does not match.
pub(crate) fn prefix_score(query_lower: &str, label: &str) -> Option<usize> {
    let label_lower = label.to_lowercase();
    if !label_lower.starts_with(query_lower) {
        return None;
    }
    let residual = label_lower
        .chars()
        .count()
        .saturating_sub(query_lower.chars().count());
    Some(1 + residual)
}
