//! Route-style list formatting.

use super::RANGE_SEPARATOR;

/// Placeholder standing in for the elided middle of a long list.
const ELLIPSIS: &str = "...";
const MAX_ITEMS: usize = 3;

/// Join up to three items with `" — "`. Longer lists keep only the first and
/// last item around a `"..."` placeholder.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let parts: Vec<&str> = match items {
        [first, .., last] if items.len() > MAX_ITEMS => {
            vec![first.as_ref(), ELLIPSIS, last.as_ref()]
        }
        _ => items.iter().map(|item| item.as_ref()).collect(),
    };
    parts.join(RANGE_SEPARATOR)
}
