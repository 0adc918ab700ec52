//! HTML escaping utilities.

/// Escape HTML special characters for safe embedding as text or as a quoted
/// attribute value.
///
/// Covers `&`, `<`, `>`, `"`, `'` and the backtick, which older browsers treat
/// as an attribute delimiter.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            _ => out.push(ch),
        }
    }
    out
}
