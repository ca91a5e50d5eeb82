//! HTML escaping for untrusted chat and analytics text.
//!
//! Anything a remote participant or the analytics server typed goes through
//! here before it is inserted with `inner_html`.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

/// Escape the five markup-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape `text` and turn line breaks into `<br>`.
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}
