use super::*;

#[test]
fn escape_html_neutralizes_script_tags() {
    let out = escape_html("<script>alert(1)</script>");
    assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert!(!out.contains('<'));
    assert!(!out.contains('>'));
}

#[test]
fn escape_html_covers_all_five_characters() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
}

#[test]
fn escape_html_escapes_ampersand_once() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("hello world 👋"), "hello world 👋");
    assert_eq!(escape_html(""), "");
}

#[test]
fn text_to_html_converts_line_breaks_after_escaping() {
    assert_eq!(text_to_html("a<b\nc\r\nd"), "a&lt;b<br>c<br>d");
}

#[test]
fn text_to_html_output_has_no_raw_quotes() {
    let out = text_to_html("it's \"quoted\"");
    assert!(!out.contains('\''));
    assert!(!out.contains('"'));
}
