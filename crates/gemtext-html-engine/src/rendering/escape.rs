use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for use in both text and
/// double-quoted attributes. Quotes use numeric entities (`&#34;`, `&#39;`).
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_text(text);
    if !escaped.contains(['"', '\'']) {
        return escaped;
    }
    Cow::Owned(escaped.replace('"', "&#34;").replace('\'', "&#39;"))
}
