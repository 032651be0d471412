use crate::options::RenderOptions;
use crate::rendering::escape::escape_html;
use crate::rendering::inline::convert_inline;

/// Preformatted block delimited by fence lines.
///
/// Preformatted content is a raw zone: no line inside it is classified,
/// every line is emitted escaped and newline-terminated.
pub struct Preformatted;

impl Preformatted {
    /// The fence that both opens and closes a preformatted block.
    pub const FENCE: &'static str = "```";

    pub const CLOSE: &'static str = "</code></pre></figure>";

    /// Renders an opening fence; trailing fence text becomes a caption.
    pub fn open(line: &str, options: &RenderOptions) -> String {
        let caption = line.strip_prefix(Self::FENCE).unwrap_or(line).trim();
        if caption.is_empty() {
            "<figure><pre><code>".to_string()
        } else {
            format!(
                "<figure><figcaption>{}</figcaption><pre><code>",
                convert_inline(caption, options)
            )
        }
    }

    /// Renders one content line verbatim, escaped.
    pub fn content(line: &str) -> String {
        let mut out = escape_html(line).into_owned();
        out.push('\n');
        out
    }
}
