use crate::options::RenderOptions;
use crate::rendering::inline::convert_inline;

use super::Paragraph;

/// Blockquote line type with owned delimiter constant.
///
/// Consecutive quote lines form one `<blockquote>`. An empty quote line
/// (a bare `>`) ends the current inner paragraph and starts the next one.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub const OPEN: &'static str = "<blockquote><p>";
    pub const CLOSE: &'static str = "</p></blockquote>";
    pub const PARAGRAPH_BREAK: &'static str = "</p><p>";

    /// Converts the text of a quote line, dropping one `>` and surrounding blanks.
    pub fn render(line: &str, options: &RenderOptions) -> String {
        let text = line.strip_prefix(Self::PREFIX).unwrap_or(line).trim();
        convert_inline(text, options)
    }

    /// Separator to emit before the following quote line `next`.
    pub fn filler(next: &str, options: &RenderOptions) -> &'static str {
        if Self::render(next, options).is_empty() {
            Self::PARAGRAPH_BREAK
        } else {
            Paragraph::LINE_BREAK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_strips_single_prefix() {
        let options = RenderOptions::default();
        assert_eq!(BlockQuote::render(">   spaced  ", &options), "spaced");
        assert_eq!(BlockQuote::render(">> nested", &options), "&gt; nested");
    }

    #[test]
    fn render_empty_quote() {
        assert_eq!(BlockQuote::render(">", &RenderOptions::default()), "");
        assert_eq!(BlockQuote::render(">   ", &RenderOptions::default()), "");
    }

    #[test]
    fn filler_breaks_paragraph_before_empty_quote() {
        let options = RenderOptions::default();
        assert_eq!(BlockQuote::filler(">", &options), "</p><p>");
        assert_eq!(BlockQuote::filler("> more", &options), "<br />");
    }
}
