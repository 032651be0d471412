use crate::anchors::{IdRegistry, generate_id};
use crate::options::RenderOptions;

use super::{
    classify::{GemtextLineClassifier, LineType},
    kinds::{BlockQuote, Heading, HeadingLevel, Link, ListItem, Paragraph, Preformatted},
};
use crate::rendering::inline::convert_inline;

/// The block currently open in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Default,
    Paragraph,
    Preformatted,
    UnorderedList,
    BlockQuote,
}

/// Single-pass HTML builder over an already split document.
///
/// Lines are pushed in order together with their classification. Blocks
/// close by one-line lookahead: a paragraph, list or quote stays open only
/// while the following line has the same type.
pub struct HtmlBuilder<'a> {
    lines: &'a [&'a str],
    options: &'a RenderOptions,
    classifier: GemtextLineClassifier,
    state: BlockState,
    ids: IdRegistry,
    out: String,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new(lines: &'a [&'a str], options: &'a RenderOptions) -> Self {
        Self {
            lines,
            options,
            classifier: GemtextLineClassifier,
            state: BlockState::Default,
            ids: IdRegistry::new(),
            out: String::new(),
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Renders the line at `index`, classified as `line_type`.
    pub fn push(&mut self, index: usize, line_type: LineType) {
        let Some(&line) = self.lines.get(index) else {
            return;
        };

        if self.state == BlockState::Preformatted {
            self.consume_preformatted_line(line, line_type);
            return;
        }

        match line_type {
            LineType::Link => self.out.push_str(&Link::render(line, self.options)),
            LineType::PreformattedEdge => {
                self.out.push_str(&Preformatted::open(line, self.options));
                self.state = BlockState::Preformatted;
            }
            LineType::Heading(level) => self.push_heading(line, level),
            LineType::UnorderedListItem => self.push_list_item(index, line),
            LineType::BlockQuote => self.push_quote(index, line),
            LineType::Whitespace => {
                if self.state == BlockState::Paragraph {
                    self.out.push_str(Paragraph::LINE_BREAK);
                }
            }
            LineType::Paragraph => self.push_paragraph_line(index, line),
        }
    }

    pub fn finish(mut self) -> String {
        // Unterminated fence at EOF
        if self.state == BlockState::Preformatted {
            self.out.push_str(Preformatted::CLOSE);
        }
        self.out
    }

    /// The line after `index` if it has type `line_type`.
    fn following(&self, index: usize, line_type: LineType) -> Option<&'a str> {
        self.lines
            .get(index + 1)
            .copied()
            .filter(|next| self.classifier.classify(next) == line_type)
    }

    fn consume_preformatted_line(&mut self, line: &str, line_type: LineType) {
        if line_type == LineType::PreformattedEdge {
            self.out.push_str(Preformatted::CLOSE);
            self.state = BlockState::Default;
        } else {
            self.out.push_str(&Preformatted::content(line));
        }
    }

    // Headings leave the block state untouched, even mid-block.
    fn push_heading(&mut self, line: &str, level: HeadingLevel) {
        let id = self.ids.register(generate_id(line));
        self.out
            .push_str(&Heading::render(line, level, &id, self.options));
    }

    fn push_list_item(&mut self, index: usize, line: &str) {
        if self.state != BlockState::UnorderedList {
            self.out.push_str(ListItem::LIST_OPEN);
            self.state = BlockState::UnorderedList;
        }
        self.out.push_str(&ListItem::render(line, self.options));

        if self.following(index, LineType::UnorderedListItem).is_none() {
            self.out.push_str(ListItem::LIST_CLOSE);
            self.state = BlockState::Default;
        }
    }

    fn push_quote(&mut self, index: usize, line: &str) {
        if self.state != BlockState::BlockQuote {
            self.out.push_str(BlockQuote::OPEN);
            self.state = BlockState::BlockQuote;
        }
        let quote = BlockQuote::render(line, self.options);
        self.out.push_str(&quote);

        match self.following(index, LineType::BlockQuote) {
            None => {
                self.out.push_str(BlockQuote::CLOSE);
                self.state = BlockState::Default;
            }
            Some(next) if !quote.is_empty() => {
                self.out.push_str(BlockQuote::filler(next, self.options));
            }
            Some(_) => {}
        }
    }

    fn push_paragraph_line(&mut self, index: usize, line: &str) {
        if self.state != BlockState::Paragraph {
            self.out.push_str(Paragraph::OPEN);
            self.state = BlockState::Paragraph;
        }
        self.out.push_str(&convert_inline(line, self.options));

        if self.following(index, LineType::Paragraph).is_none() {
            self.out.push_str(Paragraph::CLOSE);
            self.state = BlockState::Default;
        } else {
            self.out.push_str(Paragraph::LINE_BREAK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&str]) -> (String, BlockState) {
        let options = RenderOptions::default();
        let mut builder = HtmlBuilder::new(lines, &options);
        for (index, line) in lines.iter().enumerate() {
            builder.push(index, GemtextLineClassifier.classify(line));
        }
        let state = builder.state();
        (builder.finish(), state)
    }

    #[test]
    fn paragraph_closes_at_end_of_input() {
        let (html, state) = build(&["one", "two"]);
        assert_eq!(html, "<p>one<br />two</p>");
        assert_eq!(state, BlockState::Default);
    }

    #[test]
    fn state_stays_open_while_fence_is_unterminated() {
        let (html, state) = build(&["```", "code"]);
        assert_eq!(state, BlockState::Preformatted);
        assert_eq!(html, "<figure><pre><code>code\n</code></pre></figure>");
    }

    #[test]
    fn fence_suppresses_classification() {
        let (html, _) = build(&["```", "# h", "* i", "=> l", "> q", "```"]);
        assert_eq!(
            html,
            "<figure><pre><code># h\n* i\n=&gt; l\n&gt; q\n</code></pre></figure>"
        );
    }

    #[test]
    fn whitespace_inside_open_paragraph_breaks_line() {
        let options = RenderOptions::default();
        let lines = ["text", ""];
        let mut builder = HtmlBuilder::new(&lines, &options);
        builder.state = BlockState::Paragraph;
        builder.push(1, LineType::Whitespace);
        assert_eq!(builder.finish(), "<br />");
    }

    #[test]
    fn whitespace_outside_paragraph_is_silent() {
        let (html, _) = build(&["", "", ""]);
        assert_eq!(html, "");
    }

    #[test]
    fn heading_does_not_close_open_block() {
        let options = RenderOptions::default();
        let lines = ["> quote", "# Title", "> more"];
        let mut builder = HtmlBuilder::new(&lines, &options);
        builder.state = BlockState::BlockQuote;
        builder.push(1, LineType::Heading(HeadingLevel::One));
        assert_eq!(builder.state(), BlockState::BlockQuote);
        assert_eq!(builder.finish(), r#"<h1 id="title">Title</h1>"#);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let options = RenderOptions::default();
        let lines = ["text"];
        let mut builder = HtmlBuilder::new(&lines, &options);
        builder.push(5, LineType::Paragraph);
        assert_eq!(builder.finish(), "");
    }
}
