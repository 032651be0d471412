use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::rendering::escape::escape_html;

/// Entity every curly double quote is normalized to.
pub const AMBIGUOUS_QUOTE: &str = "&#34;";

const CURLY_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

/// Renders the inline content of a single markdown line.
///
/// Block-level events (paragraph wrappers and the like) produce no output;
/// raw HTML is escaped rather than passed through.
pub fn render_inline(source: &str, smart_punctuation: bool) -> String {
    let mut options = Options::ENABLE_STRIKETHROUGH;
    if smart_punctuation {
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
    }

    let mut renderer = InlineRenderer::default();
    for event in Parser::new_ext(source, options) {
        renderer.push(event);
    }
    renderer.out
}

#[derive(Default)]
struct InlineRenderer {
    out: String,
    /// Nesting depth of images; inside one, everything becomes alt text.
    image_depth: usize,
    image_title: Option<String>,
}

impl InlineRenderer {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if self.in_image() {
                    self.text(&code);
                } else {
                    self.out.push_str("<code>");
                    self.text(&code);
                    self.out.push_str("</code>");
                }
            }
            Event::Html(raw) | Event::InlineHtml(raw) => self.text(raw.trim_end_matches('\n')),
            Event::SoftBreak => self.out.push('\n'),
            Event::HardBreak => {
                if self.in_image() {
                    self.out.push(' ');
                } else {
                    self.out.push_str("<br />");
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        if self.in_image() {
            if matches!(tag, Tag::Image { .. }) {
                self.image_depth += 1;
            }
            return;
        }

        match tag {
            Tag::Emphasis => self.out.push_str("<em>"),
            Tag::Strong => self.out.push_str("<strong>"),
            Tag::Strikethrough => self.out.push_str("<del>"),
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => {
                self.out.push_str("<a href=\"");
                if link_type == LinkType::Email {
                    self.out.push_str("mailto:");
                }
                self.attribute(&dest_url);
                if !title.is_empty() {
                    self.out.push_str("\" title=\"");
                    self.attribute(&title);
                }
                self.out.push_str("\">");
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.out.push_str("<img src=\"");
                self.attribute(&dest_url);
                self.out.push_str("\" alt=\"");
                self.image_title = (!title.is_empty()).then(|| title.to_string());
                self.image_depth = 1;
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        if self.in_image() {
            if tag == TagEnd::Image {
                self.image_depth -= 1;
                if self.image_depth == 0 {
                    self.out.push('"');
                    if let Some(title) = self.image_title.take() {
                        self.out.push_str(" title=\"");
                        self.attribute(&title);
                        self.out.push('"');
                    }
                    self.out.push_str(" />");
                }
            }
            return;
        }

        match tag {
            TagEnd::Emphasis => self.out.push_str("</em>"),
            TagEnd::Strong => self.out.push_str("</strong>"),
            TagEnd::Strikethrough => self.out.push_str("</del>"),
            TagEnd::Link => self.out.push_str("</a>"),
            _ => {}
        }
    }

    fn in_image(&self) -> bool {
        self.image_depth > 0
    }

    fn text(&mut self, text: &str) {
        if self.in_image() {
            self.attribute(text);
        } else {
            let escaped = html_escape::encode_text(text);
            self.out.push_str(&escaped.replace(CURLY_QUOTES, AMBIGUOUS_QUOTE));
        }
    }

    fn attribute(&mut self, value: &str) {
        let escaped = escape_html(value);
        self.out
            .push_str(&escaped.replace(CURLY_QUOTES, AMBIGUOUS_QUOTE));
    }
}
