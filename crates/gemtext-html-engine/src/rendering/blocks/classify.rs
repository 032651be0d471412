use super::kinds::{BlockQuote, Heading, HeadingLevel, Link, ListItem, Preformatted};

/// The type of a single Gemtext line, decided by its prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Paragraph,
    /// A zero-length line. Lines holding only spaces are paragraphs.
    Whitespace,
    Link,
    /// A fence line; opens or closes depending on the builder's state.
    PreformattedEdge,
    Heading(HeadingLevel),
    UnorderedListItem,
    BlockQuote,
}

/// Classifies individual lines for the block rendering phase.
pub struct GemtextLineClassifier;

impl GemtextLineClassifier {
    /// Classifies a line into a [`LineType`].
    ///
    /// Prefixes are checked longest first, so `###` is never taken for a
    /// level one heading and a fence is never taken for a heading.
    pub fn classify(&self, line: &str) -> LineType {
        if line.is_empty() {
            LineType::Whitespace
        } else if line.starts_with(Link::PREFIX) {
            LineType::Link
        } else if line.starts_with(Preformatted::FENCE) {
            LineType::PreformattedEdge
        } else if let Some(level) = Heading::level(line) {
            LineType::Heading(level)
        } else if line.starts_with(ListItem::PREFIX) {
            LineType::UnorderedListItem
        } else if line.starts_with(BlockQuote::PREFIX) {
            LineType::BlockQuote
        } else {
            LineType::Paragraph
        }
    }
}
