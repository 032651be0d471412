use crate::options::RenderOptions;
use crate::rendering::inline::convert_inline;

/// Gemtext heading depth. Gemtext stops at three levels; extra `#` are text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// The line prefix for this level.
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::One => "#",
            HeadingLevel::Two => "##",
            HeadingLevel::Three => "###",
        }
    }

    /// The HTML element name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "h1",
            HeadingLevel::Two => "h2",
            HeadingLevel::Three => "h3",
        }
    }
}

/// Heading line type with owned marker knowledge.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const PREFIX: char = '#';

    /// Detects the heading level of a line, longest marker first.
    pub fn level(line: &str) -> Option<HeadingLevel> {
        [HeadingLevel::Three, HeadingLevel::Two, HeadingLevel::One]
            .into_iter()
            .find(|level| line.starts_with(level.marker()))
    }

    /// Renders a heading line with an already deduplicated `id`.
    pub fn render(line: &str, level: HeadingLevel, id: &str, options: &RenderOptions) -> String {
        let text = line.strip_prefix(level.marker()).unwrap_or(line).trim();
        let body = convert_inline(text, options);
        let tag = level.tag();

        if options.heading_anchors {
            format!(r##"<{tag} id="{id}"><a href="#{id}">{body}</a></{tag}>"##)
        } else {
            format!(r#"<{tag} id="{id}">{body}</{tag}>"#)
        }
    }
}
