/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default block when no other
/// line prefix matches. Consecutive paragraph lines share one element and
/// are separated by [`Paragraph::LINE_BREAK`].
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>";
    pub const LINE_BREAK: &'static str = "<br />";
}
