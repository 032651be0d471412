use crate::options::RenderOptions;
use crate::rendering::inline::convert_inline;

/// Unordered list item line type. Gemtext lists never nest.
pub struct ListItem;

impl ListItem {
    /// The list item prefix character.
    pub const PREFIX: char = '*';

    pub const LIST_OPEN: &'static str = "<ul>";
    pub const LIST_CLOSE: &'static str = "</ul>";

    /// Renders one `* item` line as an `<li>` element.
    pub fn render(line: &str, options: &RenderOptions) -> String {
        let text = line.strip_prefix(Self::PREFIX).unwrap_or(line).trim();
        format!("<li>{}</li>", convert_inline(text, options))
    }
}
