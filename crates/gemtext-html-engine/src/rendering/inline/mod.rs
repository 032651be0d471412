//! # Inline Conversion
//!
//! Converts the text content of one Gemtext line (block marker already
//! stripped) into HTML suitable for placing inside a block element.
//!
//! ## Pipeline
//!
//! 1. **`guard`**: leading text that markdown would read as a block construct
//!    is backslash-escaped so only inline syntax is honoured
//! 2. **`renderer`**: the line is parsed with pulldown-cmark and its inline
//!    events (emphasis, strong, code, strikethrough, links, images) rendered
//!    to HTML; literal text is entity-escaped and raw HTML never passes through
//!
//! Wrapping the result in a block element is the caller's job.

pub mod guard;
pub mod renderer;

use crate::options::RenderOptions;

/// Convert a line's text content to inline HTML.
pub fn convert_inline(text: &str, options: &RenderOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let source = guard::neutralize_block_syntax(text);
    renderer::render_inline(&source, options.smart_punctuation)
}
