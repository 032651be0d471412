pub mod blocks;
pub mod escape;
pub mod inline;

use crate::options::RenderOptions;
use blocks::{GemtextLineClassifier, HtmlBuilder};

/// Convert a Gemtext document to an HTML fragment with default options.
///
/// Total over all inputs: every line classifies and converts, so there is
/// no error case. Empty input yields an empty string.
pub fn to_html(gemtext: &str) -> String {
    to_html_with(gemtext, &RenderOptions::default())
}

/// Convert a Gemtext document to an HTML fragment.
pub fn to_html_with(gemtext: &str, options: &RenderOptions) -> String {
    if gemtext.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = gemtext.split('\n').collect();
    let classifier = GemtextLineClassifier;
    let mut builder = HtmlBuilder::new(&lines, options);

    for (index, line) in lines.iter().enumerate() {
        let line_type = classifier.classify(line);
        builder.push(index, line_type);
    }

    builder.finish()
}
