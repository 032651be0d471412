use serde::{Deserialize, Serialize};

/// Per-call rendering switches.
///
/// The defaults produce the plain output form: bare headings, curly-quote
/// normalization and embedded media elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Wrap heading text in a self-link (`<a href="#id">`).
    pub heading_anchors: bool,
    /// Apply the smart punctuation transform to inline text.
    pub smart_punctuation: bool,
    /// Render image/audio/video links as embedded elements instead of anchors.
    pub embed_media: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_anchors: false,
            smart_punctuation: true,
            embed_media: true,
        }
    }
}
