use crate::options::RenderOptions;
use crate::rendering::escape::escape_html;
use crate::rendering::inline::convert_inline;

use super::Paragraph;

/// File extensions rendered as `<img>`.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "avif", "bmp", "gif", "jpg", "jpeg", "png", "svg", "webp", "xpm",
];

/// File extensions rendered as `<audio>`.
pub const AUDIO_EXTENSIONS: &[&str] = &["m3u", "m4a", "mp3", "ogg", "wav"];

/// File extensions rendered as `<video>`.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "avi", "divx", "m4v", "mkv", "mov", "mp4", "mpeg", "mpg", "vob", "webm", "wmv",
];

const AUDIO_FALLBACK: &str = "Sorry, your browser doesn't support embedded audio.";
const VIDEO_FALLBACK: &str = "Sorry, your browser doesn't support embedded video.";

/// How a link target is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    /// Anything else: a plain anchor.
    Page,
}

impl MediaKind {
    /// Classifies a file extension. Matching is case-sensitive.
    pub fn from_extension(ext: &str) -> Self {
        if IMAGE_EXTENSIONS.contains(&ext) {
            MediaKind::Image
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            MediaKind::Audio
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            MediaKind::Video
        } else {
            MediaKind::Page
        }
    }
}

/// URL and optional display name of a `=>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    pub url: &'a str,
    /// Empty when the line carries no name.
    pub name: &'a str,
}

impl<'a> LinkTarget<'a> {
    /// Splits a link line into URL (first token) and name (the trimmed rest).
    pub fn parse(line: &'a str) -> Self {
        let rest = line.strip_prefix(Link::PREFIX).unwrap_or(line).trim();
        match rest.split_once(char::is_whitespace) {
            Some((url, name)) => Self {
                url,
                name: name.trim(),
            },
            None => Self {
                url: rest,
                name: "",
            },
        }
    }

    /// Text after the last `.` of the URL, if any.
    pub fn extension(&self) -> Option<&'a str> {
        self.url.rsplit_once('.').map(|(_, ext)| ext)
    }

    pub fn media_kind(&self) -> MediaKind {
        self.extension()
            .map_or(MediaKind::Page, MediaKind::from_extension)
    }
}

/// Link line type with owned prefix knowledge.
pub struct Link;

impl Link {
    /// The link line prefix.
    pub const PREFIX: &'static str = "=>";

    /// Renders a link line; the result is always its own paragraph.
    pub fn render(line: &str, options: &RenderOptions) -> String {
        let target = LinkTarget::parse(line);
        let kind = if options.embed_media {
            target.media_kind()
        } else {
            MediaKind::Page
        };

        let src = escape_html(target.url);
        let ext = target.extension().unwrap_or_default();
        let body = match kind {
            MediaKind::Image => format!(
                r#"<img src="{src}" alt="{}" />"#,
                escape_html(target.name)
            ),
            MediaKind::Audio => format!(
                r#"<audio controls><source src="{src}" type="audio/{}" />{AUDIO_FALLBACK}</audio>"#,
                escape_html(ext)
            ),
            MediaKind::Video => format!(
                r#"<video controls><source src="{src}" type="video/{}" />{VIDEO_FALLBACK}</video>"#,
                escape_html(ext)
            ),
            MediaKind::Page => {
                let text = if target.name.is_empty() {
                    target.url
                } else {
                    target.name
                };
                format!(r#"<a href="{src}">{}</a>"#, convert_inline(text, options))
            }
        };

        format!("{}{body}{}", Paragraph::OPEN, Paragraph::CLOSE)
    }
}
