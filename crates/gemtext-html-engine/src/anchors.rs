//! Heading identifiers.
//!
//! [`generate_id`] turns a heading line into a URL-safe slug. Repeated slugs
//! within one document are disambiguated by an [`IdRegistry`] owned by the
//! conversion call: the first occurrence keeps the bare slug, later ones get
//! `-1`, `-2`, ... appended.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Maximum length of a generated slug, in bytes (slugs are ASCII).
pub const MAX_ID_LEN: usize = 32;

fn symbol_regex() -> &'static Regex {
    // Everything except ASCII alphanumerics, space and hyphen
    static SYMBOLS: OnceLock<Regex> = OnceLock::new();
    SYMBOLS.get_or_init(|| Regex::new(r"[^a-zA-Z0-9 -]+").expect("Invalid heading id regex"))
}

/// Generate a URL-safe identifier from heading text.
///
/// Heading markers need not be stripped first: `#` is removed along with
/// every other symbol. Only the first line of `text` is considered.
pub fn generate_id(text: &str) -> String {
    let first_line = text.split('\n').next().unwrap_or_default();
    let sanitized = symbol_regex().replace_all(first_line, "");

    let mut id = sanitized
        .trim_matches(' ')
        .replace(' ', "-")
        .to_ascii_lowercase();

    id.truncate(MAX_ID_LEN);
    id.truncate(id.trim_end_matches('-').len());
    id
}

/// Tracks slugs already handed out during a single conversion.
#[derive(Debug, Default)]
pub struct IdRegistry {
    seen: HashMap<String, usize>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a document-unique id for `slug`, recording the occurrence.
    pub fn register(&mut self, slug: String) -> String {
        match self.seen.get_mut(&slug) {
            Some(count) => {
                let id = format!("{slug}-{count}");
                *count += 1;
                id
            }
            None => {
                self.seen.insert(slug.clone(), 1);
                slug
            }
        }
    }
}
