pub mod anchors;
pub mod io;
pub mod options;
pub mod rendering;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use anchors::{IdRegistry, generate_id};
pub use io::*;
pub use options::RenderOptions;
pub use rendering::{to_html, to_html_with};
