//! # Block Rendering
//!
//! Two-phase, line-oriented rendering of Gemtext blocks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineType` from its prefix alone, without reference to its neighbours
//!
//! 2. **Block Construction** (`builder`): an `HtmlBuilder` holds the single
//!    open `BlockState` and emits HTML as blocks open and close
//!
//! ## Modules
//!
//! - **`kinds`**: line types with owned delimiters and per-line rendering
//!   (Paragraph, Link, Heading, ListItem, BlockQuote, Preformatted)
//! - **`classify`**: `GemtextLineClassifier` produces a `LineType` per line
//! - **`builder`**: `HtmlBuilder` state machine with one-line lookahead
//!
//! ## Key Invariants
//!
//! - Exactly one block state is active at any line boundary
//! - Preformatted blocks are raw zones: no classification inside them
//! - Headings and links never open or close a block

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockState, HtmlBuilder};
pub use classify::{GemtextLineClassifier, LineType};
