pub mod block_quote;
pub mod heading;
pub mod link;
pub mod list_item;
pub mod paragraph;
pub mod preformatted;

pub use block_quote::BlockQuote;
pub use heading::{Heading, HeadingLevel};
pub use link::{Link, LinkTarget, MediaKind};
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use preformatted::Preformatted;
