//! Markdown rendering of the link tree.
//!
//! Link nodes render as HTML anchor tags embedded in markdown list items;
//! categories render as plain list items or `##` headings at the top level.

mod links;
mod renderer;

pub use links::{LINK_TARGET, anchor, link_parts};
pub use renderer::{MarkdownRenderer, upper_first};
