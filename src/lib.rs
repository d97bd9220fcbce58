//! Markdown generator for a curated tree of categorized links.

mod build;
mod categories;
mod config;
pub mod deploy;
pub mod logging;
mod markdown;
mod node;
mod rules;
mod template;

pub use build::{build, render_tree};
pub use categories::sort_categories;
pub use config::{BuildConfig, DEFAULT_REMOTE, DeployConfig};
pub use deploy::Deployer;
pub use markdown::{LINK_TARGET, MarkdownRenderer, anchor, link_parts, upper_first};
pub use node::{Node, load_tree, parse_tree};
pub use rules::{DEFAULT_RANK, Rules};
pub use template::{CONTENT_PLACEHOLDER, apply_template, write_document};
