//! Link tree to markdown document pipeline.

use anyhow::{Context, Result};

use crate::{BuildConfig, MarkdownRenderer, Node, Rules, load_tree, sort_categories, write_document};

/// Renders the root's categories into document lines.
///
/// Sorts, filters and renames the top level categories, then renders them
/// with headings and nested lists.
///
/// # Errors
///
/// Returns error if any link cannot be rendered.
pub fn render_tree(root: Node, rules: &Rules) -> Result<Vec<String>> {
    let categories = sort_categories(root.into_children(), rules);
    tracing::info!(categories = categories.len(), "Rendering categories");

    MarkdownRenderer::new(rules).render_categories(&categories)
}

/// Loads the tree, renders it and writes the output document.
///
/// # Errors
///
/// Returns error if the tree, rules or template cannot be read, a link
/// cannot be rendered, or the output cannot be written.
pub fn build(config: &BuildConfig) -> Result<()> {
    let rules = config.load_rules()?;
    let root = load_tree(&config.input)?;

    let lines = render_tree(root, &rules).context("Failed to render link tree")?;

    write_document(&config.template, &config.output, &lines)
}
