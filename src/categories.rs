//! Top level category ordering, exclusion and renaming.

use crate::{Node, Rules};

/// Orders, filters and renames top level categories.
///
/// Categories are sorted ascending by rank. The sort is stable, so
/// categories sharing a rank keep their original relative order. Excluded
/// titles are dropped after sorting, then renames apply to the survivors.
/// Children are left untouched.
///
/// # Arguments
///
/// * `categories`: Children of the tree root
/// * `rules`: Rank, exclusion and rename tables
///
/// # Returns
///
/// Reordered categories without excluded entries
pub fn sort_categories(mut categories: Vec<Node>, rules: &Rules) -> Vec<Node> {
    categories.sort_by_key(|node| rules.rank(node.title()));

    categories
        .into_iter()
        .filter(|node| {
            let excluded = rules.is_excluded(node.title());
            if excluded {
                tracing::debug!(category = node.title(), "Excluding category");
            }
            !excluded
        })
        .map(|mut node| {
            if let Some(new_title) = rules.rename(node.title()) {
                tracing::debug!(from = node.title(), to = new_title, "Renaming category");
                node.set_title(new_title);
            }
            node
        })
        .collect()
}
