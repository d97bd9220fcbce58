//! Markdown list rendering for the link tree.

use anyhow::Result;

use super::links::anchor;
use crate::{Node, Rules};

/// Indent unit per nesting level.
const INDENT: &str = "  ";

/// Uppercases the first character, leaving the rest unchanged.
///
/// Case mapping is unicode aware: a first character that maps to several
/// uppercase characters expands in place.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins a child title onto a parent path key.
fn child_path(parent: Option<&str>, title: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => format!("{}.{}", parent, title),
        _ => title.to_string(),
    }
}

/// Renders the link tree as nested markdown lists.
///
/// Each top level category becomes a `##` heading; its descendants become
/// list items indented two spaces per level. Link nodes render as anchor
/// tags. Subtrees whose dot joined title path appears in the rules' path
/// filters are omitted.
pub struct MarkdownRenderer<'a> {
    rules: &'a Rules,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer driven by the given rule tables.
    pub fn new(rules: &'a Rules) -> Self {
        Self { rules }
    }

    /// Renders a single list item line without children.
    ///
    /// # Errors
    ///
    /// Returns error if a link node's href cannot be rendered.
    pub fn line(&self, node: &Node, depth: usize) -> Result<String> {
        let prefix = INDENT.repeat(depth);
        let text = match node {
            Node::Link { href, .. } => anchor(href)?,
            Node::Category { title, .. } => self.rules.transform_title(title),
        };

        Ok(format!("{}- {}", prefix, text))
    }

    /// Renders a node and its surviving descendants.
    ///
    /// The node's own line is always emitted; callers decide whether the
    /// node itself is filtered. Children whose path key is filtered are
    /// skipped along with their whole subtree.
    ///
    /// # Arguments
    ///
    /// * `node`: Node to render
    /// * `depth`: Nesting level of the node's own line
    /// * `path`: Path key of the node, if any
    ///
    /// # Returns
    ///
    /// Newline separated block of list items
    ///
    /// # Errors
    ///
    /// Returns error if any link in the subtree cannot be rendered.
    pub fn walk(&self, node: &Node, depth: usize, path: Option<&str>) -> Result<String> {
        let line = self.line(node, depth)?;

        let children = match node {
            Node::Link { .. } => return Ok(line),
            Node::Category { children, .. } => children,
        };

        let mut block = vec![line];
        for child in children {
            let key = child_path(path, child.title());
            if self.rules.is_path_filtered(&key) {
                tracing::debug!(path = %key, "Skipping filtered subtree");
                continue;
            }
            block.push(self.walk(child, depth + 1, Some(&key))?);
        }

        Ok(block.join("\n"))
    }

    /// Renders top level categories into document lines.
    ///
    /// Emits a `##` heading per category, titled with its first character
    /// uppercased, followed by one block per surviving child. Children are
    /// walked from depth zero with `"<Heading>.<Child>"` as their path key.
    ///
    /// # Errors
    ///
    /// Returns error if any link cannot be rendered.
    pub fn render_categories(&self, categories: &[Node]) -> Result<Vec<String>> {
        let mut content = Vec::new();

        for category in categories {
            let title = upper_first(category.title());
            content.push(format!("## {}", title));

            for child in category.children() {
                let key = format!("{}.{}", title, child.title());
                if self.rules.is_path_filtered(&key) {
                    tracing::debug!(path = %key, "Skipping filtered subtree");
                    continue;
                }
                content.push(self.walk(child, 0, Some(&key))?);
            }
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gh(title: &str, repo: &str) -> Node {
        Node::link(title, format!("https://github.com/{}#readme", repo))
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("nodejs"), "Nodejs");
        assert_eq!(upper_first("React"), "React");
        assert_eq!(upper_first("vUE"), "VUE");
        assert_eq!(upper_first("手机端"), "手机端");
        assert_eq!(upper_first("ätsch"), "Ätsch");
        assert_eq!(upper_first("ßtraße"), "SStraße");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_line_indentation() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);
        let node = Node::category("Tools", vec![]);

        // Act & Assert
        assert_eq!(renderer.line(&node, 0).unwrap(), "- Tools");
        assert_eq!(renderer.line(&node, 2).unwrap(), "    - Tools");
    }

    #[test]
    fn test_line_applies_title_transform_to_categories() {
        // Arrange
        let rules = Rules::default();
        let renderer = MarkdownRenderer::new(&rules);

        // Act
        let line = renderer
            .line(&Node::category("动画/冷", vec![]), 1)
            .unwrap();

        // Assert
        assert_eq!(line, "  - 动画/冷门");
    }

    #[test]
    fn test_walk_nested_block() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);
        let tree = Node::category(
            "Tools",
            vec![
                gh("a", "a/a"),
                Node::category("Sub", vec![Node::link("b", "https://b.dev/x")]),
            ],
        );

        // Act
        let block = renderer.walk(&tree, 0, None).unwrap();

        // Assert
        assert_eq!(
            block,
            [
                "- Tools",
                r#"  - <a href="https://github.com/a/a" target="_blank noopener noreferrer">a/a</a>"#,
                "  - Sub",
                r#"    - <a href="https://b.dev/x" target="_blank noopener noreferrer">b.dev</a>"#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_walk_filters_subtree_by_path() {
        // Arrange
        let mut rules = Rules::empty();
        rules.path_filters.insert("Vue.工具库.css-vars".to_string());
        let renderer = MarkdownRenderer::new(&rules);
        let tree = Node::category(
            "工具库",
            vec![
                Node::category("css-vars", vec![gh("hidden", "x/hidden")]),
                gh("shown", "x/shown"),
            ],
        );

        // Act
        let block = renderer.walk(&tree, 0, Some("Vue.工具库")).unwrap();

        // Assert
        assert!(!block.contains("css-vars"));
        assert!(!block.contains("x/hidden"));
        assert!(block.contains("x/shown"));
    }

    #[test]
    fn test_walk_keeps_parent_when_all_children_filtered() {
        // Arrange
        let mut rules = Rules::empty();
        rules.path_filters.insert("Lonely.only".to_string());
        let renderer = MarkdownRenderer::new(&rules);
        let tree = Node::category("Lonely", vec![gh("only", "x/y")]);

        // Act
        let block = renderer.walk(&tree, 0, Some("Lonely")).unwrap();

        // Assert
        assert_eq!(block, "- Lonely");
    }

    #[test]
    fn test_walk_link_ignores_depth_children() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);

        // Act
        let block = renderer
            .walk(&Node::link("x", "https://x.dev"), 3, Some("A.x"))
            .unwrap();

        // Assert
        assert_eq!(
            block,
            r#"      - <a href="https://x.dev" target="_blank noopener noreferrer">x.dev</a>"#
        );
    }

    #[test]
    fn test_render_categories_heading_and_depth() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);
        let categories = vec![Node::category("nodejs", vec![gh("foo", "a/b")])];

        // Act
        let content = renderer.render_categories(&categories).unwrap().join("\n");

        // Assert
        assert_eq!(
            content,
            "## Nodejs\n- <a href=\"https://github.com/a/b\" target=\"_blank noopener noreferrer\">a/b</a>"
        );
    }

    #[test]
    fn test_render_categories_filters_top_level_child() {
        // Arrange
        let rules = Rules::default();
        let renderer = MarkdownRenderer::new(&rules);
        let categories = vec![Node::category(
            "collection",
            vec![
                Node::category("blog", vec![gh("b", "x/blog")]),
                Node::category("docs", vec![gh("d", "x/docs")]),
            ],
        )];

        // Act
        let content = renderer.render_categories(&categories).unwrap();

        // Assert
        assert_eq!(content[0], "## Collection");
        assert_eq!(content.len(), 2, "Filtered child must contribute nothing");
        assert!(content[1].starts_with("- docs"));
    }

    #[test]
    fn test_render_categories_empty_category_still_has_heading() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);

        // Act
        let content = renderer
            .render_categories(&[Node::category("empty", vec![])])
            .unwrap();

        // Assert
        assert_eq!(content, ["## Empty"]);
    }

    #[test]
    fn test_walk_without_path_keys_children_by_title() {
        // Arrange
        let mut rules = Rules::empty();
        rules.path_filters.insert("only".to_string());
        let renderer = MarkdownRenderer::new(&rules);
        let tree = Node::category("Lonely", vec![gh("only", "x/y")]);

        // Act
        let block = renderer.walk(&tree, 0, None).unwrap();

        // Assert
        assert_eq!(block, "- Lonely");
    }

    #[test]
    fn test_render_categories_empty_title_keys_with_leading_dot() {
        // Arrange
        let mut rules = Rules::empty();
        rules.path_filters.insert(".blog".to_string());
        let renderer = MarkdownRenderer::new(&rules);
        let categories = vec![Node::category("", vec![Node::category("blog", vec![])])];

        // Act
        let content = renderer.render_categories(&categories).unwrap();

        // Assert
        assert_eq!(content, ["## "]);
    }

    #[test]
    fn test_render_categories_bare_title_key_does_not_match_empty_heading() {
        // Arrange
        let mut rules = Rules::empty();
        rules.path_filters.insert("blog".to_string());
        let renderer = MarkdownRenderer::new(&rules);
        let categories = vec![Node::category("", vec![Node::category("blog", vec![])])];

        // Act
        let content = renderer.render_categories(&categories).unwrap();

        // Assert
        assert_eq!(content, ["## ", "- blog"]);
    }

    #[test]
    fn test_render_categories_link_at_top_level_is_heading_only() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);

        // Act
        let content = renderer
            .render_categories(&[Node::link("solo", "https://github.com/x/solo")])
            .unwrap();

        // Assert
        assert_eq!(content, ["## Solo"]);
    }

    #[test]
    fn test_render_categories_propagates_bad_link() {
        // Arrange
        let rules = Rules::empty();
        let renderer = MarkdownRenderer::new(&rules);
        let categories = vec![Node::category("a", vec![Node::link("bad", "::::")])];

        // Act
        let result = renderer.render_categories(&categories);

        // Assert
        assert!(result.is_err());
    }
}
