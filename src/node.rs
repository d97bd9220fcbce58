//! Link tree data model and JSON loading.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Node of the curated link tree.
///
/// A node carrying the `isLeaf` marker in JSON is always a [`Node::Link`];
/// any `children` it declares are ignored. Every other node is a
/// [`Node::Category`], possibly with no children.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum Node {
    /// Grouping node with ordered children.
    Category { title: String, children: Vec<Node> },
    /// Terminal node pointing at an external resource.
    Link { title: String, href: String },
}

impl Node {
    /// Creates a category node.
    pub fn category(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Category {
            title: title.into(),
            children,
        }
    }

    /// Creates a link node.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Node::Link {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Node title.
    pub fn title(&self) -> &str {
        match self {
            Node::Category { title, .. } | Node::Link { title, .. } => title,
        }
    }

    /// Replaces the node title.
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        match self {
            Node::Category { title, .. } | Node::Link { title, .. } => *title = new_title.into(),
        }
    }

    /// Children of a category; empty for links.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Category { children, .. } => children,
            Node::Link { .. } => &[],
        }
    }

    /// Takes ownership of the children, leaving nothing behind.
    pub fn into_children(self) -> Vec<Node> {
        match self {
            Node::Category { children, .. } => children,
            Node::Link { .. } => Vec::new(),
        }
    }

    #[cfg(test)]
    fn is_leaf(&self) -> bool {
        matches!(self, Node::Link { .. })
    }
}

/// Wire shape of a node before the leaf marker is interpreted.
#[derive(Deserialize)]
struct RawNode {
    title: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(rename = "isLeaf", default)]
    is_leaf: Option<serde_json::Value>,
    #[serde(default)]
    children: Option<Vec<Node>>,
}

impl TryFrom<RawNode> for Node {
    type Error = String;

    fn try_from(raw: RawNode) -> std::result::Result<Self, Self::Error> {
        if raw.is_leaf.is_some() {
            let href = raw
                .href
                .ok_or_else(|| format!("link node '{}' is missing href", raw.title))?;
            return Ok(Node::Link {
                title: raw.title,
                href,
            });
        }

        Ok(Node::Category {
            title: raw.title,
            children: raw.children.unwrap_or_default(),
        })
    }
}

/// Parses a link tree from JSON text.
///
/// # Errors
///
/// Returns error if the text is not valid JSON or a node is malformed.
pub fn parse_tree(json: &str) -> Result<Node> {
    serde_json::from_str(json).context("Failed to parse link tree")
}

/// Loads the link tree from a JSON file.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed.
pub fn load_tree(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read link tree: {}", path.display()))?;
    parse_tree(&json).with_context(|| format!("Invalid link tree: {}", path.display()))
}
