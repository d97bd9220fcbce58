//! Ordering, filtering and renaming tables applied to the link tree.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Rank assigned to categories missing from the rank table.
pub const DEFAULT_RANK: i32 = 100;

/// Static tables steering category ordering and rendering.
///
/// [`Rules::default`] carries the tables used for the published document.
/// A JSON file may override any subset of fields; missing fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rules {
    /// Category title to sort rank, ascending.
    pub ranks: HashMap<String, i32>,
    /// Rank for categories not listed in `ranks`.
    pub default_rank: i32,
    /// Top level category titles removed after sorting.
    pub excluded_categories: HashSet<String>,
    /// Top level category renames, applied after exclusion.
    pub renames: HashMap<String, String>,
    /// Literal substring replacements for category titles, applied in order.
    pub title_replacements: Vec<(String, String)>,
    /// Dot joined title paths whose subtrees are omitted.
    pub path_filters: HashSet<String>,
}

impl Default for Rules {
    fn default() -> Self {
        let ranks = [
            ("nodejs", 1),
            ("React", 2),
            ("Vue", 3),
            ("JavaScript-Utils", 4),
            ("手机端", 5),
            ("客户端", 6),
        ]
        .into_iter()
        .map(|(title, rank)| (title.to_string(), rank))
        .collect();

        let title_replacements = [
            ("/冷", "/冷门"),
            ("/少", "/内容少"),
            ("/老", "/陈旧"),
            ("/旧", "/陈旧"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        Self {
            ranks,
            default_rank: DEFAULT_RANK,
            excluded_categories: HashSet::from(["JavaScript".to_string()]),
            renames: HashMap::from([("JavaScript-Utils".to_string(), "JavaScript".to_string())]),
            title_replacements,
            path_filters: ["Collection.blog", "Blog.实例收集", "Vue.工具库.css-vars"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Rules {
    /// Tables that leave the tree untouched: no ranks, exclusions, renames,
    /// replacements or path filters.
    pub fn empty() -> Self {
        Self {
            ranks: HashMap::new(),
            default_rank: DEFAULT_RANK,
            excluded_categories: HashSet::new(),
            renames: HashMap::new(),
            title_replacements: Vec::new(),
            path_filters: HashSet::new(),
        }
    }

    /// Loads rule overrides from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid rules object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse rules: {}", path.display()))
    }

    /// Sort rank of a top level category.
    pub fn rank(&self, title: &str) -> i32 {
        self.ranks.get(title).copied().unwrap_or(self.default_rank)
    }

    pub fn is_excluded(&self, title: &str) -> bool {
        self.excluded_categories.contains(title)
    }

    /// Replacement title for a top level category, if one is configured.
    pub fn rename(&self, title: &str) -> Option<&str> {
        self.renames.get(title).map(String::as_str)
    }

    /// Applies title replacements in order.
    ///
    /// Each rule replaces only its first occurrence. Rules are independent:
    /// a later rule sees the output of earlier ones.
    pub fn transform_title(&self, title: &str) -> String {
        self.title_replacements
            .iter()
            .fold(title.to_string(), |acc, (from, to)| acc.replacen(from, to, 1))
    }

    pub fn is_path_filtered(&self, path: &str) -> bool {
        self.path_filters.contains(path)
    }
}
