//! Shared test utilities for integration tests.
//!
//! Provides fixture project layouts used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Link tree fixture covering ordering, exclusion, renaming, title
/// transforms and path filtering.
pub const FIXTURE_TREE: &str = r#"{
  "title": "root",
  "key": "0",
  "children": [
    {"title": "Collection", "key": "0-0", "children": [
      {"title": "blog", "children": [
        {"title": "hidden", "isLeaf": true, "href": "https://github.com/x/hidden#readme"}
      ]},
      {"title": "awesome", "children": [
        {"title": "list", "isLeaf": true, "href": "https://github.com/sindresorhus/awesome#readme"}
      ]}
    ]},
    {"title": "JavaScript", "children": [
      {"title": "dropped", "isLeaf": true, "href": "https://github.com/x/dropped"}
    ]},
    {"title": "Vue", "children": [
      {"title": "工具库", "children": [
        {"title": "css-vars", "isLeaf": true, "href": "https://github.com/x/css-vars#readme"},
        {"title": "vueuse", "isLeaf": true, "href": "https://github.com/vueuse/vueuse#readme"}
      ]}
    ]},
    {"title": "JavaScript-Utils", "children": [
      {"title": "lodash", "isLeaf": true, "href": "https://lodash.com/docs?v=4"}
    ]},
    {"title": "nodejs", "children": [
      {"title": "框架/冷", "children": [
        {"title": "koa", "isLeaf": true, "href": "https://github.com/koajs/koa#readme"}
      ]}
    ]}
  ]
}"#;

/// Template fixture with a single content placeholder.
pub const FIXTURE_TEMPLATE: &str = "# Komari\n\n{{content}}\n<!-- end -->\n";

/// Creates a project directory with the default input and template paths.
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_project(tree: &str, template: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "assets/fe.json", tree)?;
    write_file(dir.path(), "templates/README.md", template)?;
    Ok(dir)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
