//! Output document assembly from a markdown template.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Placeholder replaced by the rendered content.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Substitutes rendered lines into the template.
///
/// Replaces the first occurrence of [`CONTENT_PLACEHOLDER`] with the lines
/// joined by newlines plus one trailing newline. Later occurrences are left
/// as they are. A template without the placeholder is returned unchanged.
pub fn apply_template(template: &str, lines: &[String]) -> String {
    if !template.contains(CONTENT_PLACEHOLDER) {
        tracing::warn!("Template has no {} placeholder", CONTENT_PLACEHOLDER);
        return template.to_string();
    }

    let content = format!("{}\n", lines.join("\n"));
    template.replacen(CONTENT_PLACEHOLDER, &content, 1)
}

/// Reads the template, fills in the content and writes the output file.
///
/// The output file is overwritten if it exists.
///
/// # Errors
///
/// Returns error if the template cannot be read or the output cannot be written.
pub fn write_document(
    template_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    lines: &[String],
) -> Result<()> {
    let template_path = template_path.as_ref();
    let output_path = output_path.as_ref();

    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;

    let output = apply_template(&template, lines);

    fs::write(output_path, output)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    tracing::info!(output = %output_path.display(), "Wrote document");
    Ok(())
}
