//! Anchor tags for link nodes.

use anyhow::{Context, Result};
use maud::html;
use url::Url;

/// Prefix identifying GitHub project links.
const GITHUB_PREFIX: &str = "https://github.com/";

/// Fragment GitHub appends to project URLs pointing at the readme.
const README_SUFFIX: &str = "#readme";

/// Target attribute applied to every anchor.
pub const LINK_TARGET: &str = "_blank noopener noreferrer";

/// Removes a trailing `#readme` fragment, matching the exact suffix only.
fn trim_readme(text: &str) -> &str {
    text.strip_suffix(README_SUFFIX).unwrap_or(text)
}

/// Display text and final href for a link.
///
/// GitHub project links display as `owner/repo` and lose their `#readme`
/// fragment. Anything else displays as the URL hostname with the href
/// kept verbatim.
///
/// # Errors
///
/// Returns error if a non GitHub href is not a valid absolute URL.
pub fn link_parts(href: &str) -> Result<(String, String)> {
    if let Some(project) = href.strip_prefix(GITHUB_PREFIX) {
        return Ok((trim_readme(project).to_string(), trim_readme(href).to_string()));
    }

    let url = Url::parse(href).with_context(|| format!("Invalid link URL: {}", href))?;
    let host = url.host_str().unwrap_or_default().to_string();

    Ok((host, href.to_string()))
}

/// Renders an anchor tag opening `href` in a new browsing context.
///
/// # Arguments
///
/// * `href`: Link target from the tree
///
/// # Returns
///
/// HTML anchor, e.g. `<a href="https://github.com/a/b" target="_blank noopener noreferrer">a/b</a>`
///
/// # Errors
///
/// Returns error if a non GitHub href cannot be parsed as a URL.
pub fn anchor(href: &str) -> Result<String> {
    let (text, href) = link_parts(href)?;

    Ok(html! {
        a href=(href) target=(LINK_TARGET) { (text) }
    }
    .into_string())
}
