//! Page title derived from the Markdown source.

/// Title used when no line of the document starts with `#`
pub const DEFAULT_TITLE: &str = "Converted Document";

/// Derive the page title from the first line that starts with `#`.
///
/// Only the leading `#` is stripped, so `## Setup` yields `# Setup`. A
/// matching line with nothing after the marker also falls back to
/// [`DEFAULT_TITLE`].
pub fn extract_title(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix('#'))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}
