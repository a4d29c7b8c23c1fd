//! Syntax highlighting for fenced code blocks.
//!
//! The renderer only talks to the [`Highlighter`] trait, so the engine can
//! be swapped without touching rendering or templating.

use anyhow::{Context, Result};
use pulldown_cmark::escape::escape_html;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Language label used when a block has no tag or an unrecognised one
pub const PLAINTEXT: &str = "plaintext";

/// Highlighted contents of one code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    /// Label for the `language-*` class
    pub language: String,
    /// Escaped, possibly span-annotated code, without `<pre>`/`<code>`
    pub html: String,
}

pub trait Highlighter {
    /// Highlight `code` for the declared `language` tag. Unknown or absent
    /// tags must fall back to [`PLAINTEXT`] instead of failing.
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<Highlighted>;
}

/// Highlighter backed by syntect's bundled syntaxes.
///
/// Spans carry `hljs-`-prefixed scope classes so that a highlight.js theme
/// stylesheet colours them.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<Highlighted> {
        let found = language.and_then(|tag| {
            self.syntaxes
                .find_syntax_by_token(tag)
                .map(|syntax| (tag.to_ascii_lowercase(), syntax))
        });
        let (label, syntax) = match found {
            Some(found) => found,
            None => (PLAINTEXT.to_string(), self.syntaxes.find_syntax_plain_text()),
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntaxes,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .with_context(|| format!("failed to highlight {label} code block"))?;
        }

        Ok(Highlighted {
            language: label,
            html: generator.finalize(),
        })
    }
}

/// Escapes code without any highlighting markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: Option<&str>) -> Result<Highlighted> {
        let mut html = String::with_capacity(code.len());
        escape_html(&mut html, code)?;
        Ok(Highlighted {
            language: PLAINTEXT.to_string(),
            html,
        })
    }
}
