//! Markdown to HTML fragment rendering.

use anyhow::Result;
use pulldown_cmark::escape::escape_html;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, html};

use crate::highlight::Highlighter;

/// A fenced code block being collected
struct FencedBlock {
    language: Option<String>,
    code: String,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render `markdown` into an HTML fragment.
///
/// Soft line breaks become `<br />` and fenced code blocks are passed
/// through `highlighter`.
pub fn render_markdown(markdown: &str, highlighter: &dyn Highlighter) -> Result<String> {
    let mut events = Vec::new();
    let mut fence: Option<FencedBlock> = None;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                fence = Some(FencedBlock {
                    language: info.split_whitespace().next().map(str::to_string),
                    code: String::new(),
                });
            }
            Event::End(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => {
                if let Some(block) = fence.take() {
                    events.push(Event::Html(code_block(&block, highlighter)?.into()));
                }
            }
            Event::Text(text) => match fence.as_mut() {
                Some(block) => block.code.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            Event::SoftBreak => events.push(Event::HardBreak),
            other => events.push(other),
        }
    }

    let mut fragment = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut fragment, events.into_iter());
    Ok(fragment)
}

fn code_block(block: &FencedBlock, highlighter: &dyn Highlighter) -> Result<String> {
    let highlighted = highlighter.highlight(&block.code, block.language.as_deref())?;

    let mut out = String::from("<pre><code class=\"hljs language-");
    escape_html(&mut out, &highlighted.language)?;
    out.push_str("\">");
    out.push_str(&highlighted.html);
    out.push_str("</code></pre>\n");
    Ok(out)
}
