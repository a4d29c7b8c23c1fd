//! Sequencing of one conversion run and its console report.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::args::{Config, DEFAULT_INPUT};
use crate::error::{ConvertError, ConvertResult};
use crate::files::{read_markdown, write_html};
use crate::highlight::Highlighter;
use crate::render::render_markdown;
use crate::template::compose;
use crate::title::extract_title;
use crate::validate::validate;

const RULE: &str = "======================================================";

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub input: PathBuf,
    /// Absolute path of the written page
    pub output: PathBuf,
    pub title: String,
}

impl Report {
    /// Success banner printed after the page is written.
    pub fn banner(&self) -> String {
        format!(
            "\n{RULE}\n\
             Conversion successful!\n\
             Input: {}\n\
             Output saved to: {}\n\
             Open this file in your browser to view the styled documentation.\n\
             {RULE}\n",
            basename(&self.input),
            self.output.display(),
        )
    }
}

/// A composed page and the title it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub html: String,
}

/// Turn Markdown source into a complete HTML page.
pub fn convert(markdown: &str, highlighter: &dyn Highlighter) -> ConvertResult<Page> {
    let title = extract_title(markdown);
    let fragment = render_markdown(markdown, highlighter)?;
    let html = compose(&title, &fragment);
    Ok(Page { title, html })
}

/// Validate, read, convert and write according to `config`.
///
/// Nothing is written unless reading and rendering both succeed.
pub fn run(config: &Config, highlighter: &dyn Highlighter) -> ConvertResult<Report> {
    validate(config)?;

    let markdown = read_markdown(&config.input)?;
    debug!(input = %config.input.display(), bytes = markdown.len(), "read markdown");

    let page = convert(&markdown, highlighter)?;
    debug!(title = %page.title, bytes = page.html.len(), "composed page");

    let output = write_html(&config.output, &page.html)?;
    debug!(output = %output.display(), "wrote page");

    Ok(Report {
        input: config.input.clone(),
        output,
        title: page.title,
    })
}

/// Notice printed before conversion starts.
pub fn intro(config: &Config) -> String {
    let mut notice = if config.input_defaulted {
        format!(
            "No input file provided. Defaulting to: {DEFAULT_INPUT}\n\
             To use a different file, run: mdpage <your-file.md> [-o <output.html>]"
        )
    } else {
        format!("Input file specified: {}", config.input.display())
    };
    if config.output_flag_set {
        notice.push_str(&format!("\nOutput file specified: {}", config.output.display()));
    }
    notice
}

/// Categorized failure message for the console.
pub fn failure_message(err: &ConvertError, input_defaulted: bool) -> String {
    let detail = match err {
        ConvertError::MissingArgumentValue { flag } => {
            format!("Error: Missing value for '{flag}'. Usage: {flag} <output.html>")
        }
        ConvertError::InvalidExtension { .. } => format!("Error: {err}"),
        ConvertError::FileNotFound { path } => {
            let mut detail = format!(
                "Error: File not found at the specified path.\n\
                 Please ensure the input file exists: \"{}\"",
                path.display()
            );
            if input_defaulted {
                detail.push_str(&format!(
                    "\nIf running without arguments, ensure '{DEFAULT_INPUT}' is present."
                ));
            }
            detail
        }
        ConvertError::GenericFailure(source) => format!("Detailed Error: {source:#}"),
    };
    format!("\nAn error occurred during the conversion process:\n{detail}")
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
