//! mdpage - convert one Markdown document into a single styled HTML page.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! args::resolve -> validate -> files::read_markdown
//!     -> title::extract_title + render::render_markdown
//!     -> template::compose -> files::write_html
//! ```
//!
//! [`run::run`] drives the whole pipeline for a resolved [`Config`].

pub mod args;
pub mod error;
pub mod files;
pub mod highlight;
pub mod render;
pub mod run;
pub mod template;
pub mod title;
pub mod validate;

pub use args::{Config, Invocation, Resolution, Warning, resolve};
pub use error::{ConvertError, ConvertResult};
pub use highlight::{Highlighted, Highlighter, PlainHighlighter, SyntectHighlighter};
pub use render::render_markdown;
pub use run::{Page, Report, convert, run};
pub use template::compose;
pub use title::{DEFAULT_TITLE, extract_title};
