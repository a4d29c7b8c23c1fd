//! Reading the Markdown source and writing the finished page.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use anyhow::Context;

use crate::error::{ConvertError, ConvertResult};

/// Read the whole input file as UTF-8 text.
pub fn read_markdown(path: &Path) -> ConvertResult<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ConvertError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => anyhow::Error::new(err)
            .context(format!("failed to read {}", path.display()))
            .into(),
    })
}

/// Create or overwrite `path` with `html` and return the absolute path written.
///
/// Relative paths resolve against the current working directory. Missing
/// parent directories are not created.
pub fn write_html(path: &Path, html: &str) -> ConvertResult<PathBuf> {
    let target = absolute(path)?;
    fs::write(&target, html).with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}

fn absolute(path: &Path) -> ConvertResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("failed to resolve the current directory")?;
    Ok(cwd.join(path))
}
