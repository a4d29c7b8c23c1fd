//! Extension checks run before any file is touched.

use std::path::Path;

use crate::args::Config;
use crate::error::{ConvertError, ConvertResult};

pub const INPUT_EXTENSIONS: &[&str] = &["md", "markdown"];
pub const OUTPUT_EXTENSIONS: &[&str] = &["html", "htm"];

/// Check both paths of `config`; the input is checked first.
pub fn validate(config: &Config) -> ConvertResult<()> {
    check_extension(&config.input, INPUT_EXTENSIONS)?;
    check_extension(&config.output, OUTPUT_EXTENSIONS)
}

fn check_extension(path: &Path, expected: &'static [&'static str]) -> ConvertResult<()> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| expected.iter().any(|want| ext.eq_ignore_ascii_case(want)));

    if matches {
        Ok(())
    } else {
        Err(ConvertError::InvalidExtension {
            path: path.to_path_buf(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(input: &str, output: &str) -> Config {
        Config {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            ..Config::default()
        }
    }

    #[test]
    fn test_accepts_every_allowed_pair() {
        for input in ["a.md", "a.markdown"] {
            for output in ["b.html", "b.htm"] {
                assert!(validate(&config(input, output)).is_ok(), "{input} -> {output}");
            }
        }
    }

    #[test]
    fn test_extension_check_ignores_case() {
        assert!(validate(&config("README.MD", "out/Index.HTML")).is_ok());
        assert!(validate(&config("notes.Markdown", "page.Htm")).is_ok());
    }

    #[test]
    fn test_rejects_wrong_input_extension() {
        let err = validate(&config("notes.txt", "out.html")).unwrap_err();
        match err {
            ConvertError::InvalidExtension { path, expected } => {
                assert_eq!(path, PathBuf::from("notes.txt"));
                assert_eq!(expected, INPUT_EXTENSIONS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_wrong_output_extension() {
        let err = validate(&config("notes.md", "out.pdf")).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidExtension { expected, .. } if expected == OUTPUT_EXTENSIONS
        ));
    }

    #[test]
    fn test_rejects_missing_extension() {
        assert!(validate(&config("README", "out.html")).is_err());
        assert!(validate(&config("notes.md", "out")).is_err());
    }

    #[test]
    fn test_input_is_reported_before_output() {
        let err = validate(&config("a.txt", "b.pdf")).unwrap_err();
        assert!(err.to_string().contains("a.txt"));
    }
}
