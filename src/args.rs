//! Command-line resolution.
//!
//! Turns the raw argument list (program name excluded) into an immutable
//! [`Config`]. Unknown flags and surplus positionals are reported as
//! warnings and otherwise ignored.

use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{ConvertError, ConvertResult};

/// Input used when no positional argument is given
pub const DEFAULT_INPUT: &str = "sample.md";

/// Output used when neither a flag nor a second positional sets one
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Resolved paths for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// No positional input was given and [`DEFAULT_INPUT`] is used
    pub input_defaulted: bool,
    /// Output came from `-o`/`--output`
    pub output_flag_set: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            input_defaulted: true,
            output_flag_set: false,
        }
    }
}

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Convert(Config),
    Help,
    Version,
}

/// Non-fatal conditions found while resolving arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnknownFlag(String),
    ExtraPositional(String),
    /// A positional output lost to `-o`/`--output`
    OverriddenOutput(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownFlag(flag) => write!(f, "ignoring unknown flag '{flag}'"),
            Warning::ExtraPositional(arg) => write!(f, "ignoring extra argument '{arg}'"),
            Warning::OverriddenOutput(arg) => {
                write!(f, "ignoring output '{arg}': --output takes precedence")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub invocation: Invocation,
    pub warnings: Vec<Warning>,
}

impl Resolution {
    fn new(invocation: Invocation, warnings: Vec<Warning>) -> Self {
        Self {
            invocation,
            warnings,
        }
    }
}

/// Resolve an argument list into an [`Invocation`].
///
/// `-o <path>` / `--output <path>` (or `--output=<path>`) wins over a
/// positional output wherever it appears; repeating it keeps the last value.
/// Path arguments are kept as raw OS strings.
pub fn resolve<S: AsRef<OsStr>>(args: &[S]) -> ConvertResult<Resolution> {
    let mut input: Option<PathBuf> = None;
    let mut positional_output: Option<PathBuf> = None;
    let mut flag_output: Option<PathBuf> = None;
    let mut warnings = Vec::new();

    let mut tokens = args.iter().map(AsRef::as_ref);
    while let Some(token) = tokens.next() {
        match token.to_str() {
            Some(flag @ ("-o" | "--output")) => {
                let value = tokens
                    .next()
                    .ok_or_else(|| ConvertError::MissingArgumentValue {
                        flag: flag.to_string(),
                    })?;
                flag_output = Some(PathBuf::from(value));
            }
            Some("-h" | "--help") => return Ok(Resolution::new(Invocation::Help, warnings)),
            Some("-V" | "--version") => return Ok(Resolution::new(Invocation::Version, warnings)),
            _ => {
                if let Some(value) = output_equals_value(token) {
                    if value.is_empty() {
                        return Err(ConvertError::MissingArgumentValue {
                            flag: "--output".to_string(),
                        });
                    }
                    flag_output = Some(PathBuf::from(value));
                } else if is_flag(token) {
                    record(&mut warnings, Warning::UnknownFlag(lossy(token)));
                } else if input.is_none() {
                    input = Some(PathBuf::from(token));
                } else if positional_output.is_none() {
                    positional_output = Some(PathBuf::from(token));
                } else {
                    record(&mut warnings, Warning::ExtraPositional(lossy(token)));
                }
            }
        }
    }

    let output_flag_set = flag_output.is_some();
    if output_flag_set {
        if let Some(overridden) = positional_output.take() {
            record(
                &mut warnings,
                Warning::OverriddenOutput(overridden.display().to_string()),
            );
        }
    }

    let defaults = Config::default();
    let config = Config {
        input_defaulted: input.is_none(),
        output_flag_set,
        input: input.unwrap_or(defaults.input),
        output: flag_output.or(positional_output).unwrap_or(defaults.output),
    };

    Ok(Resolution::new(Invocation::Convert(config), warnings))
}

/// Log a warning as soon as it is found, so it is reported even if a later
/// token fails resolution.
fn record(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("{warning}");
    warnings.push(warning);
}

fn lossy(token: &OsStr) -> String {
    token.to_string_lossy().into_owned()
}

/// Value of a `--output=<path>` token, byte for byte.
fn output_equals_value(token: &OsStr) -> Option<&OsStr> {
    let value = token.as_encoded_bytes().strip_prefix(b"--output=")?;
    // SAFETY: the split is directly after an ASCII prefix of a valid
    // encoded OS string.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(value) })
}

/// A lone `-` is treated as a positional value.
fn is_flag(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

/// Help text printed for `-h`/`--help`.
pub fn usage() -> String {
    format!(
        "\
{description}

Usage: mdpage [INPUT] [OUTPUT] [-o <OUTPUT>]

Arguments:
  [INPUT]   Markdown file to convert (.md, .markdown) [default: {DEFAULT_INPUT}]
  [OUTPUT]  HTML file to write (.html, .htm) [default: {DEFAULT_OUTPUT}]

Options:
  -o, --output <OUTPUT>  HTML file to write; takes precedence over [OUTPUT]
  -h, --help             Print help
  -V, --version          Print version

Set RUST_LOG (e.g. RUST_LOG=debug) to see diagnostic logging.
",
        description = env!("CARGO_PKG_DESCRIPTION"),
    )
}
