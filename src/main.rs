use std::ffi::OsString;
use std::process::ExitCode;

use mdpage::args::{self, Invocation};
use mdpage::{ConvertError, SyntectHighlighter, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();

    let resolution = match args::resolve(&argv) {
        Ok(resolution) => resolution,
        Err(err) => return fail(&err, false),
    };

    let config = match resolution.invocation {
        Invocation::Help => {
            print!("{}", args::usage());
            return ExitCode::SUCCESS;
        }
        Invocation::Version => {
            println!("mdpage {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Invocation::Convert(config) => config,
    };

    println!("{}", run::intro(&config));

    let highlighter = SyntectHighlighter::new();
    match run::run(&config, &highlighter) {
        Ok(report) => {
            println!("{}", report.banner());
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err, config.input_defaulted),
    }
}

fn fail(err: &ConvertError, input_defaulted: bool) -> ExitCode {
    eprintln!("{}", run::failure_message(err, input_defaulted));
    ExitCode::FAILURE
}

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
