mod debug_report;

use archrank::{AliasFlavor, ConfigError, DistType, Options, Pool};
use std::io::{self, IsTerminal, Read};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("error: {0} expects a value")]
    MissingValue(&'static str),

    #[error("error: input provided multiple times")]
    DuplicateInput,

    #[error("error: unknown option '{0}'")]
    UnknownOption(String),

    #[error("error: no input provided\n\n{}", help_text())]
    NoInput,

    #[error("error: {0}")]
    Config(#[from] ConfigError),

    #[error("error: failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut pool = Pool::with_options(config.options);
    if config.raw_policy {
        pool.set_architecture_policy(Some(&config.input));
    } else {
        pool.set_architecture(Some(&config.input));
    }
    debug_report::print_report(&config.input, &mut pool, config.color);
}

struct CliConfig {
    input: String,
    raw_policy: bool,
    options: Options,
    color: bool,
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut raw_policy = false;
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("archrank {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-p" | "--policy" => raw_policy = true,
            "--flavor" => {
                let value = args.next().ok_or(CliError::MissingValue("--flavor"))?;
                options.flavor = value.parse::<AliasFlavor>()?;
            }
            "--disttype" => {
                let value = args.next().ok_or(CliError::MissingValue("--disttype"))?;
                options.dist_type = value.parse::<DistType>()?;
            }
            "--" => {
                if let Some(value) = args.next() {
                    set_input(value, &mut input)?;
                }
                if let Some(extra) = args.next() {
                    return Err(CliError::UnknownOption(extra));
                }
                break;
            }
            _ if arg.starts_with("--flavor=") => {
                options.flavor = arg.trim_start_matches("--flavor=").parse::<AliasFlavor>()?;
            }
            _ if arg.starts_with("--disttype=") => {
                options.dist_type = arg.trim_start_matches("--disttype=").parse::<DistType>()?;
            }
            _ if arg.starts_with('-') => return Err(CliError::UnknownOption(arg)),
            _ => set_input(arg, &mut input)?,
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };
    let input = input.trim().to_string();

    if input.is_empty() {
        return Err(CliError::NoInput);
    }

    Ok(CliConfig { input, raw_policy, options, color })
}

fn set_input(value: String, input: &mut Option<String>) -> Result<(), CliError> {
    if input.is_some() {
        return Err(CliError::DuplicateInput);
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "archrank {version}

Compile an architecture policy and show the resulting preference table.

Usage:
  archrank [OPTIONS] [--] <arch>
  archrank [OPTIONS] --policy <policy>

Policies list architectures, most preferred first, joined by:
  a=b   equivalent
  a>b   a preferred; may fall back from a to b, never b to a
  a:b   a preferred; never switch between a and b

Options:
  -p, --policy               Treat the input as a raw policy string instead of
                             expanding known architecture names.
  --flavor <name>            Alias list: generic (default) or fedora.
  --disttype <name>          Packaging convention: rpm (default), deb, arch, haiku.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Input is read from stdin when no argument is given.
Set RUST_LOG=archrank=trace to trace compilation.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
