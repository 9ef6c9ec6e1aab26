//! Command-line parsing for the `reaver` binary.

use thiserror::Error;

pub const USAGE: &str = "\
Reaver - Turn-Based Combat Campaign

Usage: reaver [options]

Options:
  --seed <N>         Seed the random source for a reproducible run
  --name <NAME>      Name of the player character
  --json             Print events as JSON lines instead of text
  --simulate <RUNS>  Play RUNS campaigns silently and print a balance report
  --version, -v      Show version information
  --help, -h         Show this help message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {flag}: expected {expected}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play {
        seed: Option<u64>,
        name: Option<String>,
        json: bool,
    },
    Simulate {
        runs: u32,
        seed: Option<u64>,
    },
    Version,
    Help,
}

fn value<'a>(
    flag: &'static str,
    args: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String, CliError> {
    args.next().ok_or(CliError::MissingValue(flag))
}

fn number<T: std::str::FromStr>(
    flag: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, CliError> {
    raw.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: raw.to_string(),
        expected,
    })
}

pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut seed = None;
    let mut name = None;
    let mut json = false;
    let mut simulate = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--json" => json = true,
            "--seed" => {
                let raw = value("--seed", &mut iter)?;
                seed = Some(number("--seed", raw, "an unsigned integer")?);
            }
            "--name" => {
                let raw = value("--name", &mut iter)?.trim();
                if raw.is_empty() {
                    return Err(CliError::Empty("--name"));
                }
                name = Some(raw.to_string());
            }
            "--simulate" => {
                let raw = value("--simulate", &mut iter)?;
                let runs: u32 = number("--simulate", raw, "a positive run count")?;
                if runs == 0 {
                    return Err(CliError::InvalidValue {
                        flag: "--simulate",
                        value: raw.to_string(),
                        expected: "a positive run count",
                    });
                }
                simulate = Some(runs);
            }
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    Ok(match simulate {
        Some(runs) => Command::Simulate { runs, seed },
        None => Command::Play { seed, name, json },
    })
}
