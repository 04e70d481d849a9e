// This file is part of smallsh, a small POSIX-style shell with job control.
// Copyright (C) 2026 smallsh developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command line argument parser for the shell

use smallsh_env::job::JobRegistry;
use std::iter::Peekable;
use thiserror::Error;

/// Configuration for starting the main read-eval loop
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Run {
    /// Maximum number of background jobs tracked at a time
    pub job_capacity: usize,
}

impl Default for Run {
    fn default() -> Self {
        Run {
            job_capacity: JobRegistry::DEFAULT_CAPACITY,
        }
    }
}

/// Parse result
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Parse {
    /// Runs the shell
    Run(Run),
    /// Prints help message and exit
    Help,
    /// Prints version information and exit
    Version,
}

impl From<Run> for Parse {
    fn from(run: Run) -> Self {
        Parse::Run(run)
    }
}

/// Error in command line parsing
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// Short option that is not defined
    #[error("unknown option `-{0}`")]
    UnknownShortOption(char),

    /// Long option that is not defined
    #[error("unknown option `{0}`")]
    UnknownLongOption(String),

    /// Option missing an argument
    #[error("option `{0}` missing an argument")]
    MissingOptionArgument(String),

    /// Argument specified to an option that does not take an argument
    #[error("option `{0}` does not take an argument")]
    UnexpectedOptionArgument(String),

    /// Job capacity that is not a positive integer
    #[error("invalid job capacity `{0}`: must be a positive integer")]
    InvalidJobCapacity(String),

    /// Operand given to the shell, which reads commands from the standard
    /// input only
    #[error("unexpected operand `{0}`")]
    UnexpectedOperand(String),
}

/// Result of parsing a long option
#[derive(Clone, Debug, PartialEq, Eq)]
enum LongOption {
    JobCapacity(usize),
    Help,
    Version,
}

/// Intermediate object for parsing a long option
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LongOptionName {
    JobCapacity,
    Help,
    Version,
}

impl LongOptionName {
    /// Finds the option whose name starts with `name`.
    ///
    /// The option names have no common prefix, so any non-empty prefix is
    /// unambiguous.
    fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            None
        } else if "job-capacity".starts_with(name) {
            Some(Self::JobCapacity)
        } else if "help".starts_with(name) {
            Some(Self::Help)
        } else if "version".starts_with(name) {
            Some(Self::Version)
        } else {
            None
        }
    }
}

/// Parses command line arguments.
///
/// The first argument is the command name and is ignored.
pub fn parse<I, S>(args: I) -> Result<Parse, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut result = Run::default();

    // Skip the command name
    args.next();

    while let Some(arg) = args.next_if(|arg| arg.starts_with('-') && arg != "-") {
        if arg == "--" {
            break;
        }
        let option = if arg.starts_with("--") {
            parse_long(arg, &mut args)?
        } else {
            parse_short(&arg)?
        };
        match option {
            LongOption::JobCapacity(capacity) => result.job_capacity = capacity,
            LongOption::Help => return Ok(Parse::Help),
            LongOption::Version => return Ok(Parse::Version),
        }
    }

    // The shell takes no operands
    if let Some(operand) = args.next() {
        return Err(Error::UnexpectedOperand(operand));
    }

    Ok(Parse::Run(result))
}

/// Parses a short option argument such as `-h`.
///
/// Only the first option character is significant because all the short
/// options make the shell exit without running.
fn parse_short(arg: &str) -> Result<LongOption, Error> {
    match arg.chars().nth(1) {
        Some('h') => Ok(LongOption::Help),
        Some('V') => Ok(LongOption::Version),
        Some(c) => Err(Error::UnknownShortOption(c)),
        None => Err(Error::UnknownLongOption(arg.to_owned())),
    }
}

/// Parses a long option argument, consuming the option argument from `args`
/// if needed.
fn parse_long<I: Iterator<Item = String>>(
    arg: String,
    args: &mut Peekable<I>,
) -> Result<LongOption, Error> {
    let body = &arg[2..];
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value.to_owned())),
        None => (body, None),
    };
    let Some(option) = LongOptionName::from_name(name) else {
        return Err(Error::UnknownLongOption(arg));
    };

    match option {
        LongOptionName::JobCapacity => {
            let value = match value {
                Some(value) => value,
                None => args.next().ok_or(Error::MissingOptionArgument(arg))?,
            };
            parse_capacity(value).map(LongOption::JobCapacity)
        }
        LongOptionName::Help | LongOptionName::Version if value.is_some() => {
            Err(Error::UnexpectedOptionArgument(arg))
        }
        LongOptionName::Help => Ok(LongOption::Help),
        LongOptionName::Version => Ok(LongOption::Version),
    }
}

fn parse_capacity(value: String) -> Result<usize, Error> {
    match value.parse() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(Error::InvalidJobCapacity(value)),
    }
}
