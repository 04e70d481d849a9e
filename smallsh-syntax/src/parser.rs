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

//! Command line parser
//!
//! [`parse_line`] splits a line into whitespace-separated words and
//! interprets them as follows:
//!
//! - If the last word is exactly `&`, it is removed and the command is to be
//!   run in the background. A `&` anywhere else is an ordinary word.
//! - A `<` or `>` word takes the next word as the path to redirect the
//!   standard input or output to. If the same direction is redirected more
//!   than once, the last redirection wins.
//! - All other words make up the program name and its arguments, in order.
//!   Words after a redirection are still arguments.
//!
//! A blank line and a line whose first word starts with `#` do not contain a
//! command and are parsed into `None`.

use crate::syntax::CommandSpec;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of words in the program name and arguments
pub const MAX_ARGS: usize = 512;

/// Maximum length of a line in bytes, excluding the line terminator
pub const MAX_LINE_LENGTH: usize = 2048;

/// Error in parsing a command line
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum ParseError {
    /// A redirection operator is not followed by a path
    #[error("missing file name after `{0}`")]
    MissingRedirectTarget(char),

    /// The line has redirections or `&` but no program name
    #[error("missing command name")]
    MissingCommand,

    /// The line has more words than [`MAX_ARGS`]
    #[error("too many arguments (limit {})", MAX_ARGS)]
    TooManyArguments,

    /// The line is longer than [`MAX_LINE_LENGTH`]
    #[error("command line too long (limit {} bytes)", MAX_LINE_LENGTH)]
    LineTooLong,
}

/// Parses a line into a command.
///
/// The line may or may not end with a newline. Returns `Ok(None)` for a blank
/// or comment line.
pub fn parse_line(line: &str) -> Result<Option<CommandSpec>, ParseError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if line.len() > MAX_LINE_LENGTH {
        return Err(ParseError::LineTooLong);
    }

    let mut words = line.split_whitespace().collect::<Vec<_>>();
    match words.first() {
        None => return Ok(None),
        Some(first) if first.starts_with('#') => return Ok(None),
        Some(_) => (),
    }

    let mut spec = CommandSpec::default();
    if words.last() == Some(&"&") {
        words.pop();
        spec.background_requested = true;
    }

    let mut words = words.into_iter();
    while let Some(word) = words.next() {
        match word {
            "<" => {
                let path = words.next().ok_or(ParseError::MissingRedirectTarget('<'))?;
                spec.input_redirect = Some(path.to_owned());
            }
            ">" => {
                let path = words.next().ok_or(ParseError::MissingRedirectTarget('>'))?;
                spec.output_redirect = Some(path.to_owned());
            }
            _ => spec.program_and_args.push(word.to_owned()),
        }
    }

    if spec.program_and_args.is_empty() {
        return Err(ParseError::MissingCommand);
    }
    if spec.program_and_args.len() > MAX_ARGS {
        return Err(ParseError::TooManyArguments);
    }
    Ok(Some(spec))
}

/// Parses a line that contains a command.
///
/// Unlike [`parse_line`], this implementation rejects a blank or comment line
/// with [`ParseError::MissingCommand`].
impl FromStr for CommandSpec {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_line(s)?.ok_or(ParseError::MissingCommand)
    }
}
