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

//! Structured form of a command line

use std::fmt;

/// Command parsed from a line of input
///
/// The program name and its arguments are stored without the redirection
/// operators, their operands, or the trailing `&`. Redirections and
/// backgrounding are independent of each other.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CommandSpec {
    /// Program name followed by arguments
    ///
    /// This is never empty for a value returned by the parser.
    pub program_and_args: Vec<String>,
    /// Path of the file the standard input is redirected from
    pub input_redirect: Option<String>,
    /// Path of the file the standard output is redirected to
    pub output_redirect: Option<String>,
    /// Whether the line ended with a separate `&`
    pub background_requested: bool,
}

impl CommandSpec {
    /// Returns the program name.
    ///
    /// Returns an empty string if `program_and_args` is empty.
    #[must_use]
    pub fn program(&self) -> &str {
        self.program_and_args.first().map_or("", String::as_str)
    }

    /// Returns the arguments following the program name.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.program_and_args.get(1..).unwrap_or_default()
    }
}

/// Formats the command in the canonical order.
///
/// The result parses back into an equal `CommandSpec`.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program_and_args.join(" "))?;
        if let Some(path) = &self.input_redirect {
            write!(f, " < {path}")?;
        }
        if let Some(path) = &self.output_redirect {
            write!(f, " > {path}")?;
        }
        if self.background_requested {
            f.write_str(" &")?;
        }
        Ok(())
    }
}
