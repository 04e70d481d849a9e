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

//! Command line syntax of smallsh
//!
//! The shell reads one command per line. A command line has the form
//!
//! ```text
//! word... [< input_path] [> output_path] [&]
//! ```
//!
//! where words are separated by whitespace. The [`syntax`] module defines
//! [`CommandSpec`](syntax::CommandSpec), the structured form of a command
//! line, and the [`parser`] module converts a line of text into it.
//!
//! ```
//! use smallsh_syntax::parser::parse_line;
//! let spec = parse_line("sort -r < in.txt > out.txt &").unwrap().unwrap();
//! assert_eq!(spec.program_and_args, ["sort", "-r"]);
//! assert_eq!(spec.input_redirect.as_deref(), Some("in.txt"));
//! assert_eq!(spec.output_redirect.as_deref(), Some("out.txt"));
//! assert!(spec.background_requested);
//! ```
//!
//! There is no quoting, no escaping, and no expansion. Blank lines and lines
//! whose first word starts with `#` are not commands.

pub mod parser;
pub mod syntax;
