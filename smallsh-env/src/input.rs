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

//! Reading command lines

use crate::io::Fd;
use crate::system::Result;
use crate::system::System;
use std::slice::from_mut;

/// Line reader that reads from a file descriptor.
///
/// `FdReader` reads one byte at a time so that it never consumes input past
/// the end of the current line. Child processes share the file descriptor
/// with the shell, and any input the shell had buffered would be lost to
/// them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "FdReader does nothing unless read from"]
pub struct FdReader {
    /// File descriptor to read from
    fd: Fd,
    /// Maximum number of bytes kept from a line, excluding the newline
    limit: Option<usize>,
}

impl FdReader {
    /// Creates a new `FdReader` instance.
    pub fn new(fd: Fd) -> Self {
        FdReader { fd, limit: None }
    }

    /// Limits the number of bytes kept from each line.
    ///
    /// Bytes beyond the limit are still consumed up to the end of the line,
    /// but they are discarded. The newline is always kept.
    pub fn with_limit(self, limit: usize) -> Self {
        FdReader {
            limit: Some(limit),
            ..self
        }
    }

    /// Reads a line.
    ///
    /// The returned line includes the trailing newline unless the input ended
    /// without one. An empty string means the end of input. Invalid UTF-8
    /// sequences are replaced with U+FFFD.
    pub fn read_line<S: System + ?Sized>(&self, system: &mut S) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            let mut byte = 0;
            match system.read(self.fd, from_mut(&mut byte))? {
                // End of input
                0 => break,

                _ if byte == b'\n' => {
                    bytes.push(byte);
                    break;
                }

                _ => {
                    if self.limit.is_none_or(|limit| bytes.len() < limit) {
                        bytes.push(byte);
                    }
                }
            }
        }

        let line = String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(&e.into_bytes()).into());
        Ok(line)
    }
}

impl Default for FdReader {
    fn default() -> Self {
        FdReader::new(Fd::STDIN)
    }
}
