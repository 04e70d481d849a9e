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

use crate::{file_with_content, subject};
use std::str::from_utf8;

#[test]
fn status_before_any_command() {
    let stdin = file_with_content(b"status\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": exit value 0\n: "));
}

#[test]
fn status_after_successful_command() {
    let stdin = file_with_content(b"echo hello\nstatus\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": hello\n: exit value 0\n: "));
}

#[test]
fn status_after_failing_command() {
    let stdin = file_with_content(b"false\nstatus\nstatus\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(
        from_utf8(&result.stdout),
        Ok(": : exit value 1\n: exit value 1\n: ")
    );
}

#[test]
fn status_ignores_background_commands() {
    let stdin = file_with_content(b"false\nsleep 1 &\nstatus\n");
    let result = subject().stdin(stdin).output().unwrap();
    let stdout = from_utf8(&result.stdout).unwrap();
    assert!(stdout.ends_with(": exit value 1\n: "), "{stdout:?}");
}
