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

use crate::{background_pid, file_with_content, subject};
use std::str::from_utf8;
use std::time::Duration;
use std::time::Instant;

#[test]
fn exit_ends_shell_successfully() {
    let stdin = file_with_content(b"false\nexit\necho unreachable\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(from_utf8(&result.stdout), Ok(": : "));
}

#[test]
fn exit_kills_background_jobs() {
    let start = Instant::now();
    let stdin = file_with_content(b"sleep 30 &\nexit\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(result.status.code(), Some(0));
    let stdout = from_utf8(&result.stdout).unwrap();
    let pid = background_pid(stdout);
    assert_eq!(stdout, format!(": background PID is {pid}\n: "));
    // The output pipe closes only after the killed job is gone.
    assert!(start.elapsed() < Duration::from_secs(20));
}

#[test]
fn end_of_input_acts_like_exit() {
    let start = Instant::now();
    let stdin = file_with_content(b"sleep 30 &\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(result.status.code(), Some(0));
    assert!(start.elapsed() < Duration::from_secs(20));
}
