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

#[test]
fn finished_background_job_is_reported() {
    let stdin = file_with_content(b"sleep 1 &\nsleep 2\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert!(result.status.success());
    let stdout = from_utf8(&result.stdout).unwrap();
    let pid = background_pid(stdout);
    assert_eq!(
        stdout,
        format!(": background PID is {pid}\n: background pid {pid} is done: exit value 0\n: ")
    );
}

#[test]
fn background_job_exit_value_is_reported() {
    let stdin = file_with_content(b"ls /nonexistent/directory &\nsleep 1\n");
    let result = subject().stdin(stdin).output().unwrap();
    let stdout = from_utf8(&result.stdout).unwrap();
    let pid = background_pid(stdout);
    assert!(
        stdout.contains(&format!("background pid {pid} is done: exit value 2\n")),
        "{stdout:?}"
    );
}

#[test]
fn background_job_does_not_block_shell() {
    let stdin = file_with_content(b"sleep 5 &\necho immediately\n");
    let result = subject().stdin(stdin).output().unwrap();
    let stdout = from_utf8(&result.stdout).unwrap();
    let pid = background_pid(stdout);
    assert_eq!(
        stdout,
        format!(": background PID is {pid}\n: immediately\n: ")
    );
}

#[test]
fn full_job_registry_is_reported() {
    let stdin = file_with_content(b"sleep 2 &\nsleep 2 &\nexit\n");
    let result = subject()
        .args(["--job-capacity", "1"])
        .stdin(stdin)
        .output()
        .unwrap();
    assert!(result.status.success());
    let stderr = from_utf8(&result.stderr).unwrap();
    assert!(stderr.starts_with("smallsh: cannot track background process "), "{stderr:?}");
    assert!(stderr.ends_with("too many background jobs (limit 1)\n"), "{stderr:?}");
    let stdout = from_utf8(&result.stdout).unwrap();
    assert_eq!(stdout.matches("background PID is ").count(), 2);
}
