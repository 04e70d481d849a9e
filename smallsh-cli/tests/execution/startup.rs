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

use crate::subject;
use std::process::Stdio;
use std::str::from_utf8;

#[test]
fn version_option() {
    let result = subject().arg("--version").output().unwrap();
    assert!(result.status.success());
    let expected = format!("smallsh {}\n", env!("CARGO_PKG_VERSION"));
    assert_eq!(from_utf8(&result.stdout), Ok(expected.as_str()));
}

#[test]
fn help_option() {
    let result = subject().arg("-h").stdin(Stdio::null()).output().unwrap();
    assert!(result.status.success());
    let stdout = from_utf8(&result.stdout).unwrap();
    assert!(stdout.starts_with("Usage: smallsh"), "{stdout:?}");
    assert!(stdout.contains("--job-capacity"), "{stdout:?}");
}

#[test]
fn unknown_option_is_usage_error() {
    let result = subject().arg("--bogus").stdin(Stdio::null()).output().unwrap();
    assert_eq!(result.status.code(), Some(2));
    assert_eq!(
        from_utf8(&result.stderr),
        Ok("smallsh: unknown option `--bogus`\n")
    );
    assert_eq!(from_utf8(&result.stdout), Ok(""));
}

#[test]
fn operand_is_usage_error() {
    let result = subject().arg("script.sh").stdin(Stdio::null()).output().unwrap();
    assert_eq!(result.status.code(), Some(2));
    assert_eq!(
        from_utf8(&result.stderr),
        Ok("smallsh: unexpected operand `script.sh`\n")
    );
}

#[test]
fn logging_goes_to_standard_error() {
    let result = subject()
        .env("SMALLSH_LOG", "debug")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(result.status.success());
    assert_eq!(from_utf8(&result.stdout), Ok(": "));
    let stderr = from_utf8(&result.stderr).unwrap();
    assert!(stderr.contains("end of input"), "{stderr:?}");
}

#[test]
fn logging_is_off_by_default() {
    let result = subject().stdin(Stdio::null()).output().unwrap();
    assert!(result.status.success());
    assert_eq!(from_utf8(&result.stderr), Ok(""));
}
