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
fn cd_prints_new_working_directory() {
    let stdin = file_with_content(b"cd /\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert!(result.status.success());
    assert_eq!(from_utf8(&result.stdout), Ok(": /\n: "));
}

#[test]
fn cd_without_operand_goes_home() {
    let home = tempfile::tempdir().unwrap();
    let expected = home.path().canonicalize().unwrap();
    let stdin = file_with_content(b"cd\n");
    let result = subject()
        .env("HOME", home.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert_eq!(
        from_utf8(&result.stdout),
        Ok(format!(": {}\n: ", expected.display()).as_str())
    );
}

#[test]
fn cd_affects_later_commands() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker"), "").unwrap();
    let script = format!("cd {}\nls\n", dir.path().display());
    let stdin = file_with_content(script.as_bytes());
    let result = subject().stdin(stdin).output().unwrap();
    let stdout = from_utf8(&result.stdout).unwrap();
    assert!(stdout.ends_with(": marker\n: "), "{stdout:?}");
}

#[test]
fn cd_to_nonexistent_directory_fails() {
    let stdin = file_with_content(b"cd /\ncd /nonexistent/directory\npwd\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert!(result.status.success());
    assert_eq!(from_utf8(&result.stdout), Ok(": /\n: cd failed\n: /\n: "));
}

#[test]
fn cd_without_home_fails() {
    let stdin = file_with_content(b"cd\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": cd failed\n: "));
}
