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
fn output_redirection_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let stdin = file_with_content(b"echo hello world > out.txt\ncat < out.txt\n");
    let result = subject()
        .current_dir(dir.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": : hello world\n: "));
    let content = std::fs::read(dir.path().join("out.txt")).unwrap();
    assert_eq!(content, b"hello world\n");
}

#[test]
fn output_redirection_truncates_and_sets_permissions() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let stdin = file_with_content(b"echo a long first line > out.txt\necho b > out.txt\n");
    let result = subject()
        .current_dir(dir.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert!(result.status.success());
    assert_eq!(std::fs::read(&path).unwrap(), b"b\n");

    // The umask may clear bits but never adds any.
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777 & !0o644, 0);
}

#[test]
fn input_and_output_redirections_together() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("in.txt"), "b\na\n").unwrap();
    let stdin = file_with_content(b"sort > out.txt < in.txt\n");
    let result = subject()
        .current_dir(dir.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert!(result.status.success());
    assert_eq!(std::fs::read(dir.path().join("out.txt")).unwrap(), b"a\nb\n");
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let stdin = file_with_content(b"cat < missing.txt > out.txt\nstatus\n");
    let result = subject()
        .current_dir(dir.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert!(result.status.success());
    assert_eq!(
        from_utf8(&result.stdout),
        Ok(": cannot open missing.txt for input\n: exit value 1\n: ")
    );
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn unwritable_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let stdin = file_with_content(b"echo x > no/such/dir/out.txt\nstatus\n");
    let result = subject()
        .current_dir(dir.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert_eq!(
        from_utf8(&result.stdout),
        Ok(": cannot open no/such/dir/out.txt for output\n: exit value 1\n: ")
    );
}

#[test]
fn builtins_ignore_redirections() {
    let dir = tempfile::tempdir().unwrap();
    let stdin = file_with_content(b"status > out.txt\n");
    let result = subject()
        .current_dir(dir.path())
        .stdin(stdin)
        .output()
        .unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": exit value 0\n: "));
    assert!(!dir.path().join("out.txt").exists());
}
