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
fn external_command_with_arguments() {
    let stdin = file_with_content(b"echo one   two\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert!(result.status.success());
    assert_eq!(from_utf8(&result.stdout), Ok(": one two\n: "));
}

#[test]
fn blank_and_comment_lines_print_prompt_only() {
    let stdin = file_with_content(b"\n# echo hidden\n   \n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": : : : "));
    assert_eq!(from_utf8(&result.stderr), Ok(""));
}

#[test]
fn ampersand_in_the_middle_is_an_argument() {
    let stdin = file_with_content(b"echo a & b\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": a & b\n: "));
}

#[test]
fn unknown_command_is_reported_by_child() {
    let stdin = file_with_content(b"no_such_command_for_smallsh\nstatus\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert!(result.status.success());
    assert_eq!(from_utf8(&result.stdout), Ok(": : exit value 1\n: "));
    assert_eq!(
        from_utf8(&result.stderr),
        Ok("no_such_command_for_smallsh: No such file or directory\n")
    );
}

#[test]
fn syntax_error_is_reported_and_shell_continues() {
    let stdin = file_with_content(b"cat <\necho after\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": : after\n: "));
    assert_eq!(
        from_utf8(&result.stderr),
        Ok("smallsh: missing file name after `<`\n")
    );
}

#[test]
fn child_reads_rest_of_shell_input() {
    let stdin = file_with_content(b"head -n 1\nline for head\necho done\n");
    let result = subject().stdin(stdin).output().unwrap();
    assert_eq!(from_utf8(&result.stdout), Ok(": line for head\n: done\n: "));
}
