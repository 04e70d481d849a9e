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

use crate::{BIN, file_with_content, subject};
use nix::sys::signal::Signal;
use nix::sys::signal::kill;
use nix::unistd::Pid;
use std::io::Read as _;
use std::io::Write as _;
use std::process::Child;
use std::process::Command;
use std::process::Stdio;
use std::str::from_utf8;

/// Starts the shell with piped standard input and output and waits for the
/// first prompt.
fn start_interactive() -> Child {
    let mut child = Command::new(BIN)
        .env_clear()
        .env("PATH", std::env::var_os("PATH").unwrap())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let mut prompt = [0; 2];
    child.stdout.as_mut().unwrap().read_exact(&mut prompt).unwrap();
    assert_eq!(&prompt, b": ");
    child
}

fn finish(mut child: Child, input: &[u8]) -> String {
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input).unwrap();
    drop(stdin);
    let mut stdout = String::new();
    child
        .stdout
        .take()
        .unwrap()
        .read_to_string(&mut stdout)
        .unwrap();
    assert!(child.wait().unwrap().success());
    stdout
}

fn signal_shell(child: &Child, signal: Signal) {
    let pid = Pid::from_raw(child.id().try_into().unwrap());
    kill(pid, signal).unwrap();
}

#[test]
fn foreground_child_killed_by_signal() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("interrupt.sh");
    std::fs::write(&script, "kill -INT $$\nexit 0\n").unwrap();
    let input = format!("sh {}\nstatus\n", script.display());
    let stdin = file_with_content(input.as_bytes());

    let result = subject().stdin(stdin).output().unwrap();
    assert!(result.status.success());
    assert_eq!(
        from_utf8(&result.stdout),
        Ok(": terminated by signal 2\n: terminated by signal 2\n: ")
    );
}

#[test]
fn background_child_ignores_sigint() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("interrupt.sh");
    std::fs::write(&script, "kill -INT $$\nexit 3\n").unwrap();
    let input = format!("sh {} &\nsleep 1\n", script.display());
    let stdin = file_with_content(input.as_bytes());

    let result = subject().stdin(stdin).output().unwrap();
    let stdout = from_utf8(&result.stdout).unwrap();
    assert!(stdout.contains(" is done: exit value 3\n"), "{stdout:?}");
}

#[test]
fn shell_ignores_sigint() {
    let child = start_interactive();
    signal_shell(&child, Signal::SIGINT);
    let stdout = finish(child, b"status\n");
    assert_eq!(stdout, "exit value 0\n: ");
}

#[test]
fn sigtstp_enters_foreground_only_mode() {
    let child = start_interactive();
    signal_shell(&child, Signal::SIGTSTP);
    let stdout = finish(child, b"true &\n");
    assert_eq!(
        stdout,
        "\nEntering foreground-only mode (& is now ignored)\n: : "
    );
}

#[test]
fn second_sigtstp_exits_foreground_only_mode() {
    let mut child = start_interactive();
    signal_shell(&child, Signal::SIGTSTP);
    let mut message = [0; 52];
    child.stdout.as_mut().unwrap().read_exact(&mut message).unwrap();
    assert_eq!(
        from_utf8(&message),
        Ok("\nEntering foreground-only mode (& is now ignored)\n: ")
    );

    signal_shell(&child, Signal::SIGTSTP);
    let stdout = finish(child, b"sleep 0 &\n");
    let pid = crate::background_pid(&stdout);
    assert_eq!(
        stdout,
        format!("\nExiting foreground-only mode\n: background PID is {pid}\n: ")
    );
}
