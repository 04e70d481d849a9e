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

//! This is an internal library crate for the smallsh shell. **This crate is
//! not intended to be used as a library by other crates.**
//!
//! The entry point for the shell is the [`main`] function, which is to be used
//! as the `main` function in the binary crate. The function parses the
//! command line, sets up the shell environment and runs the read-eval loop.

pub mod startup;

use self::startup::args::Parse;
use smallsh_env::Env;
use smallsh_env::RealSystem;
use smallsh_env::System;
use smallsh_env::SystemEx as _;
use smallsh_env::job::Signal;
use smallsh_env::signal::Disposition;
use smallsh_semantics::ExitStatus;
use smallsh_semantics::runner::read_eval_loop;
use std::ops::ControlFlow::{Break, Continue};

/// Usage message printed by the `--help` option
pub const USAGE: &str = "\
Usage: smallsh [OPTION]...
Run an interactive shell that reads commands from the standard input.

Options:
  --job-capacity=N  track at most N background jobs at a time (default 100)
  -h, --help        print this help and exit
  -V, --version     print version information and exit

Set SMALLSH_LOG (e.g. SMALLSH_LOG=debug) to print diagnostics to the
standard error.
";

fn run_as_shell_process<S: System>(env: &mut Env<S>) -> ExitStatus {
    // Parse the command-line arguments
    let run = match self::startup::args::parse(std::env::args()) {
        Ok(Parse::Help) => {
            env.system.print(USAGE);
            return ExitStatus::SUCCESS;
        }
        Ok(Parse::Version) => {
            let version = env!("CARGO_PKG_VERSION");
            env.system.print(&format!("smallsh {version}\n"));
            return ExitStatus::SUCCESS;
        }
        Ok(Parse::Run(run)) => run,
        Err(e) => {
            env.system.print_error(&format!("smallsh: {e}\n"));
            return ExitStatus::ERROR;
        }
    };

    if let Err(errno) = self::startup::configure_environment(env, run) {
        let message = format!("smallsh: cannot set up signal handling: {}\n", errno.desc());
        env.system.print_error(&message);
        return ExitStatus::FAILURE;
    }

    match read_eval_loop(env) {
        Continue(()) => ExitStatus::SUCCESS,
        Break(divert) => {
            tracing::debug!(?divert, "shell exiting");
            divert.exit_status()
        }
    }
}

pub fn main() -> ! {
    self::startup::init_logging();

    // SAFETY: This is the only instance of RealSystem we create in the whole
    // process.
    let system = unsafe { RealSystem::new() };
    let mut env = Env::with_system(system);

    // Rust by default sets SIGPIPE to SIG_IGN, which is not desired.
    // As an imperfect workaround, we set SIGPIPE to SIG_DFL here.
    _ = env.system.sigaction(Signal::SIGPIPE, Disposition::Default);

    let exit_status = run_as_shell_process(&mut env);
    env.system.exit(exit_status)
}
