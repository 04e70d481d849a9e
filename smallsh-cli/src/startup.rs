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

//! Preparing the shell before the read-eval loop starts

use self::args::Run;
use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::job::JobRegistry;
use smallsh_env::signal::Role;
use smallsh_env::signal::apply_dispositions;
use smallsh_env::system::Errno;
use tracing_subscriber::EnvFilter;

pub mod args;

/// Name of the environment variable that configures diagnostic logging
pub const LOG_ENV_VAR: &str = "SMALLSH_LOG";

/// Installs the global logger.
///
/// Log records are written to the standard error. The filter is read from
/// [`LOG_ENV_VAR`] in the `tracing_subscriber` directive syntax. Logging is
/// off if the variable is unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Configures the environment according to the command line.
///
/// This function installs the built-ins, sizes the job registry, and sets up
/// the signal dispositions of the shell process.
pub fn configure_environment<S: System>(env: &mut Env<S>, run: Run) -> Result<(), Errno> {
    smallsh_builtin::install(env);
    env.jobs = JobRegistry::with_capacity(run.job_capacity);
    apply_dispositions(&mut env.system, Role::Shell)?;
    tracing::debug!(job_capacity = run.job_capacity, "shell configured");
    Ok(())
}
