//! # log-time-to-tempo
//!
//! Log work time to Tempo from the command line, with Jira as the issue
//! backend.
//!
//! ## Features
//!
//! - **Logging**: `log` and `logm` with start-time chaining, overlap warnings and a 10h daily limit
//! - **Reporting**: `list`, `stats` with sparklines, and issue `budget`s
//! - **Lookup**: cached Jira `projects` and `issues`, aliases, suggestions for mistyped issues
//! - **Configuration**: layered `.lt` dotenv files and an encrypted token store
//!
//! The binaries `log-time-to-tempo`, `log-time` and `lt` all call [`run`].

use commands::Cli;
use std::process::ExitCode;

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;

/// Runs the command line application and reports errors.
pub async fn run() -> ExitCode {
    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
