//! Outcome rendering

use crate::cli::style::{check, cross, partial, Stylize};
use anstream::{eprintln, println};
use serde::Serialize;
use sn_catalog::types::OperationOutcome;
use std::process::ExitCode;

/// Print an outcome: JSON on stdout, status line on stderr
///
/// Returns the process exit code for the outcome.
pub fn emit<T: Serialize>(outcome: &OperationOutcome<T>) -> anyhow::Result<ExitCode> {
    print_json(outcome)?;
    Ok(status_line(outcome.success, &outcome.message, false))
}

/// Print an outcome as pretty JSON on stdout
pub fn print_json<T: Serialize>(outcome: &OperationOutcome<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

/// Print the stderr status line; `partial` marks a success with failures
pub fn status_line(success: bool, message: &str, partial_success: bool) -> ExitCode {
    if !success {
        eprintln!("{} {}", cross(), message.error());
        return ExitCode::FAILURE;
    }
    if partial_success {
        eprintln!("{} {}", partial(), message.warn());
    } else {
        eprintln!("{} {}", check(), message);
    }
    ExitCode::SUCCESS
}

/// UI link to a record in a known table
pub fn record_url(instance_url: &str, table: &str, sys_id: &str) -> String {
    format!("{instance_url}/{table}.do?sys_id={sys_id}")
}
