//! CLI progress callback with a spinner on stderr

use crate::cli::style::{spinner_style, Stylize};
use async_trait::async_trait;
use indicatif::ProgressBar;
use sn_catalog::catalog::submit::{Phase, ProgressCallback, RemoteRecordShape};
use sn_catalog::error::Error;
use sn_catalog::types::SubmissionResult;
use std::time::Duration;

/// Spinner-driven progress for `submit`
///
/// Also forwards every event to `tracing`, so `-v` shows what the spinner
/// hides.
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a progress reporter with a running spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        tracing::debug!(%phase, "submission phase");
        match phase {
            Phase::Complete => self.spinner.finish_and_clear(),
            _ => self.spinner.set_message(format!("{phase}...")),
        }
    }

    async fn on_submitted(&self, item_id: &str, shape: &RemoteRecordShape) {
        let created = match shape {
            RemoteRecordShape::Request { request_number, .. } => {
                format!("request {}", request_number.as_deref().unwrap_or("(no number)"))
            }
            RemoteRecordShape::Direct { record_number, .. } => {
                format!("record {}", record_number.as_deref().unwrap_or("(no number)"))
            }
        };
        tracing::info!(item_id, %created, "submitted");
        self.spinner
            .println(format!("  {} created {}", item_id.accent(), created.muted()));
    }

    async fn on_resolved(&self, result: &SubmissionResult) {
        tracing::info!(
            record_id = ?result.record_id,
            record_number = ?result.record_number,
            "submission resolved"
        );
    }

    async fn on_error(&self, err: &Error) {
        tracing::error!("Error submitting catalog request: {err}");
        self.spinner.abandon_with_message(format!("{}", "failed".error()));
    }
}
