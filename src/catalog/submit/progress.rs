//! Progress callback trait for interface-agnostic updates
//!
//! Submission reports what it is doing through [`ProgressCallback`] rather
//! than logging; the CLI prints styled lines, library users can forward to
//! `tracing` with [`TracingProgress`] or ignore everything with
//! [`NoopProgress`].

use crate::catalog::submit::RemoteRecordShape;
use crate::error::Error;
use crate::types::SubmissionResult;
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, error, info};

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Calling `order_now` / `submit_producer`
    Submitting,
    /// Looking up the requested item under a parent request
    ResolvingItem,
    /// Submission complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitting => write!(f, "Submitting"),
            Self::ResolvingItem => write!(f, "Resolving requested item"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the submission response has been classified
    async fn on_submitted(&self, item_id: &str, shape: &RemoteRecordShape);

    /// Called with the record the submission resolved to
    async fn on_resolved(&self, result: &SubmissionResult);

    /// Called when the submission fails
    async fn on_error(&self, error: &Error);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_submitted(&self, _item_id: &str, _shape: &RemoteRecordShape) {}
    async fn on_resolved(&self, _result: &SubmissionResult) {}
    async fn on_error(&self, _error: &Error) {}
}

/// Progress callback that emits `tracing` events
pub struct TracingProgress;

#[async_trait]
impl ProgressCallback for TracingProgress {
    async fn on_phase(&self, phase: Phase) {
        debug!(%phase, "submission phase");
    }

    async fn on_submitted(&self, item_id: &str, shape: &RemoteRecordShape) {
        match shape {
            RemoteRecordShape::Request { request_id, .. } => {
                info!(item_id, ?request_id, "submission created a parent request");
            }
            RemoteRecordShape::Direct { record_id, .. } => {
                info!(item_id, ?record_id, "submission created a record directly");
            }
        }
    }

    async fn on_resolved(&self, result: &SubmissionResult) {
        info!(
            record_id = ?result.record_id,
            record_number = ?result.record_number,
            "submission resolved"
        );
    }

    async fn on_error(&self, err: &Error) {
        error!("Error submitting catalog request: {err}");
    }
}
