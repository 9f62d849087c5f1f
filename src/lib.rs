//! sn-catalog - ServiceNow Service Catalog adapters
//!
//! Translates structured parameters into Service Catalog REST calls and
//! normalizes the responses into [`types::OperationOutcome`] values.
//!
//! The interesting part is [`catalog::submit_catalog_request`]: whichever
//! record the remote instance creates for a submission (a request with a
//! child requested item, or a record produced directly), the caller gets a
//! single `(record_id, record_number)` pair back.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod instance;
pub mod transport;
pub mod types;
